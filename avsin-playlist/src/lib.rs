//! Randomized stimulus playlists read from a directory tree.

pub mod directory;
pub mod list;
pub mod reader;
pub mod shuffle;

pub use directory::{DirectoryReader, FileExtensionFilter, FileSystemDirectoryReader};
pub use list::{
    CyclicRandomizedTargetList, EachTargetPlayedOnceThenShuffleAndRepeat,
    RandomizedTargetListWithReplacement, RandomizedTargetListWithoutReplacement,
};
pub use reader::{SubdirectoryTargetListReader, TargetListFactory};
pub use shuffle::{RandomShuffle, Shuffle};

/// Joins a directory and a file name with a `/` separator.
pub(crate) fn join(directory: &str, name: &str) -> String {
    format!("{directory}/{name}")
}
