//! Speech-in-noise recognition tests: the `Model` facade wires adaptive and
//! fixed-level methods to the trial engine and the stimulus playlists.

pub mod model;
pub mod settings;

pub use model::{FileSystemPlaylists, Model, PlaylistFactory};
pub use settings::load_config;
