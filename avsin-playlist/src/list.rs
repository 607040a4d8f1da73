use crate::directory::DirectoryReader;
use crate::join;
use crate::shuffle::Shuffle;
use avsin_core::TargetList;
use tracing::debug;

fn full_path_or_empty(directory: &str, file: Option<&String>) -> String {
    file.map(|file| join(directory, file)).unwrap_or_default()
}

/// Endless list. After each pick the remaining files are reshuffled, and the
/// pick moves to the back so it cannot come up twice in a row.
pub struct RandomizedTargetListWithReplacement<D, S> {
    reader: D,
    shuffle: S,
    files: Vec<String>,
    directory: String,
}

impl<D: DirectoryReader, S: Shuffle> RandomizedTargetListWithReplacement<D, S> {
    pub fn new(reader: D, shuffle: S) -> Self {
        Self {
            reader,
            shuffle,
            files: Vec::new(),
            directory: String::new(),
        }
    }
}

impl<D: DirectoryReader, S: Shuffle> TargetList for RandomizedTargetListWithReplacement<D, S> {
    fn load_from_directory(&mut self, directory: &str) {
        self.directory = directory.to_string();
        self.files = self.reader.files_in(directory);
        self.shuffle.shuffle(&mut self.files);
        debug!(directory, files = self.files.len(), "target list loaded");
    }

    fn next(&mut self) -> String {
        let Some(last) = self.files.len().checked_sub(1) else {
            return String::new();
        };
        self.files.rotate_left(1);
        self.shuffle.shuffle(&mut self.files[..last]);
        self.current()
    }

    fn current(&self) -> String {
        full_path_or_empty(&self.directory, self.files.last())
    }

    fn directory(&self) -> String {
        self.directory.clone()
    }
}

/// Finite list. Each file is handed out once unless it is reinserted.
pub struct RandomizedTargetListWithoutReplacement<D, S> {
    reader: D,
    shuffle: S,
    files: Vec<String>,
    directory: String,
    current_file: Option<String>,
}

impl<D: DirectoryReader, S: Shuffle> RandomizedTargetListWithoutReplacement<D, S> {
    pub fn new(reader: D, shuffle: S) -> Self {
        Self {
            reader,
            shuffle,
            files: Vec::new(),
            directory: String::new(),
            current_file: None,
        }
    }
}

impl<D: DirectoryReader, S: Shuffle> TargetList for RandomizedTargetListWithoutReplacement<D, S> {
    fn load_from_directory(&mut self, directory: &str) {
        self.directory = directory.to_string();
        self.files = self.reader.files_in(directory);
        self.shuffle.shuffle(&mut self.files);
        self.current_file = None;
        debug!(directory, files = self.files.len(), "target list loaded");
    }

    fn next(&mut self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        self.current_file = Some(self.files.remove(0));
        self.current()
    }

    fn current(&self) -> String {
        full_path_or_empty(&self.directory, self.current_file.as_ref())
    }

    fn directory(&self) -> String {
        self.directory.clone()
    }

    fn empty(&self) -> bool {
        self.files.is_empty()
    }

    fn reinsert_current(&mut self) {
        if let Some(file) = &self.current_file {
            self.files.push(file.clone());
        }
    }
}

/// Endless list shuffled once at load, then rotated.
pub struct CyclicRandomizedTargetList<D, S> {
    reader: D,
    shuffle: S,
    files: Vec<String>,
    directory: String,
}

impl<D: DirectoryReader, S: Shuffle> CyclicRandomizedTargetList<D, S> {
    pub fn new(reader: D, shuffle: S) -> Self {
        Self {
            reader,
            shuffle,
            files: Vec::new(),
            directory: String::new(),
        }
    }
}

impl<D: DirectoryReader, S: Shuffle> TargetList for CyclicRandomizedTargetList<D, S> {
    fn load_from_directory(&mut self, directory: &str) {
        self.directory = directory.to_string();
        self.files = self.reader.files_in(directory);
        self.shuffle.shuffle(&mut self.files);
        debug!(directory, files = self.files.len(), "target list loaded");
    }

    fn next(&mut self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        self.files.rotate_left(1);
        self.current()
    }

    fn current(&self) -> String {
        full_path_or_empty(&self.directory, self.files.last())
    }

    fn directory(&self) -> String {
        self.directory.clone()
    }
}

/// Finite list that plays every file once per pass, reshuffling between passes,
/// and reports empty after `repeats` passes.
pub struct EachTargetPlayedOnceThenShuffleAndRepeat<D, S> {
    reader: D,
    shuffle: S,
    files: Vec<String>,
    directory: String,
    current_file: Option<String>,
    current_index: usize,
    repeats: usize,
    completed_passes: usize,
}

impl<D: DirectoryReader, S: Shuffle> EachTargetPlayedOnceThenShuffleAndRepeat<D, S> {
    pub fn new(reader: D, shuffle: S) -> Self {
        Self {
            reader,
            shuffle,
            files: Vec::new(),
            directory: String::new(),
            current_file: None,
            current_index: 0,
            repeats: 1,
            completed_passes: 0,
        }
    }

    pub fn set_repeats(&mut self, repeats: usize) {
        self.repeats = repeats;
    }
}

impl<D: DirectoryReader, S: Shuffle> TargetList for EachTargetPlayedOnceThenShuffleAndRepeat<D, S> {
    fn load_from_directory(&mut self, directory: &str) {
        self.directory = directory.to_string();
        self.files = self.reader.files_in(directory);
        self.shuffle.shuffle(&mut self.files);
        self.current_file = None;
        self.current_index = 0;
        self.completed_passes = 0;
        debug!(
            directory,
            files = self.files.len(),
            repeats = self.repeats,
            "target list loaded"
        );
    }

    fn next(&mut self) -> String {
        let Some(file) = self.files.get(self.current_index).cloned() else {
            return String::new();
        };
        self.current_file = Some(file);
        self.current_index += 1;
        if self.current_index == self.files.len() {
            self.current_index = 0;
            self.completed_passes += 1;
            self.shuffle.shuffle(&mut self.files);
        }
        self.current()
    }

    fn current(&self) -> String {
        full_path_or_empty(&self.directory, self.current_file.as_ref())
    }

    fn directory(&self) -> String {
        self.directory.clone()
    }

    fn empty(&self) -> bool {
        self.files.is_empty() || self.completed_passes >= self.repeats
    }
}
