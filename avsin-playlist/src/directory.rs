use tracing::warn;
use walkdir::WalkDir;

/// Lists the immediate contents of a stimulus directory.
pub trait DirectoryReader {
    /// Names of regular files directly inside `directory`, without the directory prefix.
    fn files_in(&self, directory: &str) -> Vec<String>;
    fn subdirectories(&self, directory: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

/// Reads the real filesystem. Hidden entries are skipped and names come back sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemDirectoryReader;

impl FileSystemDirectoryReader {
    fn entries(&self, directory: &str, kind: EntryKind) -> Vec<String> {
        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut names = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    let matches = match kind {
                        EntryKind::File => file_type.is_file(),
                        EntryKind::Directory => file_type.is_dir(),
                    };
                    let name = entry.file_name().to_string_lossy();
                    if matches && !name.starts_with('.') {
                        names.push(name.into_owned());
                    }
                }
                Err(e) => {
                    warn!(directory, error = %e, "unable to read directory entry");
                }
            }
        }
        names
    }
}

impl DirectoryReader for FileSystemDirectoryReader {
    fn files_in(&self, directory: &str) -> Vec<String> {
        self.entries(directory, EntryKind::File)
    }

    fn subdirectories(&self, directory: &str) -> Vec<String> {
        self.entries(directory, EntryKind::Directory)
    }
}

/// Keeps only files whose names end with one of the given extensions.
#[derive(Debug, Clone)]
pub struct FileExtensionFilter<D> {
    reader: D,
    extensions: Vec<String>,
}

impl<D: DirectoryReader> FileExtensionFilter<D> {
    pub fn new<I, S>(reader: D, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reader,
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl<D: DirectoryReader> DirectoryReader for FileExtensionFilter<D> {
    fn files_in(&self, directory: &str) -> Vec<String> {
        self.reader
            .files_in(directory)
            .into_iter()
            .filter(|file| {
                self.extensions
                    .iter()
                    .any(|extension| file.ends_with(extension.as_str()))
            })
            .collect()
    }

    fn subdirectories(&self, directory: &str) -> Vec<String> {
        self.reader.subdirectories(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn stimulus_directory() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.wav"), b"").unwrap();
        fs::write(dir.path().join("a.mov"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join(".DS_Store"), b"").unwrap();
        fs::create_dir(dir.path().join("list2")).unwrap();
        fs::create_dir(dir.path().join("list1")).unwrap();
        fs::write(dir.path().join("list1").join("c.wav"), b"").unwrap();
        dir
    }

    fn path(dir: &TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    #[test]
    fn files_are_sorted_and_exclude_hidden_and_directories() {
        let dir = stimulus_directory();
        let files = FileSystemDirectoryReader.files_in(&path(&dir));
        assert_eq!(files, vec!["a.mov", "b.wav", "notes.txt"]);
    }

    #[test]
    fn subdirectories_are_listed_without_nesting() {
        let dir = stimulus_directory();
        let subdirectories = FileSystemDirectoryReader.subdirectories(&path(&dir));
        assert_eq!(subdirectories, vec!["list1", "list2"]);
    }

    #[test]
    fn missing_directory_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let files = FileSystemDirectoryReader.files_in(&missing.to_string_lossy());
        assert!(files.is_empty());
    }

    #[test]
    fn extension_filter_keeps_matching_files() {
        let dir = stimulus_directory();
        let reader = FileExtensionFilter::new(FileSystemDirectoryReader, [".wav", ".mov"]);
        assert_eq!(reader.files_in(&path(&dir)), vec!["a.mov", "b.wav"]);
        assert_eq!(reader.subdirectories(&path(&dir)), vec!["list1", "list2"]);
    }
}
