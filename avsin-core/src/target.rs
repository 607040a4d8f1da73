/// Source of stimulus file paths for one test.
pub trait TargetList {
    fn load_from_directory(&mut self, directory: &str);
    /// Advances and returns the new current target.
    fn next(&mut self) -> String;
    fn current(&self) -> String;
    fn directory(&self) -> String;
    /// Always false for cyclic lists.
    fn empty(&self) -> bool {
        false
    }
    /// Puts the current target back so it is presented again later.
    fn reinsert_current(&mut self) {}
}

/// Produces one target list per subdirectory of a stimulus directory.
pub trait TargetListReader {
    fn read(&mut self, directory: &str) -> Vec<Box<dyn TargetList>>;
}
