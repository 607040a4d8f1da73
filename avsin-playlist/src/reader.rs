use crate::directory::DirectoryReader;
use crate::join;
use avsin_core::{TargetList, TargetListReader};
use tracing::info;

pub trait TargetListFactory {
    fn make(&mut self) -> Box<dyn TargetList>;
}

impl<F> TargetListFactory for F
where
    F: FnMut() -> Box<dyn TargetList>,
{
    fn make(&mut self) -> Box<dyn TargetList> {
        self()
    }
}

/// Builds one list per subdirectory, each loaded from that subdirectory.
pub struct SubdirectoryTargetListReader<D, F> {
    reader: D,
    factory: F,
}

impl<D: DirectoryReader, F: TargetListFactory> SubdirectoryTargetListReader<D, F> {
    pub fn new(reader: D, factory: F) -> Self {
        Self { reader, factory }
    }
}

impl<D: DirectoryReader, F: TargetListFactory> TargetListReader
    for SubdirectoryTargetListReader<D, F>
{
    fn read(&mut self, directory: &str) -> Vec<Box<dyn TargetList>> {
        let lists: Vec<_> = self
            .reader
            .subdirectories(directory)
            .iter()
            .map(|subdirectory| {
                let mut list = self.factory.make();
                list.load_from_directory(&join(directory, subdirectory));
                list
            })
            .collect();
        info!(directory, lists = lists.len(), "target lists read");
        lists
    }
}
