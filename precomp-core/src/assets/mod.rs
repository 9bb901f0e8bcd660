mod fs;
mod memory;

pub use fs::FsAssetOracle;
pub use memory::MemoryAssetOracle;

/// Answers whether a static asset exists at an exact path.
///
/// Implementations must not apply any content-encoding logic of their own,
/// and report `false` when the lookup itself fails.
pub trait AssetOracle {
    fn exists(&self, path: &str) -> bool;
}

impl<F> AssetOracle for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}
