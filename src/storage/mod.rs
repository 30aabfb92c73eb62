pub mod filesystem;
pub mod traits;

pub use filesystem::FsContentStore;
pub use traits::ContentStore;
