pub mod descriptor;
pub mod error;
pub mod mirror;
pub mod path;

pub use descriptor::{Descriptor, FileDescriptor, FolderDescriptor, Kind};
pub use error::{Error, Result};
pub use mirror::Mirror;
