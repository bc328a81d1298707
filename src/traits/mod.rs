pub mod gateway;
pub mod materialize;
pub mod query;
pub mod scan;

pub use gateway::{Child, FsGateway, MemFs, OsFs};
pub use materialize::Materializer;
pub use scan::Scanner;
