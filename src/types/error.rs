/// Everything that can go wrong in this crate, in one place.
///
/// Note what is *not* here: scanning a path that doesn't exist. The
/// [`Scanner`](crate::traits::scan::Scanner) treats absence as an answer
/// (`exists: false`), not a failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `FileDescriptor` was requested for something that isn't a regular
    /// file at that path right now.
    #[error("not a regular file: {0}")]
    NotFound(String),

    /// A child vanished between listing and stat, or its metadata couldn't
    /// be read. Scans recover from these by skipping the child.
    #[error("transient failure reading {path}: {source}")]
    Transient {
        path: String,
        source: std::io::Error,
    },

    /// Directory creation failed for a reason other than already existing.
    /// `path` is the exact directory the materializer was working on, so
    /// the caller knows how far it got.
    #[error("could not create directory {path}: {source}")]
    DirectoryCreation {
        path: String,
        source: std::io::Error,
    },

    /// The declarative spec wasn't a JSON object of nested objects.
    #[error("invalid tree spec: {0}")]
    InvalidSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
