//! The descriptor tree: what a scan hands back.

use crate::traits::gateway::FsGateway;
use crate::types::error::{Error, Result};
use crate::types::path;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// An enum we use to differentiate files vs folders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    File,
    Folder,
}

/// One node of a descriptor tree.
///
/// This is a closed sum: every traversal in the crate matches on exactly
/// these two variants, so there is no "unknown entry kind" to mishandle.
/// Descriptors are snapshots - nothing mutates one after the scan that
/// built it returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Descriptor {
    File(FileDescriptor),
    Folder(FolderDescriptor),
}

impl Descriptor {
    pub fn kind(&self) -> Kind {
        match self {
            Self::File(_) => Kind::File,
            Self::Folder(_) => Kind::Folder,
        }
    }

    /// Absolute, slash-normalized path of the entry.
    pub fn path(&self) -> &str {
        match self {
            Self::File(f) => &f.path,
            Self::Folder(f) => &f.path,
        }
    }

    /// File base name without its extension, or the folder's own name.
    pub fn name(&self) -> &str {
        match self {
            Self::File(f) => &f.name,
            Self::Folder(f) => &f.name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_file(&self) -> Option<&FileDescriptor> {
        match self {
            Self::File(f) => Some(f),
            Self::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderDescriptor> {
        match self {
            Self::File(_) => None,
            Self::Folder(f) => Some(f),
        }
    }
}

/// A regular file, as it looked when scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub path: String,
    /// Base name with the last-dot extension stripped: `notes.txt` scans
    /// with name `notes`, and `archive.tar.gz` with name `archive.tar`.
    pub name: String,
    /// Lowercase, no leading dot. Empty when the name carries none.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    /// Absent when the gateway can't report one.
    pub modified: Option<SystemTime>,
}

impl FileDescriptor {
    /// Describe the regular file at `path`.
    ///
    /// This is the only way to get a `FileDescriptor`, which is how the
    /// crate guarantees one always refers to something that was a real
    /// file at construction time. Anything else - a folder, a missing
    /// path - is [`Error::NotFound`]. A file that vanishes between the
    /// existence check and the size read surfaces as [`Error::Transient`].
    pub fn stat(gw: &impl FsGateway, path: &str) -> Result<Self> {
        let path = path::sanitize(path);
        if !gw.is_file(&path) {
            return Err(Error::NotFound(path));
        }
        let size = gw.file_size(&path).map_err(|source| Error::Transient {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            name: path::base_name(&path),
            extension: path::extension(&path),
            modified: gw.modified_time(&path),
            path,
            size,
        })
    }
}

/// A folder and (maybe) what's inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderDescriptor {
    pub path: String,
    /// The folder's own leaf name, extension and all.
    pub name: String,
    /// Whether the path existed at scan time.
    pub exists: bool,
    /// Children in the order the gateway listed them (which is whatever
    /// order the underlying filesystem felt like - not sorted).
    ///
    /// Two different situations look identical here: a folder that is
    /// truly empty on disk, and a subfolder a *shallow* scan chose not to
    /// descend into. Only a deep scan promises that empty means empty.
    pub contents: Vec<Descriptor>,
}

impl FolderDescriptor {
    /// A descriptor for `path` with no contents attached yet.
    ///
    /// `exists: false` is a legitimate final state: scanning a missing
    /// path answers "that's not there" rather than erroring.
    pub fn new(path: &str, exists: bool) -> Self {
        let path = path::sanitize(path);
        Self {
            name: path::leaf(&path).to_string(),
            exists,
            contents: Vec::new(),
            path,
        }
    }
}
