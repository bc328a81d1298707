//! The filesystem capability, and both of its implementations.
//!
//! Nothing else in this crate calls `std::fs` directly. The scanner and
//! the materializer take an [`FsGateway`] by reference, which is what lets
//! every piece of tree logic run against [`MemFs`] in tests, byte-for-byte
//! the same code that runs against [`OsFs`] in production.

use crate::types::path;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind, Result};
use std::time::SystemTime;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub name: String,
    pub is_dir: bool,
}

/// Blocking, synchronous filesystem access, narrowed to exactly what tree
/// scanning and materialization need.
///
/// Paths are slash-normalized strings (see [`crate::types::path`]).
/// Listing order is whatever the backing store reports - callers must not
/// assume it's sorted.
pub trait FsGateway {
    fn exists(&self, path: &str) -> bool;
    fn is_dir(&self, path: &str) -> bool;
    fn is_file(&self, path: &str) -> bool;
    /// Immediate children of a directory, in backend order.
    fn list_children(&self, path: &str) -> Result<Vec<Child>>;
    fn file_size(&self, path: &str) -> Result<u64>;
    /// `None` when the backend can't report a modification time.
    fn modified_time(&self, path: &str) -> Option<SystemTime>;
    /// Create a directory. An already-existing directory at `path` is a
    /// success, not an error. With `recursive`, missing parents are
    /// created too; without it, a missing parent is an error.
    fn create_dir(&self, path: &str, recursive: bool) -> Result<()>;
}

/// The real deal: `std::fs`.
#[derive(Debug, Default, Copy, Clone)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl FsGateway for OsFs {
    fn exists(&self, path: &str) -> bool {
        std::path::Path::new(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        std::path::Path::new(path).is_dir()
    }

    fn is_file(&self, path: &str) -> bool {
        std::path::Path::new(path).is_file()
    }

    fn list_children(&self, path: &str) -> Result<Vec<Child>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            out.push(Child {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(out)
    }

    fn file_size(&self, path: &str) -> Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn modified_time(&self, path: &str) -> Option<SystemTime> {
        std::fs::metadata(path).ok()?.modified().ok()
    }

    fn create_dir(&self, path: &str, recursive: bool) -> Result<()> {
        if recursive {
            return std::fs::create_dir_all(path);
        }
        match std::fs::create_dir(path) {
            Err(e) if e.kind() == ErrorKind::AlreadyExists && self.is_dir(path) => Ok(()),
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum MemEntry {
    Dir,
    File { size: u64, modified: SystemTime },
}

/// An in-memory stand-in for a filesystem.
///
/// Seed it with [`add_dir`](MemFs::add_dir) / [`add_file`](MemFs::add_file)
/// (ancestor directories appear implicitly, like `mkdir -p`), then hand it
/// to a [`Scanner`](crate::Scanner) or
/// [`Materializer`](crate::Materializer) as if it were a disk. Listing
/// order is sorted, which is one legal "backend order" and keeps tests
/// deterministic.
///
/// Interior mutability via `RefCell` is deliberate: the crate's model is
/// single-threaded and synchronous, and the gateway trait takes `&self`
/// so that read paths don't demand a mutable filesystem.
#[derive(Debug, Default)]
pub struct MemFs {
    entries: RefCell<BTreeMap<String, MemEntry>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(path: &str) -> String {
        let s = path::sanitize(path);
        if s.len() > 1 {
            s.trim_end_matches('/').to_string()
        } else {
            s
        }
    }

    fn insert_ancestors(entries: &mut BTreeMap<String, MemEntry>, key: &str) {
        if key.len() < 2 {
            return;
        }
        let mut idx = 0;
        while let Some(next) = key[idx + 1..].find('/') {
            idx += 1 + next;
            let parent = &key[..idx];
            if !parent.is_empty() {
                entries.entry(parent.to_string()).or_insert(MemEntry::Dir);
            }
        }
    }

    /// Seed a directory (and any missing ancestors).
    pub fn add_dir(&self, path: &str) {
        let key = Self::key(path);
        let mut entries = self.entries.borrow_mut();
        Self::insert_ancestors(&mut entries, &key);
        entries.insert(key, MemEntry::Dir);
    }

    /// Seed a file of `size` bytes (and any missing ancestor directories).
    pub fn add_file(&self, path: &str, size: u64) {
        let key = Self::key(path);
        let mut entries = self.entries.borrow_mut();
        Self::insert_ancestors(&mut entries, &key);
        entries.insert(
            key,
            MemEntry::File {
                size,
                modified: SystemTime::now(),
            },
        );
    }

    /// Drop a path, as if something external deleted it mid-flight.
    pub fn remove(&self, path: &str) {
        self.entries.borrow_mut().remove(&Self::key(path));
    }
}

impl FsGateway for MemFs {
    fn exists(&self, path: &str) -> bool {
        self.entries.borrow().contains_key(&Self::key(path))
    }

    fn is_dir(&self, path: &str) -> bool {
        matches!(
            self.entries.borrow().get(&Self::key(path)),
            Some(MemEntry::Dir)
        )
    }

    fn is_file(&self, path: &str) -> bool {
        matches!(
            self.entries.borrow().get(&Self::key(path)),
            Some(MemEntry::File { .. })
        )
    }

    fn list_children(&self, path: &str) -> Result<Vec<Child>> {
        let key = Self::key(path);
        let entries = self.entries.borrow();
        if !matches!(entries.get(&key), Some(MemEntry::Dir)) {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("not a directory: {key}"),
            ));
        }
        let prefix = format!("{}/", key.trim_end_matches('/'));
        let mut out = Vec::new();
        for (k, v) in entries.range(prefix.clone()..) {
            if !k.starts_with(&prefix) {
                break;
            }
            let rest = &k[prefix.len()..];
            if rest.is_empty() || rest.contains('/') {
                continue;
            }
            out.push(Child {
                name: rest.to_string(),
                is_dir: matches!(v, MemEntry::Dir),
            });
        }
        Ok(out)
    }

    fn file_size(&self, path: &str) -> Result<u64> {
        match self.entries.borrow().get(&Self::key(path)) {
            Some(MemEntry::File { size, .. }) => Ok(*size),
            _ => Err(Error::new(
                ErrorKind::NotFound,
                format!("no such file: {path}"),
            )),
        }
    }

    fn modified_time(&self, path: &str) -> Option<SystemTime> {
        match self.entries.borrow().get(&Self::key(path)) {
            Some(MemEntry::File { modified, .. }) => Some(*modified),
            _ => None,
        }
    }

    fn create_dir(&self, path: &str, recursive: bool) -> Result<()> {
        let key = Self::key(path);
        let mut entries = self.entries.borrow_mut();
        match entries.get(&key) {
            Some(MemEntry::Dir) => return Ok(()),
            Some(MemEntry::File { .. }) => {
                return Err(Error::new(
                    ErrorKind::AlreadyExists,
                    format!("exists but is not a directory: {key}"),
                ));
            }
            None => {}
        }
        if recursive {
            Self::insert_ancestors(&mut entries, &key);
        } else if let Some(idx) = key.rfind('/') {
            let parent = if idx == 0 { "/" } else { &key[..idx] };
            if !matches!(entries.get(parent), Some(MemEntry::Dir)) {
                return Err(Error::new(
                    ErrorKind::NotFound,
                    format!("missing parent: {parent}"),
                ));
            }
        }
        entries.insert(key, MemEntry::Dir);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn memfs_seeds_ancestors() {
        let fs = MemFs::new();
        fs.add_file("/a/b/c.txt", 3);
        assert!(fs.is_dir("/a"));
        assert!(fs.is_dir("/a/b"));
        assert!(fs.is_file("/a/b/c.txt"));
        assert!(fs.exists("/a/b"));
        assert!(!fs.exists("/a/x"));
    }

    #[test]
    fn memfs_lists_direct_children_only() -> Result<()> {
        let fs = MemFs::new();
        fs.add_file("/root/beta.txt", 1);
        fs.add_dir("/root/alpha");
        fs.add_file("/root/alpha/nested.txt", 1);

        let children = fs.list_children("/root")?;
        assert_eq!(
            children,
            vec![
                Child {
                    name: "alpha".into(),
                    is_dir: true
                },
                Child {
                    name: "beta.txt".into(),
                    is_dir: false
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn memfs_listing_a_file_fails() {
        let fs = MemFs::new();
        fs.add_file("/f.txt", 1);
        assert!(fs.list_children("/f.txt").is_err());
        assert!(fs.list_children("/missing").is_err());
    }

    #[test]
    fn memfs_create_dir_is_idempotent() -> Result<()> {
        let fs = MemFs::new();
        fs.create_dir("/x/y", true)?;
        fs.create_dir("/x/y", true)?;
        assert!(fs.is_dir("/x/y"));
        assert!(fs.is_dir("/x"));
        Ok(())
    }

    #[test]
    fn memfs_create_dir_flat_needs_parent() {
        let fs = MemFs::new();
        assert!(fs.create_dir("/no/parent", false).is_err());
        fs.add_dir("/no");
        assert!(fs.create_dir("/no/parent", false).is_ok());
    }

    #[test]
    fn memfs_create_dir_over_file_fails() {
        let fs = MemFs::new();
        fs.add_file("/blocker", 1);
        let err = fs.create_dir("/blocker", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn memfs_file_metadata() -> Result<()> {
        let fs = MemFs::new();
        fs.add_file("/m/song.mp3", 4096);
        assert_eq!(fs.file_size("/m/song.mp3")?, 4096);
        assert!(fs.modified_time("/m/song.mp3").is_some());
        assert!(fs.modified_time("/m").is_none());
        assert!(fs.file_size("/m").is_err());
        Ok(())
    }

    #[test]
    fn osfs_round_trip() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_string_lossy().into_owned();
        let fs = OsFs::new();

        fs.create_dir(&format!("{root}/sub/deeper"), true)?;
        // Second time around is a no-op, not an error.
        fs.create_dir(&format!("{root}/sub/deeper"), true)?;
        fs.create_dir(&format!("{root}/sub/deeper"), false)?;
        std::fs::write(format!("{root}/sub/hello.txt"), b"hello")?;

        assert!(fs.is_dir(&format!("{root}/sub")));
        assert!(fs.is_file(&format!("{root}/sub/hello.txt")));
        assert_eq!(fs.file_size(&format!("{root}/sub/hello.txt"))?, 5);
        assert!(fs.modified_time(&format!("{root}/sub/hello.txt")).is_some());

        let mut children = fs.list_children(&format!("{root}/sub"))?;
        children.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            children,
            vec![
                Child {
                    name: "deeper".into(),
                    is_dir: true
                },
                Child {
                    name: "hello.txt".into(),
                    is_dir: false
                },
            ]
        );
        Ok(())
    }
}
