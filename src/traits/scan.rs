//! Read a directory tree off a gateway into descriptors. See [`Scanner`].

use crate::traits::gateway::FsGateway;
use crate::types::descriptor::{Descriptor, FileDescriptor, FolderDescriptor};
use crate::types::error::Error;
use crate::types::path;

/// Walks a directory through an [`FsGateway`] and builds the descriptor
/// tree for it. The scanner is the only producer of descriptor trees in
/// this crate.
pub struct Scanner<'g, G: FsGateway> {
    gw: &'g G,
}

impl<'g, G: FsGateway> Scanner<'g, G> {
    pub fn new(gw: &'g G) -> Self {
        Self { gw }
    }

    /// Describe the directory at `path`.
    ///
    /// `path` can be anything - a path that doesn't exist (or isn't a
    /// directory) comes back as a descriptor with `exists: false` and no
    /// contents. Absence is an answer, not an error.
    ///
    /// With `deep` unset, subfolders appear as placeholders: present in
    /// `contents`, `exists: true`, but with their own `contents` left
    /// empty no matter what's really inside them. With `deep` set, every
    /// descendant folder is fully populated.
    ///
    /// Scanning is best-effort by policy: a child that disappears between
    /// the directory listing and its metadata read is skipped, with a
    /// warning logged, rather than aborting the scan.
    pub fn scan(&self, path: &str, deep: bool) -> FolderDescriptor {
        let path = path::sanitize(path);
        log::debug!("scan {path} deep={deep}");

        if !self.gw.is_dir(&path) {
            return FolderDescriptor::new(&path, false);
        }
        let mut result = FolderDescriptor::new(&path, true);

        let children = match self.gw.list_children(&path) {
            Ok(children) => children,
            Err(source) => {
                // The directory was there a moment ago. Same skip policy
                // as for vanishing children, applied to the listing.
                log::warn!("{}", Error::Transient { path, source });
                return result;
            }
        };

        for child in children {
            let child_path = path::join([path.as_str(), child.name.as_str()]);
            if child.is_dir {
                let sub = if deep {
                    self.scan(&child_path, true)
                } else {
                    FolderDescriptor::new(&child_path, true)
                };
                result.contents.push(Descriptor::Folder(sub));
            } else {
                match FileDescriptor::stat(self.gw, &child_path) {
                    Ok(file) => result.contents.push(Descriptor::File(file)),
                    Err(e) => log::warn!("skipping {child_path}: {e}"),
                }
            }
        }
        result
    }
}
