//! Read-only traversals over a scanned tree.
//!
//! All four operations walk `contents` left to right and recurse into
//! folders *in place* - a deep file listing is not "this level first,
//! then descendants", it's a depth-first interleaving in discovery order.
//! None of them mutate anything, and all are deterministic for a fixed
//! tree.

use crate::types::descriptor::{Descriptor, FileDescriptor, FolderDescriptor};

impl FolderDescriptor {
    /// Files directly in this folder; with `deep`, files of every nested
    /// folder too, spliced in where the folder sits in `contents`.
    ///
    /// Shallow (`deep: false`) never descends, so placeholder subfolders
    /// from a shallow scan and fully-scanned ones behave the same here.
    pub fn get_files(&self, deep: bool) -> Vec<&FileDescriptor> {
        let mut files = Vec::new();
        for item in &self.contents {
            match item {
                Descriptor::File(file) => files.push(file),
                Descriptor::Folder(sub) => {
                    if deep {
                        files.extend(sub.get_files(true));
                    }
                }
            }
        }
        files
    }

    /// Folders directly in this folder; with `deep`, each one is followed
    /// immediately by its own nested folders, recursively.
    pub fn get_folders(&self, deep: bool) -> Vec<&FolderDescriptor> {
        let mut folders = Vec::new();
        for item in &self.contents {
            match item {
                Descriptor::File(_) => {}
                Descriptor::Folder(sub) => {
                    folders.push(sub);
                    if deep {
                        folders.extend(sub.get_folders(true));
                    }
                }
            }
        }
        folders
    }

    /// Every child, each folder followed immediately by its flattened
    /// subtree - **regardless of `deep`**.
    ///
    /// Yes, regardless: unlike [`get_files`](Self::get_files) and
    /// [`get_folders`](Self::get_folders), this operation has always
    /// flattened the whole subtree whatever its flag says, and callers
    /// depend on that output. Kept as-is for compatibility; the flag is
    /// accepted and ignored.
    pub fn get_contents(&self, deep: bool) -> Vec<&Descriptor> {
        let mut contents = Vec::new();
        for item in &self.contents {
            contents.push(item);
            match item {
                Descriptor::File(_) => {}
                Descriptor::Folder(sub) => contents.extend(sub.get_contents(deep)),
            }
        }
        contents
    }

    /// The `path` of every child and descendant, in
    /// [`get_contents`](Self::get_contents) order - and with the same
    /// always-flatten behavior, `deep` or not.
    pub fn get_paths(&self, deep: bool) -> Vec<&str> {
        let mut paths = Vec::new();
        for item in &self.contents {
            paths.push(item.path());
            match item {
                Descriptor::File(_) => {}
                Descriptor::Folder(sub) => paths.extend(sub.get_paths(deep)),
            }
        }
        paths
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::gateway::MemFs;
    use crate::traits::scan::Scanner;

    /// Builds and deep-scans:
    ///
    /// r
    /// ├── a.txt
    /// ├── sub1
    /// │   ├── b.txt
    /// │   └── sub2
    /// │       └── c.txt
    /// └── z.txt
    fn fixture() -> FolderDescriptor {
        let fs = MemFs::new();
        fs.add_file("/r/a.txt", 1);
        fs.add_file("/r/sub1/b.txt", 2);
        fs.add_file("/r/sub1/sub2/c.txt", 3);
        fs.add_file("/r/z.txt", 4);
        Scanner::new(&fs).scan("/r", true)
    }

    #[test]
    fn files_shallow() {
        let tree = fixture();
        let names: Vec<_> = tree.get_files(false).iter().map(|f| &f.name).collect();
        assert_eq!(names, vec!["a", "z"]);
    }

    #[test]
    fn files_deep_interleave_in_discovery_order() {
        let tree = fixture();
        let paths: Vec<_> = tree.get_files(true).iter().map(|f| &f.path).collect();
        // sub1's files land between a.txt and z.txt, not after them.
        assert_eq!(
            paths,
            vec![
                "/r/a.txt",
                "/r/sub1/b.txt",
                "/r/sub1/sub2/c.txt",
                "/r/z.txt",
            ]
        );
    }

    #[test]
    fn folders_honor_deep() {
        let tree = fixture();

        let shallow: Vec<_> = tree.get_folders(false).iter().map(|f| &f.name).collect();
        assert_eq!(shallow, vec!["sub1"]);

        let deep: Vec<_> = tree.get_folders(true).iter().map(|f| &f.name).collect();
        assert_eq!(deep, vec!["sub1", "sub2"]);
    }

    #[test]
    fn contents_flatten_ignores_deep() {
        let tree = fixture();
        // Pins the documented quirk: both flags, identical output.
        assert_eq!(tree.get_contents(false), tree.get_contents(true));
        assert_eq!(tree.get_paths(false), tree.get_paths(true));

        let paths: Vec<_> = tree
            .get_contents(false)
            .iter()
            .map(|d| d.path())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/r/a.txt",
                "/r/sub1",
                "/r/sub1/b.txt",
                "/r/sub1/sub2",
                "/r/sub1/sub2/c.txt",
                "/r/z.txt",
            ]
        );
    }

    #[test]
    fn paths_match_contents_order() {
        let tree = fixture();
        let from_contents: Vec<_> = tree.get_contents(true).iter().map(|d| d.path()).collect();
        assert_eq!(tree.get_paths(true), from_contents);
    }

    #[test]
    fn shallow_scan_hides_nested_files_even_queried_deep() {
        let fs = MemFs::new();
        fs.add_file("/r/sub/inner.txt", 9);

        let tree = Scanner::new(&fs).scan("/r", false);
        // The placeholder's contents are empty, so there's nothing for a
        // deep query to find. Descending needs a deep *scan*.
        assert!(tree.get_files(false).is_empty());
        assert!(tree.get_files(true).is_empty());

        let deep_tree = Scanner::new(&fs).scan("/r", true);
        assert_eq!(deep_tree.get_files(true).len(), 1);
    }

    #[test]
    fn queries_on_absent_folder_are_empty() {
        let fs = MemFs::new();
        let tree = Scanner::new(&fs).scan("/gone", true);
        assert!(tree.get_files(true).is_empty());
        assert!(tree.get_folders(true).is_empty());
        assert!(tree.get_contents(true).is_empty());
        assert!(tree.get_paths(true).is_empty());
    }
}
