//! A library for describing and scaffolding directory trees.
//!
//! Writing recursive directory walks by hand is one of those chores that
//! every automation script ends up doing slightly differently, and slightly
//! wrong. Dirsketch does the two halves of that chore for you, in both
//! directions:
//!
//!  * The [`Scanner`] walks a real directory and hands you an immutable
//!    [`FolderDescriptor`] tree you can query (all files? all folders? every
//!    path, flattened?) without touching the disk again.
//!  * The [`Materializer`] takes a declarative nested spec - a plain JSON
//!    object, or the text of one - and creates the matching directories on
//!    disk, returning a [`Mirror`] of what it made.
//!
//! All filesystem access goes through the [`FsGateway`] capability trait,
//! so the whole crate runs against [`MemFs`] in tests without side effects,
//! and against [`OsFs`] everywhere else.
//!
//! ```
//! use dirsketch::*;
//!
//! let fs = MemFs::new();
//! fs.add_file("/music/intro.mp3", 1024);
//! fs.add_dir("/music/b-sides");
//!
//! let tree = Scanner::new(&fs).scan("/music", true);
//! assert!(tree.exists);
//! assert_eq!(tree.get_files(true).len(), 1);
//! ```

pub mod traits;
pub mod types;

pub use traits::*;
pub use types::*;
