//! Create directories from a declarative spec. See [`Materializer`].

use crate::traits::gateway::FsGateway;
use crate::types::error::{Error, Result};
use crate::types::mirror::Mirror;
use crate::types::path;
use serde_json::{Map, Value};

/// Turns a nested spec into real directories, via an [`FsGateway`].
///
/// A spec is a JSON object mapping directory names to sub-specs, where an
/// empty object means a leaf directory:
///
/// ```json
/// {"src": {"main": {}, "test": {}}, "docs": {}}
/// ```
///
/// Only directories are ever created - a spec can't describe files, and
/// materializing never touches any.
pub struct Materializer<'g, G: FsGateway> {
    gw: &'g G,
}

impl<'g, G: FsGateway> Materializer<'g, G> {
    pub fn new(gw: &'g G) -> Self {
        Self { gw }
    }

    /// Create every directory `spec` describes, under `root`, and return
    /// a [`Mirror`] of what now exists.
    ///
    /// Creation is idempotent - directories already on disk are successes,
    /// so running the same spec twice is safe. Any other creation failure
    /// stops the walk right there and reports the offending path; what was
    /// created before the failure stays (best-effort, no rollback).
    pub fn create_tree(&self, spec: &Value, root: &str) -> Result<Mirror> {
        let spec = spec
            .as_object()
            .ok_or_else(|| Error::InvalidSpec("top-level spec must be an object".into()))?;
        let root = path::sanitize(root);
        log::debug!("materialize {} key(s) under {root}", spec.len());
        self.materialize(spec, &root)
    }

    /// Like [`create_tree`](Self::create_tree), but takes the spec as JSON
    /// text. Decoded once, up front; malformed or non-object text is
    /// [`Error::InvalidSpec`].
    pub fn create_tree_json(&self, text: &str, root: &str) -> Result<Mirror> {
        let spec: Value =
            serde_json::from_str(text).map_err(|e| Error::InvalidSpec(e.to_string()))?;
        self.create_tree(&spec, root)
    }

    // Pure recursion: each call returns a freshly built subtree and the
    // caller attaches it, so no accumulator is threaded through.
    fn materialize(&self, spec: &Map<String, Value>, root: &str) -> Result<Mirror> {
        let mut mirror = Mirror::new(root.to_string());
        for (key, value) in spec {
            let sub = value.as_object().ok_or_else(|| {
                Error::InvalidSpec(format!("value under {key:?} must be an object"))
            })?;
            let child_path = path::join([root, key.as_str()]);
            self.gw
                .create_dir(&child_path, true)
                .map_err(|source| Error::DirectoryCreation {
                    path: child_path.clone(),
                    source,
                })?;
            let node = if sub.is_empty() {
                Mirror::new(child_path)
            } else {
                self.materialize(sub, &child_path)?
            };
            mirror.attach(key, node);
        }
        Ok(mirror)
    }
}
