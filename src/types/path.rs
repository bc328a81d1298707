//! Path strings, the dirsketch way.
//!
//! Every path this crate produces obeys the following rules:
//!
//!  * Separated with `/`, never `\`
//!  * No runs of multiple `/` characters
//!
//! That's a lot laxer than a full canonical form - absolute vs. relative
//! and `.`/`..` segments are the caller's business - but it's enough to
//! make paths comparable across platforms, and [`sanitize`] is idempotent
//! so layers of this crate can re-sanitize freely without drift.

/// Normalize separators: `\` becomes `/`, and runs of `/` collapse to one.
///
/// Leading and trailing separators are kept (one of each at most).
pub fn sanitize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;
    for c in path.chars() {
        let is_sep = c == '/' || c == '\\';
        if is_sep {
            if !prev_sep {
                out.push('/');
            }
        } else {
            out.push(c);
        }
        prev_sep = is_sep;
    }
    out
}

/// Join path segments with `/`, dropping empty segments, and sanitize the
/// result.
pub fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !full.is_empty() {
            full.push('/');
        }
        full.push_str(part);
    }
    sanitize(&full)
}

/// The last segment of a path, ignoring any trailing separator.
pub fn leaf(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    match trimmed.rfind(['/', '\\']) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// The extension of the last path segment: whatever follows the final dot,
/// lowercased, without the dot. `""` when there is no extension.
pub fn extension(name: &str) -> String {
    let leaf = leaf(name);
    match leaf.rfind('.') {
        Some(idx) if idx + 1 < leaf.len() => leaf[idx + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// The last path segment with its final-dot extension stripped.
///
/// Only the *last* extension goes: `archive.tar.gz` becomes `archive.tar`.
pub fn base_name(name: &str) -> String {
    let leaf = leaf(name);
    match leaf.rfind('.') {
        Some(idx) if idx + 1 < leaf.len() => leaf[..idx].to_string(),
        _ => leaf.to_string(),
    }
}
