//! Path shaping shared by every file operation.

use std::path::{Path, PathBuf};

/// Join segments with `/` and collapse doubled separators.
///
/// Empty segments are skipped. `.` and `..` are kept as-is and segment content
/// is not validated; this is string shaping only.
pub fn join_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(segment);
    }
    collapse_separators(&joined)
}

fn collapse_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_slash = false;
    for ch in raw.chars() {
        if ch == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(ch);
    }
    out
}

/// Maps an application-relative folder to an absolute filesystem location.
pub trait PathResolver {
    fn resolve(&self, relative: &str) -> PathBuf;
}

/// Resolves relative folders against a fixed application root.
#[derive(Debug, Clone)]
pub struct RootedResolver {
    root: PathBuf,
}

impl RootedResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for RootedResolver {
    fn resolve(&self, relative: &str) -> PathBuf {
        // "~/" marks an application-root relative reference.
        let trimmed = relative
            .strip_prefix("~/")
            .unwrap_or(relative)
            .trim_start_matches('/');
        PathBuf::from(join_path([&*self.root.to_string_lossy(), trimmed]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_separator() {
        assert_eq!(join_path(["a", "b", "c"]), "a/b/c");
        assert_eq!(join_path(["/tmp/out/", "people.xlsx"]), "/tmp/out/people.xlsx");
        assert_eq!(join_path(["/tmp//out/", "/x"]), "/tmp/out/x");
    }

    #[test]
    fn skips_empty_segments() {
        assert_eq!(join_path(["", "a", "", "b", ""]), "a/b");
        assert_eq!(join_path(Vec::<&str>::new()), "");
    }

    #[test]
    fn keeps_dot_segments() {
        assert_eq!(join_path(["a", "..", "b"]), "a/../b");
    }

    #[test]
    fn resolver_roots_relative_folders() {
        let resolver = RootedResolver::new("/srv/app");
        assert_eq!(
            resolver.resolve("~/content/exports"),
            PathBuf::from("/srv/app/content/exports")
        );
        assert_eq!(resolver.resolve("/content"), PathBuf::from("/srv/app/content"));
    }
}
