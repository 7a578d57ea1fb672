use std::fs;
use std::path::Path;

pub struct ScanOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Optional: max depth to recurse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            max_depth: None,
        }
    }
}

/// A file or directory found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path relative to the root, `/`-separated, no trailing separator.
    pub path: String,
    pub is_dir: bool,
}

/// Walks `root` and hands every entry to `visit`, in name order. A directory
/// is only descended into when `visit` returns `true` for it.
pub fn scan(root: &Path, options: &ScanOptions, visit: &mut impl FnMut(&Entry) -> bool) {
    walk(root, root, options, 0, visit);
}

fn walk(root: &Path, dir: &Path, options: &ScanOptions, depth: usize, visit: &mut impl FnMut(&Entry) -> bool) {
    let mut entries = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .collect::<Vec<_>>(),
        Err(e) => {
            warn!("Cannot read '{}': {}", dir.display(), e);
            return;
        },
    };
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        let Some(relative) = relative_path(root, &path) else {
            debug!("Skipping non UTF-8 path '{}'", path.display());
            continue;
        };

        let found = Entry {
            path: relative,
            is_dir: meta.is_dir(),
        };
        let descend = visit(&found);

        if found.is_dir && descend {
            // Only recurse if recursive is enabled and we haven't hit max depth
            let under_limit = options
                .max_depth
                .is_none_or(|max| depth < max);
            if options.recursive && under_limit {
                walk(root, &path, options, depth + 1, visit);
            }
        }
    }
}

/// Normalizes `path` below `root` to a `/`-separated relative path.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let parts = path
        .strip_prefix(root)
        .ok()?
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
        })
        .collect::<Option<Vec<_>>>()?;

    Some(parts.join("/"))
}
