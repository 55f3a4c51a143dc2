use std::fs;
use std::path::{Path, PathBuf};

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("bmtree");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/bmtree");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("bmtree");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Where the JSON tree for `input` goes when no output path is given:
/// the input's file name with a `.json` extension, next to the input or
/// inside `out_dir`
pub fn default_output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bookmarks"));

    let path = match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    };
    path.with_extension("json")
}

/// Whether `a` and `b` name the same file, following links and `..`
///
/// Paths that don't exist yet are compared through their parent directory,
/// so two spellings of a future output still match.
pub fn same_file(a: &Path, b: &Path) -> bool {
    a == b || resolve_path(a) == resolve_path(b)
}

fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            fs::canonicalize(parent)
                .map(|parent| parent.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
