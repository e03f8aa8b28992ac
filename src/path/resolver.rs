use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::input::tokenizer;

/// Separator between `PATH` entries.
pub const PATH_DELIMITER: &str = ":";

/// A command word naming a path is used as-is and never searched for.
pub fn is_path(word: &str) -> bool {
    word.contains('/')
}

/// Turns a command word into the file that should run for it.
///
/// Path-shaped words only need to exist. Bare words are looked up in each
/// `PATH` directory in order and the first directory holding an entry with
/// exactly that name wins, whatever its type or mode.
pub fn resolve(word: &str, path_var: &str) -> Option<PathBuf> {
    if is_path(word) {
        let path = Path::new(word);
        return path.exists().then(|| path.to_path_buf());
    }

    let found = search_dirs(path_var)
        .into_iter()
        .find_map(|dir| find_in_dir(Path::new(&dir), word));

    match &found {
        Some(path) => debug!("resolved {} to {}", word, path.display()),
        None => debug!("{} not found in PATH", word),
    }
    found
}

/// Directories listed in a `PATH` value, in order; empty entries are dropped.
pub fn search_dirs(path_var: &str) -> Vec<String> {
    tokenizer::split(path_var, PATH_DELIMITER, 0).unwrap_or_default()
}

fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            trace!("skipping {}: {}", dir.display(), e);
            return None;
        }
    };

    entries
        .filter_map(Result::ok)
        .find(|entry| entry.file_name() == OsStr::new(name))
        .map(|entry| dir.join(entry.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    fn join(dirs: &[&Path]) -> String {
        dirs.iter()
            .map(|d| d.to_str().unwrap())
            .collect::<Vec<_>>()
            .join(":")
    }

    #[test]
    fn test_first_path_entry_wins() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let in_a = touch(a.path(), "x", 0o755);
        touch(b.path(), "x", 0o755);

        let path_var = join(&[a.path(), b.path()]);
        assert_eq!(resolve("x", &path_var), Some(in_a));
    }

    #[test]
    fn test_later_directory_is_searched() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let in_b = touch(b.path(), "only_b", 0o755);

        let path_var = join(&[a.path(), b.path()]);
        assert_eq!(resolve("only_b", &path_var), Some(in_b));
    }

    #[test]
    fn test_unreadable_directories_are_skipped() {
        let b = tempfile::tempdir().unwrap();
        let in_b = touch(b.path(), "tool", 0o755);

        let path_var = format!("/definitely/not/here::{}", b.path().display());
        assert_eq!(resolve("tool", &path_var), Some(in_b));
    }

    #[test]
    fn test_mode_is_not_considered_during_search() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let plain = touch(a.path(), "x", 0o644);
        touch(b.path(), "x", 0o755);

        let path_var = join(&[a.path(), b.path()]);
        assert_eq!(resolve("x", &path_var), Some(plain));
    }

    #[test]
    fn test_path_words_skip_the_search() {
        let a = tempfile::tempdir().unwrap();
        touch(a.path(), "x", 0o755);
        let path_var = join(&[a.path()]);

        assert_eq!(resolve("./x", &path_var), None);
        assert_eq!(resolve("nope/x", &path_var), None);

        let absolute = a.path().join("x");
        assert_eq!(
            resolve(absolute.to_str().unwrap(), &path_var),
            Some(absolute.clone())
        );
    }

    #[test]
    fn test_empty_path_never_resolves_bare_words() {
        assert_eq!(resolve("sh", ""), None);
        assert_eq!(resolve("sh", ":::"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        let a = tempfile::tempdir().unwrap();
        touch(a.path(), "tool", 0o755);
        let path_var = join(&[a.path()]);

        assert_eq!(resolve("too", &path_var), None);
        assert_eq!(resolve("TOOL", &path_var), None);
    }

    #[test]
    fn test_search_dirs() {
        assert_eq!(search_dirs("/usr/bin::/bin:"), ["/usr/bin", "/bin"]);
        assert!(search_dirs("").is_empty());
    }
}
