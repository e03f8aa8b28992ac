use super::ConfigError;
use std::path::{Path, PathBuf};

/// Per-user files the shell reads and writes.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    pub history_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::in_dir(&home))
    }

    pub fn in_dir(home: &Path) -> Self {
        ConfigPaths {
            rc_path: home.join(".hshrc"),
            history_path: home.join(".hsh_history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_in_home() {
        let paths = ConfigPaths::in_dir(Path::new("/home/testuser"));

        assert_eq!(paths.rc_path, PathBuf::from("/home/testuser/.hshrc"));
        assert_eq!(paths.history_path, PathBuf::from("/home/testuser/.hsh_history"));
    }
}
