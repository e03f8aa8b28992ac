use crate::error::ShellError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` for `cd` arguments.
#[derive(Clone, Debug)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    /// `home` normally comes from the shell's `HOME`; without one the
    /// platform's notion of the home directory is used.
    pub fn new(home: Option<&str>) -> Self {
        Self {
            home: home.filter(|h| !h.is_empty()).map(PathBuf::from),
        }
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        match path.strip_prefix('~') {
            Some("") => self.home_dir(),
            Some(rest) if rest.starts_with('/') => {
                let mut home_path = self.home_dir()?;
                for part in rest.split('/').filter(|part| !part.is_empty()) {
                    home_path.push(part);
                }
                Ok(home_path)
            }
            // "~user" forms are left alone
            _ => Ok(Path::new(path).to_path_buf()),
        }
    }

    pub fn home_dir(&self) -> Result<PathBuf, ShellError> {
        self.home
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(ShellError::HomeDirNotFound)
    }
}
