use std::fs::File;
use std::path::Path;

use log::debug;

use super::{ConfigError, ConfigPaths};
use crate::input::ChunkReader;

/// Finds the startup file to source before the main loop.
pub struct ConfigLoader<'a> {
    paths: Option<&'a ConfigPaths>,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: Option<&'a ConfigPaths>) -> Self {
        Self { paths }
    }

    /// An explicit file must exist. Otherwise only interactive shells pick up
    /// the default rc file, and only when it is there.
    pub fn rc_source(
        &self,
        explicit: Option<&Path>,
        interactive: bool,
    ) -> Result<Option<ChunkReader<File>>, ConfigError> {
        if let Some(path) = explicit {
            let file = File::open(path)
                .map_err(|_| ConfigError::ConfigFileNotFound(path.display().to_string()))?;
            debug!("sourcing {}", path.display());
            return Ok(Some(ChunkReader::new(file)));
        }

        let Some(paths) = self.paths.filter(|_| interactive) else {
            return Ok(None);
        };
        if !paths.rc_path.is_file() {
            return Ok(None);
        }

        debug!("sourcing {}", paths.rc_path.display());
        Ok(Some(ChunkReader::new(File::open(&paths.rc_path)?)))
    }
}
