use std::fs;
use std::path::PathBuf;

use engine_logging::{engine_info, engine_warn};
use investigator_core::{Theme, ThemeStore, ThemeStoreError};
use investigator_engine::AtomicFileWriter;
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".investigator_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    #[serde(default)]
    theme: Option<Theme>,
}

/// Theme preference kept in a ron file in the state directory.
pub struct FileThemeStore {
    writer: AtomicFileWriter,
}

impl FileThemeStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    fn path(&self) -> PathBuf {
        self.writer.dir().join(PREFS_FILENAME)
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                engine_warn!("Failed to read preferences from {:?}: {}", path, err);
                return None;
            }
        };

        match ron::from_str::<PersistedPrefs>(&content) {
            Ok(prefs) => prefs.theme,
            Err(err) => {
                engine_warn!("Failed to parse preferences from {:?}: {}", path, err);
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        let prefs = PersistedPrefs { theme: Some(theme) };
        let content = ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new())
            .map_err(|err| ThemeStoreError::Unavailable(err.to_string()))?;
        let path = self
            .writer
            .write(PREFS_FILENAME, &content)
            .map_err(|err| ThemeStoreError::Unavailable(err.to_string()))?;
        engine_info!("Saved theme {} to {:?}", theme, path);
        Ok(())
    }
}
