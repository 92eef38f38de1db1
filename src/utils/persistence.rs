//! Files under ~/.flappy-bob/: the config JSON and the high score.

use crate::constants::{CONFIG_FILE, GAME_DIR_NAME, HIGH_SCORE_FILE, LOG_FILE};
use crate::core::config::GameConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flappy-bob/ directory path, creating it if needed.
pub fn game_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(GAME_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Access to the game's save files, rooted at one directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Storage in the default ~/.flappy-bob/ directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self { dir: game_dir()? })
    }

    /// Storage rooted at `dir`, created if missing.
    pub fn at(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.dir.join(HIGH_SCORE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    /// Loads the config, writing the defaults first if the file is missing.
    ///
    /// A file that exists but cannot be parsed or fails validation is an
    /// `InvalidData` error; it is never overwritten.
    pub fn load_or_create_config(&self) -> io::Result<GameConfig> {
        let path = self.config_path();
        if !path.exists() {
            let config = GameConfig::default();
            self.save_config(&config)?;
            return Ok(config);
        }

        let json = fs::read_to_string(&path)?;
        let config: GameConfig = serde_json::from_str(&json).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: {}", path.display(), e),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save_config(&self, config: &GameConfig) -> io::Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.config_path(), json)
    }

    /// Reads the stored high score; missing or unparseable files count as 0.
    pub fn load_high_score(&self) -> u32 {
        fs::read_to_string(self.high_score_path())
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrites the stored high score.
    pub fn save_high_score(&self, score: u32) -> io::Result<()> {
        fs::write(self.high_score_path(), score.to_string())
    }

    /// Deletes the stored high score. Succeeds if there was none.
    pub fn clear_high_score(&self) -> io::Result<()> {
        match fs::remove_file(self.high_score_path()) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage(name: &str) -> Storage {
        let dir = std::env::temp_dir().join(format!(
            "flappy-bob-persistence-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        Storage::at(dir).expect("temp storage should be created")
    }

    #[test]
    fn test_missing_config_writes_defaults() {
        let storage = temp_storage("defaults");
        assert!(!storage.config_path().exists());

        let config = storage.load_or_create_config().expect("load should succeed");

        assert_eq!(config, GameConfig::default());
        assert!(storage.config_path().exists());
        let reloaded = storage.load_or_create_config().expect("reload should succeed");
        assert_eq!(reloaded, config);

        fs::remove_dir_all(storage.dir()).ok();
    }

    #[test]
    fn test_existing_config_is_used() {
        let storage = temp_storage("existing");
        let custom = GameConfig {
            gravity: 0.3,
            obstacle_gap: 250,
            levels: Vec::new(),
            ..GameConfig::default()
        };
        storage.save_config(&custom).expect("save should succeed");

        let loaded = storage.load_or_create_config().expect("load should succeed");
        assert_eq!(loaded, custom);

        fs::remove_dir_all(storage.dir()).ok();
    }

    #[test]
    fn test_malformed_config_is_invalid_data() {
        let storage = temp_storage("malformed");
        fs::write(storage.config_path(), "{ not json").expect("write should succeed");

        let err = storage.load_or_create_config().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        // The broken file is left alone.
        assert_eq!(
            fs::read_to_string(storage.config_path()).expect("file still there"),
            "{ not json"
        );

        fs::remove_dir_all(storage.dir()).ok();
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let storage = temp_storage("invalid");
        let bad = GameConfig {
            obstacle_gap: 0,
            ..GameConfig::default()
        };
        storage.save_config(&bad).expect("save should succeed");

        let err = storage.load_or_create_config().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_dir_all(storage.dir()).ok();
    }

    #[test]
    fn test_high_score_roundtrip() {
        let storage = temp_storage("highscore");
        assert_eq!(storage.load_high_score(), 0);

        storage.save_high_score(42).expect("save should succeed");
        assert_eq!(storage.load_high_score(), 42);

        storage.save_high_score(7).expect("save should succeed");
        assert_eq!(storage.load_high_score(), 7);

        fs::remove_dir_all(storage.dir()).ok();
    }

    #[test]
    fn test_unparseable_high_score_is_zero() {
        let storage = temp_storage("garbage");
        fs::write(storage.high_score_path(), "lots").expect("write should succeed");
        assert_eq!(storage.load_high_score(), 0);

        fs::write(storage.high_score_path(), " 15\n").expect("write should succeed");
        assert_eq!(storage.load_high_score(), 15);

        fs::remove_dir_all(storage.dir()).ok();
    }

    #[test]
    fn test_clear_high_score() {
        let storage = temp_storage("clear");
        storage.clear_high_score().expect("clearing nothing is fine");

        storage.save_high_score(3).expect("save should succeed");
        storage.clear_high_score().expect("clear should succeed");
        assert!(!storage.high_score_path().exists());
        assert_eq!(storage.load_high_score(), 0);

        fs::remove_dir_all(storage.dir()).ok();
    }
}
