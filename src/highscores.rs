use crate::util::DisplayChain;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the slot in the store file that holds the high score
pub(crate) const HIGH_SCORE_KEY: &str = "snake-highscore";

/// Where the high score is kept between runs.
///
/// On disk, the store is a JSON object mapping slot names to string-encoded
/// integers; only [`HIGH_SCORE_KEY`] is read or written, and other slots,
/// whatever their type, are carried over untouched when saving.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScoreStore {
    /// `None` means nothing is persisted
    path: Option<PathBuf>,
}

impl HighScoreStore {
    pub(crate) fn at(path: PathBuf) -> HighScoreStore {
        HighScoreStore { path: Some(path) }
    }

    pub(crate) fn in_memory() -> HighScoreStore {
        HighScoreStore { path: None }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the stored high score.  A missing file, a missing slot, or a slot
    /// that isn't a non-negative integer all count as zero; only unreadable or
    /// malformed files are errors.
    pub(crate) fn load(&self) -> Result<u32, LoadError> {
        let Some(path) = self.path() else {
            return Ok(0);
        };
        let slots = read_slots(path)?;
        Ok(slots
            .get(HIGH_SCORE_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0))
    }

    pub(crate) fn save(&self, score: u32) -> Result<(), SaveError> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        // Never overwrite a file that cannot be parsed
        let mut slots = read_slots(path).map_err(SaveError::load)?;
        slots.insert(
            String::from(HIGH_SCORE_KEY),
            Value::String(score.to_string()),
        );
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string_pretty(&slots).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

fn read_slots(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let src = match fs_err::read(path) {
        Ok(src) => src,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(LoadError::read(e)),
    };
    serde_json::from_slice(&src).map_err(LoadError::deserialize)
}

/// The best score seen so far, written through to a [`HighScoreStore`]
/// every time it's beaten
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScore {
    best: u32,
    store: HighScoreStore,
}

impl HighScore {
    /// Seed the high score from `store`, falling back to zero if it can't be
    /// read
    pub(crate) fn load(store: HighScoreStore) -> HighScore {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("{}; starting from a high score of 0", DisplayChain(&e));
                0
            }
        };
        log::debug!("Loaded high score {best}");
        HighScore { best, store }
    }

    pub(crate) fn get(&self) -> u32 {
        self.best
    }

    /// Record `score`.  If it beats the current best, the new best is saved
    /// and `true` is returned.  Failure to save is logged, not raised; the
    /// in-memory best is updated either way.
    pub(crate) fn update(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        log::info!("New high score: {score}");
        if let Err(e) = self.store.save(score) {
            log::error!("{}", DisplayChain(&e));
        }
        true
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn load(e: LoadError) -> Self {
        SaveError(SaveErrorSource::Load(e))
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to read existing high score file")]
    Load(#[source] LoadError),
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score file")]
    Deserialize(#[source] serde_json::Error),
}
