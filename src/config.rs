use crate::consts;
use crate::game::{Board, Palette, Tile};
use crate::highscores::HighScoreStore;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings for the board
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Overrides for the styles used to draw the snake & food
    #[serde(default)]
    pub(crate) styles: StyleConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("ticksnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    pub(crate) fn board(&self) -> Board {
        self.game.board
    }

    /// The default palette with any configured styles applied on top
    pub(crate) fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        for (tile, style) in [
            (Tile::SnakeHead, self.styles.head),
            (Tile::SnakeBody, self.styles.body),
            (Tile::Food, self.styles.food),
        ] {
            if let Some(style) = style {
                palette.set(tile, style);
            }
        }
        palette
    }

    /// Return the store to keep the high score in: the file given in the
    /// configuration or, if that is not set, the default high score file.
    /// If saving is disabled or no default path could be computed, the high
    /// score is only kept in memory.
    pub(crate) fn high_score_store(&self) -> HighScoreStore {
        if !self.files.save_high_score {
            return HighScoreStore::in_memory();
        }
        match self.files.high_score_file.clone().or_else(default_high_score_path) {
            Some(p) => HighScoreStore::at(p),
            None => {
                log::warn!("Could not determine high score file path; high score will not be saved");
                HighScoreStore::in_memory()
            }
        }
    }

    pub(crate) fn log_file(&self) -> Option<&Path> {
        self.files.log_file.as_deref()
    }
}

fn default_high_score_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("ticksnake").join("highscores.json"))
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    board: Board,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    board_size: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            board_size: consts::DEFAULT_BOARD_SIZE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = BoardSizeError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, BoardSizeError> {
        Board::new(value.board_size)
            .map(|board| GameConfig { board })
            .ok_or(BoardSizeError(value.board_size))
    }
}

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error(
    "board size {0} is out of range; must be between {min} and {max}",
    min = consts::MIN_BOARD_SIZE,
    max = consts::MAX_BOARD_SIZE
)]
pub(crate) struct BoardSizeError(u16);

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(from = "RawStyleConfig")]
pub(crate) struct StyleConfig {
    head: Option<Style>,
    body: Option<Style>,
    food: Option<Style>,
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default)]
struct RawStyleConfig {
    head: Option<parse_style::Style>,
    body: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
}

impl From<RawStyleConfig> for StyleConfig {
    fn from(value: RawStyleConfig) -> StyleConfig {
        StyleConfig {
            head: value.head.map(Style::from),
            body: value.body.map(Style::from),
            food: value.food.map(Style::from),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    save_high_score: bool,

    /// Path to write log messages to
    log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
