use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    board::Board,
    collision::collides,
    piece::Anchor,
    shape::{ShapeKind, clone_shape},
};

/// Error returned when a [`GameConfig`] cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("{kind:?}-shape does not fit at the spawn position of a {width}x{height} board")]
    SpawnDoesNotFit {
        kind: ShapeKind,
        width: usize,
        height: usize,
    },
    #[display("tick interval must be positive")]
    ZeroTickInterval,
}

/// Configuration of a game.
///
/// Serialized as JSON with the tick interval in milliseconds; missing fields
/// take their default value:
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{"tick_interval_ms": 250}"#).unwrap();
/// assert_eq!(config.tick_interval, Duration::from_millis(250));
/// assert_eq!(config.board_width, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Number of columns.
    pub board_width: usize,
    /// Number of rows.
    pub board_height: usize,
    /// Period of the gravity tick.
    #[serde(rename = "tick_interval_ms", with = "duration_millis")]
    pub tick_interval: Duration,
    /// Points awarded for each cleared row.
    pub points_per_line: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 10,
            board_height: 20,
            tick_interval: Duration::from_millis(500),
            points_per_line: 10,
        }
    }
}

impl GameConfig {
    /// Checks that the configuration can be played.
    ///
    /// Every catalog shape must fit at the spawn anchor of an empty board, so
    /// that game over is only ever reached by stacking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        let board = Board::new(self.board_width, self.board_height);
        let anchor = Anchor::spawn(self.board_width);
        if let Some(kind) = ShapeKind::ALL
            .into_iter()
            .find(|kind| collides(&board, &clone_shape(*kind), anchor))
        {
            return Err(ConfigError::SpawnDoesNotFit {
                kind,
                width: self.board_width,
                height: self.board_height,
            });
        }
        Ok(())
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
