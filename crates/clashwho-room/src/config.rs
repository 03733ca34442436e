//! Room configuration.

use std::time::Duration;

/// Settings shared by every room in a store.
///
/// `default_pool_size` is only the starting value: the host can change a
/// room's pool size with `update-settings`.
#[derive(Debug, Clone)]
pub struct RoomConfig {
    /// Pool size a new room starts with.
    pub default_pool_size: u32,

    /// Largest pool size the host may request.
    pub max_pool_size: u32,

    /// How long a finished game stays on screen before the room goes back
    /// to topic selection.
    pub reset_delay: Duration,

    /// Number of characters in a room code.
    pub code_length: usize,
}

/// A [`RoomConfig`] no room could run under.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("room code length must be at least 1")]
    EmptyRoomCode,

    #[error("default pool size {default} outside 1..={max}")]
    DefaultPoolSize { default: u32, max: u32 },
}

impl RoomConfig {
    /// Checks that codes can be drawn and the default pool size is one the
    /// host could also request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::EmptyRoomCode);
        }
        if self.default_pool_size == 0 || self.default_pool_size > self.max_pool_size {
            return Err(ConfigError::DefaultPoolSize {
                default: self.default_pool_size,
                max: self.max_pool_size,
            });
        }
        Ok(())
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            default_pool_size: 32,
            max_pool_size: 256,
            reset_delay: Duration::from_secs(3),
            code_length: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_config_default() {
        let config = RoomConfig::default();
        assert_eq!(config.default_pool_size, 32);
        assert_eq!(config.reset_delay, Duration::from_secs(3));
        assert_eq!(config.code_length, 5);
        assert!(config.max_pool_size >= config.default_pool_size);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_code_length() {
        let config = RoomConfig { code_length: 0, ..RoomConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::EmptyRoomCode));
    }

    #[test]
    fn test_validate_rejects_pool_size_outside_range() {
        let zero = RoomConfig { default_pool_size: 0, ..RoomConfig::default() };
        assert_eq!(
            zero.validate(),
            Err(ConfigError::DefaultPoolSize { default: 0, max: 256 })
        );

        let above = RoomConfig {
            default_pool_size: 300,
            max_pool_size: 200,
            ..RoomConfig::default()
        };
        let err = above.validate().unwrap_err();
        assert_eq!(err.to_string(), "default pool size 300 outside 1..=200");

        let at_max = RoomConfig {
            default_pool_size: 200,
            max_pool_size: 200,
            ..RoomConfig::default()
        };
        assert_eq!(at_max.validate(), Ok(()));
    }
}
