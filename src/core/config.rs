//! Match configuration with documented tunables
//!
//! All magic numbers for the round loop are collected here with
//! explanations of their purpose. Exact values are policy, not contract;
//! the contract is the *direction* of the opponent scaling (later rounds
//! move faster, survive longer, and fire more often).

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};

/// Tunables for one match
///
/// Loaded from TOML by the headless runner or constructed with defaults.
/// Missing TOML keys fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === ROUND PACING ===
    /// Ticks to hold the Starting phase before play begins
    ///
    /// Gives the presentation layer time to show the "ROUND N" banner
    /// while every unit sits locked at its spawn pose.
    pub start_delay_ticks: u32,

    /// Ticks to hold the Ending phase before the next round (or restart)
    ///
    /// The end-of-round summary stays on screen for this long.
    pub end_delay_ticks: u32,

    // === ROSTER ===
    /// Number of defender (player-side) units spawned at match start
    pub defender_count: u32,

    /// Number of opponent (computer-side) units spawned at match start
    pub opponent_count: u32,

    // === DEFENDER STATS (fixed for the whole match) ===
    /// Defender movement speed, world units per tick
    pub defender_speed: f32,

    /// Defender starting health
    pub defender_health: f32,

    /// Defender weapon reload time in ticks
    pub defender_reload: f32,

    // === OPPONENT SCALING (recomputed every round) ===
    /// Opponent speed for round N is `opponent_base_speed * N`
    pub opponent_base_speed: f32,

    /// Opponent health for round N is `opponent_base_health * N`
    pub opponent_base_health: f32,

    /// Opponent reload for round N is `opponent_base_reload - N`,
    /// clamped to the minimum reload time at configure
    pub opponent_base_reload: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            // Pacing: 1s start / 3s end at a 60 Hz tick rate
            start_delay_ticks: 60,
            end_delay_ticks: 180,

            // Roster
            defender_count: 2,
            opponent_count: 3,

            // Defenders
            defender_speed: 12.0,
            defender_health: 100.0,
            defender_reload: 3.0,

            // Opponents: weak in round 1, monotonically harder after
            opponent_base_speed: 1.0,
            opponent_base_health: 10.0,
            opponent_base_reload: 10.0,
        }
    }
}

impl MatchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(raw)?;
        config.validate().map_err(ArenaError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.defender_count == 0 || self.opponent_count == 0 {
            return Err(format!(
                "both factions need at least one unit (defenders: {}, opponents: {})",
                self.defender_count, self.opponent_count
            ));
        }

        if self.defender_speed <= 0.0 || self.opponent_base_speed <= 0.0 {
            return Err("unit speeds must be positive".into());
        }

        if self.defender_health <= 0.0 || self.opponent_base_health <= 0.0 {
            return Err("unit health must be positive".into());
        }

        if self.defender_reload <= 0.0 || self.opponent_base_reload <= 0.0 {
            return Err("reload times must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_roster_rejected() {
        let config = MatchConfig {
            opponent_count: 0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_partial_override() {
        let config = MatchConfig::from_toml_str("start_delay_ticks = 5\nopponent_count = 7\n")
            .expect("partial toml should parse");
        assert_eq!(config.start_delay_ticks, 5);
        assert_eq!(config.opponent_count, 7);
        // Untouched keys keep their defaults
        assert_eq!(config.end_delay_ticks, MatchConfig::default().end_delay_ticks);
    }

    #[test]
    fn test_toml_invalid_value_rejected() {
        let result = MatchConfig::from_toml_str("defender_health = -1.0\n");
        assert!(result.is_err());
    }
}
