//! Runtime settings taken from the environment. The game has no CLI flags.

use std::env;

pub const SEED_VAR: &str = "TROLLHUNT_SEED";
pub const NO_CLEAR_VAR: &str = "TROLLHUNT_NO_CLEAR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed for the troll's rolls; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Clear the terminal before the welcome banner.
    pub clear_screen: bool,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(%raw, error = %e, "ignoring unparsable {SEED_VAR}");
                None
            }
        });
        let clear_screen = lookup(NO_CLEAR_VAR).is_none_or(|v| v.trim().is_empty() || v.trim() == "0");

        GameConfig { seed, clear_screen }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
