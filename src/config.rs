//! Game configuration: rule variants and their resolved toggles.
//!
//! A [`RuleVariant`] is resolved exactly once, at game setup, into a
//! [`RuleSet`]. Every rules component branches on the toggles only.

use std::str::FromStr;
use std::time::Duration;

use crate::board::{Board, DEFAULT_BOARD_SIZE};
use crate::error::ConfigError;

/// Named rule variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RuleVariant {
    /// Five or more in a row wins
    #[default]
    Standard,
    /// Exactly five wins; overlines are dead
    NoOverline,
    /// Pair captures, no double free-threes
    Ninuki,
    /// Pair captures, restricted opening
    Pente,
}

impl RuleVariant {
    pub fn name(self) -> &'static str {
        match self {
            RuleVariant::Standard => "standard",
            RuleVariant::NoOverline => "no_overline",
            RuleVariant::Ninuki => "ninuki",
            RuleVariant::Pente => "pente",
        }
    }
}

impl FromStr for RuleVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(RuleVariant::Standard),
            "no_overline" => Ok(RuleVariant::NoOverline),
            "ninuki" => Ok(RuleVariant::Ninuki),
            "pente" => Ok(RuleVariant::Pente),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Immutable rule toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSet {
    /// X-O-O-X pair captures and the capture win
    pub captures_enabled: bool,
    /// First move at center, second at least 3 away from it
    pub pente_opening: bool,
    /// Only a run of exactly five wins
    pub exactly_five_wins: bool,
    /// Moves creating two free-threes at once are illegal
    pub no_double_threes: bool,
}

impl RuleSet {
    /// Resolve a variant into its toggles
    pub fn from_variant(variant: RuleVariant) -> Self {
        match variant {
            RuleVariant::Standard => Self::default(),
            RuleVariant::NoOverline => Self {
                exactly_five_wins: true,
                ..Self::default()
            },
            RuleVariant::Ninuki => Self {
                captures_enabled: true,
                no_double_threes: true,
                ..Self::default()
            },
            RuleVariant::Pente => Self {
                captures_enabled: true,
                pente_opening: true,
                ..Self::default()
            },
        }
    }

    /// Override the double-three restriction after resolution
    #[must_use]
    pub fn with_no_double_threes(mut self, enabled: bool) -> Self {
        self.no_double_threes = enabled;
        self
    }
}

/// Everything the turn loop needs at game start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u8,
    pub variant: RuleVariant,
    pub rules: RuleSet,
    /// Minimax depth for computer players
    pub depth: u8,
    /// Wall-clock budget for one computer move.
    ///
    /// A search that overruns is abandoned, not stopped: its thread keeps a
    /// core busy and holds a 64 MiB stack reservation until it finishes.
    /// Short limits with deep searches can pile such threads up.
    pub time_limit: Duration,
    /// Seed for the random fallback move; entropy when `None`
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_DEPTH: u8 = 3;
    pub const DEFAULT_TIME_LIMIT_MS: u64 = 5_000;

    pub fn new(variant: RuleVariant) -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            variant,
            rules: RuleSet::from_variant(variant),
            depth: Self::DEFAULT_DEPTH,
            time_limit: Duration::from_millis(Self::DEFAULT_TIME_LIMIT_MS),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Check ranges; call before starting a game
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::try_new(self.board_size)?;
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(RuleVariant::default())
    }
}
