use models::{EnhancementKind, Gold, Level, RepetitionCount};
use serde::Deserialize;

use crate::{CostBreakdown, CostError, base_cost, level_surcharge, repetition_surcharge};

fn default_target_count() -> u32 {
    1
}

/// Everything needed to price one enhancement.
///
/// The `with_*` methods return an updated copy and perform no validation;
/// out-of-range values are reported by [`EnhancementRequest::cost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnhancementRequest {
    kind: EnhancementKind,
    #[serde(default)]
    level: Level,
    #[serde(default, alias = "previous")]
    repetition: RepetitionCount,
    /// Doubles the base cost when above one. For add attack hex this is the
    /// number of hexes the attack already covers.
    #[serde(default = "default_target_count")]
    targets: u32,
}

impl EnhancementRequest {
    pub fn new(kind: EnhancementKind) -> Self {
        Self {
            kind,
            level: Level::default(),
            repetition: RepetitionCount::default(),
            targets: default_target_count(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn with_level(self, level: impl Into<Level>) -> Self {
        Self {
            level: level.into(),
            ..self
        }
    }

    pub fn with_target_count(self, targets: u32) -> Self {
        Self { targets, ..self }
    }

    pub fn with_repetition_count(self, repetition: impl Into<RepetitionCount>) -> Self {
        Self {
            repetition: repetition.into(),
            ..self
        }
    }

    pub fn kind(&self) -> EnhancementKind {
        self.kind
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn repetition(&self) -> RepetitionCount {
        self.repetition
    }

    pub fn targets(&self) -> u32 {
        self.targets
    }

    pub fn cost(&self) -> Result<Gold, CostError> {
        self.breakdown().map(|breakdown| breakdown.total())
    }

    pub fn breakdown(&self) -> Result<CostBreakdown, CostError> {
        let result = self.compute_breakdown();

        #[cfg(feature = "trace")]
        {
            match &result {
                Ok(breakdown) => tracing::debug!(request = ?self, %breakdown, "priced enhancement"),
                Err(error) => tracing::debug!(request = ?self, %error, "rejected enhancement"),
            }
        }

        result
    }

    fn compute_breakdown(&self) -> Result<CostBreakdown, CostError> {
        if !self.level.is_valid() {
            return Err(CostError::OutOfRangeLevel {
                level: self.level.0,
            });
        }
        if !self.repetition.is_valid() {
            return Err(CostError::OutOfRangeRepetition {
                count: self.repetition.0,
            });
        }
        Ok(CostBreakdown {
            base: base_cost(self.kind, self.targets)?,
            level: level_surcharge(self.level)?,
            repetition: repetition_surcharge(self.repetition)?,
        })
    }
}

impl From<EnhancementKind> for EnhancementRequest {
    fn from(kind: EnhancementKind) -> Self {
        Self::new(kind)
    }
}
