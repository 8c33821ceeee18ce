//! Status banding shared by categories, the month pace and saving goals
//!
//! A progress percentage is compared to an expected percentage and placed in
//! one of four tiers. The margins are percentage points and come from
//! settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PacerError, PacerResult};

/// Progress tier relative to the expected pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTier {
    #[serde(rename = "muy por debajo")]
    FarBelow,
    #[serde(rename = "por debajo")]
    Below,
    #[serde(rename = "en línea")]
    OnTrack,
    #[serde(rename = "por encima")]
    Above,
}

impl StatusTier {
    /// Label shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::FarBelow => "muy por debajo",
            Self::Below => "por debajo",
            Self::OnTrack => "en línea",
            Self::Above => "por encima",
        }
    }

    pub fn is_behind(&self) -> bool {
        matches!(self, Self::FarBelow | Self::Below)
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Margins (in percentage points) around the expected percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PacingThresholds {
    /// Below `expected - far_below_margin` is far below
    #[serde(default = "default_far_below")]
    pub far_below_margin: f64,

    /// Below `expected - below_margin` is below
    #[serde(default = "default_below")]
    pub below_margin: f64,

    /// Above `expected + above_margin` is above
    #[serde(default = "default_above")]
    pub above_margin: f64,
}

fn default_far_below() -> f64 {
    15.0
}

fn default_below() -> f64 {
    5.0
}

fn default_above() -> f64 {
    10.0
}

impl Default for PacingThresholds {
    fn default() -> Self {
        Self {
            far_below_margin: default_far_below(),
            below_margin: default_below(),
            above_margin: default_above(),
        }
    }
}

impl PacingThresholds {
    /// Check the margins describe four ordered, non-overlapping bands
    pub fn validate(&self) -> PacerResult<()> {
        let all = [self.far_below_margin, self.below_margin, self.above_margin];
        if all.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(PacerError::validation(
                "thresholds",
                "margins must be finite and non-negative",
            ));
        }
        if self.far_below_margin < self.below_margin {
            return Err(PacerError::validation(
                "thresholds",
                format!(
                    "far_below_margin ({}) must be at least below_margin ({})",
                    self.far_below_margin, self.below_margin
                ),
            ));
        }
        Ok(())
    }

    /// Place `percent` in a tier relative to `expected`
    ///
    /// - `percent < expected - far_below_margin` → far below
    /// - `percent < expected - below_margin` → below
    /// - `percent <= expected + above_margin` → on track
    /// - otherwise → above
    pub fn classify(&self, percent: f64, expected: f64) -> StatusTier {
        if percent < expected - self.far_below_margin {
            StatusTier::FarBelow
        } else if percent < expected - self.below_margin {
            StatusTier::Below
        } else if percent <= expected + self.above_margin {
            StatusTier::OnTrack
        } else {
            StatusTier::Above
        }
    }
}
