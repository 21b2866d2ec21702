//! ScoreBand - the single maturity banding shared by scoring and recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Score;

/// Maturity band for a 0-100 score.
///
/// Bands are ordered from weakest to strongest, so `band_a < band_b`
/// means `band_a` is the less mature of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Below 35: early-stage, requires comprehensive development.
    Emerging,
    /// 35-49: foundational, needs support.
    Establishing,
    /// 50-64: moderate, requires focused attention.
    Developing,
    /// 65-79: strong with growth opportunities.
    Growing,
    /// 80 and above: top-band performance.
    Transforming,
}

impl ScoreBand {
    /// Returns the band for a score.
    pub fn of(score: Score) -> Self {
        let v = score.value();
        if v >= 80.0 {
            ScoreBand::Transforming
        } else if v >= 65.0 {
            ScoreBand::Growing
        } else if v >= 50.0 {
            ScoreBand::Developing
        } else if v >= 35.0 {
            ScoreBand::Establishing
        } else {
            ScoreBand::Emerging
        }
    }

    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Emerging => "Emerging",
            ScoreBand::Establishing => "Establishing",
            ScoreBand::Developing => "Developing",
            ScoreBand::Growing => "Growing",
            ScoreBand::Transforming => "Transforming",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
