//! Combined comparison result returned to callers.

use serde::{Deserialize, Serialize};

use super::comparator::StructuralDelta;
use super::dsch::{DschImprovement, DschVector};
use super::recommendation::Recommendation;
use super::roi::RoiResult;

/// Everything a full scenario comparison produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub structural_delta: StructuralDelta,
    pub dsch_baseline: DschVector,
    pub dsch_variant: DschVector,
    pub dsch_improvement: DschImprovement,
    /// Present only when the caller supplied financial inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiResult>,
    pub recommendations: Vec<Recommendation>,
}
