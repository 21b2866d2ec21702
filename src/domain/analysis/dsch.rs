//! DSCH analysis: a four-dimension health vector for an organization
//! structure (Dynamic Structural Complexity Heuristic).

use serde::{Deserialize, Serialize};

use crate::domain::structure::OrganizationStructure;

use super::comparator::RiskFactor;
use super::scoring::ScoringResult;

/// Tunables for the DSCH analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DschConfig {
    /// Weight of structural complexity in the overall improvement score.
    pub structural_weight: f64,
    /// Weight of operational efficiency in the overall improvement score.
    pub operational_weight: f64,
    /// Weight of cultural alignment in the overall improvement score.
    pub cultural_weight: f64,
    /// Weight of strategic readiness in the overall improvement score.
    pub strategic_weight: f64,
    /// Share of the complexity dimension driven by layer depth.
    pub layer_weight: f64,
    /// Share of the complexity dimension driven by span spread.
    pub span_variance_weight: f64,
    /// Layer count at which the depth component saturates at 1.0.
    pub layer_saturation: f64,
    /// Span standard deviation at which the spread component saturates.
    pub span_spread_saturation: f64,
    /// Lower edge of the healthy span-of-control range.
    pub span_target_min: f64,
    /// Upper edge of the healthy span-of-control range.
    pub span_target_max: f64,
    /// Share of the efficiency dimension driven by span fitness; the
    /// rest comes from operational section scores.
    pub span_blend_weight: f64,
    /// Dimension value used when no signal is available.
    pub neutral_score: f64,
    /// Strategic readiness penalty applied per flagged risk factor.
    pub risk_penalty: f64,
    /// Section names feeding operational efficiency.
    pub operational_sections: Vec<String>,
    /// Section names feeding cultural alignment.
    pub cultural_sections: Vec<String>,
    /// Section names feeding strategic readiness.
    pub strategic_sections: Vec<String>,
}

impl Default for DschConfig {
    fn default() -> Self {
        Self {
            structural_weight: 0.35,
            operational_weight: 0.25,
            cultural_weight: 0.20,
            strategic_weight: 0.20,
            layer_weight: 0.6,
            span_variance_weight: 0.4,
            layer_saturation: 8.0,
            span_spread_saturation: 6.0,
            span_target_min: 6.0,
            span_target_max: 10.0,
            span_blend_weight: 0.6,
            neutral_score: 0.5,
            risk_penalty: 0.05,
            operational_sections: vec![
                "Operations & Processes".to_string(),
                "Performance Management".to_string(),
            ],
            cultural_sections: vec!["Culture & Change Management".to_string()],
            strategic_sections: vec![
                "Leadership & Strategy".to_string(),
                "Technology & Infrastructure".to_string(),
            ],
        }
    }
}

/// Assessment signals fed into the analyzer alongside the structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DschContext<'a> {
    pub scoring: Option<&'a ScoringResult>,
    pub risk_factors: &'a [RiskFactor],
}

/// The four DSCH dimensions, each in `[0, 1]`.
///
/// `structural_complexity` is the only dimension where lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DschVector {
    pub structural_complexity: f64,
    pub operational_efficiency: f64,
    pub cultural_alignment: f64,
    pub strategic_readiness: f64,
}

/// Per-dimension deltas between two DSCH vectors, plus a weighted
/// overall improvement score. Positive overall means the variant is
/// healthier than the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DschImprovement {
    pub structural_complexity: f64,
    pub operational_efficiency: f64,
    pub cultural_alignment: f64,
    pub strategic_readiness: f64,
    pub overall: f64,
}

/// Computes DSCH vectors and improvement scores.
pub struct DschAnalyzer;

impl DschAnalyzer {
    pub fn analyze(
        structure: &OrganizationStructure,
        context: DschContext<'_>,
        config: &DschConfig,
    ) -> DschVector {
        DschVector {
            structural_complexity: structural_complexity(structure, config),
            operational_efficiency: operational_efficiency(structure, context.scoring, config),
            cultural_alignment: section_mean(context.scoring, &config.cultural_sections)
                .unwrap_or(config.neutral_score),
            strategic_readiness: strategic_readiness(context, config),
        }
    }

    /// Per-dimension deltas (variant minus baseline) and the weighted
    /// overall improvement. A complexity increase counts against the
    /// overall score.
    pub fn improvement(
        baseline: &DschVector,
        variant: &DschVector,
        config: &DschConfig,
    ) -> DschImprovement {
        let complexity = variant.structural_complexity - baseline.structural_complexity;
        let efficiency = variant.operational_efficiency - baseline.operational_efficiency;
        let cultural = variant.cultural_alignment - baseline.cultural_alignment;
        let strategic = variant.strategic_readiness - baseline.strategic_readiness;

        let overall = -config.structural_weight * complexity
            + config.operational_weight * efficiency
            + config.cultural_weight * cultural
            + config.strategic_weight * strategic;

        DschImprovement {
            structural_complexity: complexity,
            operational_efficiency: efficiency,
            cultural_alignment: cultural,
            strategic_readiness: strategic,
            overall,
        }
    }
}

fn structural_complexity(structure: &OrganizationStructure, config: &DschConfig) -> f64 {
    let depth = (f64::from(structure.layer_count()) / config.layer_saturation).min(1.0);
    let spread = structure
        .span_variance()
        .map(|v| (v.sqrt() / config.span_spread_saturation).min(1.0))
        .unwrap_or(0.0);
    (config.layer_weight * depth + config.span_variance_weight * spread).clamp(0.0, 1.0)
}

fn operational_efficiency(
    structure: &OrganizationStructure,
    scoring: Option<&ScoringResult>,
    config: &DschConfig,
) -> f64 {
    let span_fitness = structure
        .average_span()
        .map(|span| span_fitness(span, config))
        .unwrap_or(config.neutral_score);
    let sections = section_mean(scoring, &config.operational_sections)
        .unwrap_or(config.neutral_score);
    (config.span_blend_weight * span_fitness + (1.0 - config.span_blend_weight) * sections)
        .clamp(0.0, 1.0)
}

/// 1.0 inside the healthy span range, decaying linearly with distance
/// from the nearest edge.
fn span_fitness(span: f64, config: &DschConfig) -> f64 {
    let distance = if span < config.span_target_min {
        config.span_target_min - span
    } else if span > config.span_target_max {
        span - config.span_target_max
    } else {
        return 1.0;
    };
    (1.0 - distance / config.span_spread_saturation).clamp(0.0, 1.0)
}

fn strategic_readiness(context: DschContext<'_>, config: &DschConfig) -> f64 {
    let base = section_mean(context.scoring, &config.strategic_sections)
        .unwrap_or(config.neutral_score);
    let penalty = config.risk_penalty * context.risk_factors.len() as f64;
    (base - penalty).clamp(0.0, 1.0)
}

/// Mean of the named sections' scores as a `[0, 1]` fraction. `None`
/// when no named section has a score.
fn section_mean(scoring: Option<&ScoringResult>, sections: &[String]) -> Option<f64> {
    let scoring = scoring?;
    let values: Vec<f64> = sections
        .iter()
        .filter_map(|name| scoring.section(name))
        .map(|score| score.as_fraction())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
