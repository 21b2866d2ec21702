//! Rule-based recommendation synthesis.
//!
//! Every recommendation cites the analysis facts that triggered it, so
//! reports never present advice without evidence.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ScoreBand, ValidationError};

use super::comparator::{RiskCategory, StructuralDelta};
use super::dsch::DschImprovement;
use super::roi::RoiResult;
use super::scoring::ScoringResult;

/// Category a recommendation falls under. Listed in priority order:
/// earlier categories rank higher when impact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Governance,
    Cost,
    Structure,
    Culture,
}

/// An analysis fact cited by a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    SectionScore { section: String, score: f64 },
    StructuralFact { description: String },
    DschDimension { dimension: String, delta: f64 },
    FinancialDelta { field: String, value: f64 },
}

/// A synthesized recommendation, ready for report rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub rule_id: String,
    pub category: RuleCategory,
    pub title: String,
    pub description: String,
    /// Relative urgency in `[0, 1]`, used for ranking.
    pub impact: f64,
    pub timeline: String,
    pub estimated_cost: Option<f64>,
    pub data_sources: Vec<DataSource>,
}

impl Recommendation {
    /// Creates a recommendation, rejecting one with no cited evidence.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rule_id: impl Into<String>,
        category: RuleCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        impact: f64,
        timeline: impl Into<String>,
        estimated_cost: Option<f64>,
        data_sources: Vec<DataSource>,
    ) -> Result<Self, ValidationError> {
        if data_sources.is_empty() {
            return Err(ValidationError::empty_field("data_sources"));
        }
        Ok(Self {
            rule_id: rule_id.into(),
            category,
            title: title.into(),
            description: description.into(),
            impact: impact.clamp(0.0, 1.0),
            timeline: timeline.into(),
            estimated_cost,
            data_sources,
        })
    }
}

/// Analysis outputs the rules are evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationContext<'a> {
    pub scoring: Option<&'a ScoringResult>,
    pub delta: Option<&'a StructuralDelta>,
    pub improvement: Option<&'a DschImprovement>,
    pub roi: Option<&'a RoiResult>,
}

/// Condition that makes a rule fire.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCondition {
    /// A section's score sits below the given band.
    SectionBelowBand { section: String, band: ScoreBand },
    /// Cost increases by more than the given percentage of baseline.
    CostIncreaseAbovePct(f64),
    /// Headcount shrinks by more than the given FTE count.
    FteReductionBeyond(f64),
    /// The weighted DSCH improvement is negative.
    DschOverallDeclines,
    /// The named DSCH dimension declines by more than the given amount.
    DschDimensionDeclinesBeyond { dimension: DschDimensionRef, amount: f64 },
    /// The comparison flagged a risk in the given category.
    RiskPresent(RiskCategory),
    /// Payback takes longer than the given number of months.
    PaybackBeyondMonths(f64),
}

/// Names a DSCH improvement dimension for rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DschDimensionRef {
    OperationalEfficiency,
    CulturalAlignment,
    StrategicReadiness,
}

impl DschDimensionRef {
    fn name(&self) -> &'static str {
        match self {
            DschDimensionRef::OperationalEfficiency => "operationalEfficiency",
            DschDimensionRef::CulturalAlignment => "culturalAlignment",
            DschDimensionRef::StrategicReadiness => "strategicReadiness",
        }
    }

    fn delta(&self, improvement: &DschImprovement) -> f64 {
        match self {
            DschDimensionRef::OperationalEfficiency => improvement.operational_efficiency,
            DschDimensionRef::CulturalAlignment => improvement.cultural_alignment,
            DschDimensionRef::StrategicReadiness => improvement.strategic_readiness,
        }
    }
}

/// A recommendation rule: a condition plus the advice it produces.
#[derive(Debug, Clone)]
pub struct RecommendationRule {
    pub id: &'static str,
    pub category: RuleCategory,
    pub condition: RuleCondition,
    pub title: &'static str,
    pub description: &'static str,
    pub base_impact: f64,
    pub timeline: &'static str,
    pub estimated_cost: Option<f64>,
}

/// Evaluates the standard rule set against analysis outputs and ranks
/// the recommendations that fire.
pub struct RecommendationSynthesizer;

impl RecommendationSynthesizer {
    pub fn synthesize(context: RecommendationContext<'_>) -> Vec<Recommendation> {
        Self::synthesize_with(&standard_rules(), context)
    }

    pub fn synthesize_with(
        rules: &[RecommendationRule],
        context: RecommendationContext<'_>,
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = rules
            .iter()
            .filter_map(|rule| evaluate(rule, context))
            .collect();

        // Impact descending, then category priority, then rule id for a
        // fully deterministic order.
        recommendations.sort_by(|a, b| {
            b.impact
                .total_cmp(&a.impact)
                .then(a.category.cmp(&b.category))
                .then(a.rule_id.cmp(&b.rule_id))
        });
        recommendations
    }
}

fn evaluate(
    rule: &RecommendationRule,
    context: RecommendationContext<'_>,
) -> Option<Recommendation> {
    let (impact, sources) = match &rule.condition {
        RuleCondition::SectionBelowBand { section, band } => {
            let score = context.scoring?.section(section)?;
            if ScoreBand::of(score) >= *band {
                return None;
            }
            let gap = band_floor(*band) - score.value();
            (
                rule.base_impact + gap / 200.0,
                vec![DataSource::SectionScore {
                    section: section.clone(),
                    score: score.value(),
                }],
            )
        }
        RuleCondition::CostIncreaseAbovePct(threshold) => {
            let pct = context.delta?.percentage_cost_change?;
            if pct <= *threshold {
                return None;
            }
            (
                rule.base_impact + (pct - threshold) / 200.0,
                vec![DataSource::FinancialDelta {
                    field: "percentageCostChange".to_string(),
                    value: pct,
                }],
            )
        }
        RuleCondition::FteReductionBeyond(threshold) => {
            let fte_change = context.delta?.fte_change;
            if -fte_change <= *threshold {
                return None;
            }
            (
                rule.base_impact,
                vec![DataSource::FinancialDelta {
                    field: "fteChange".to_string(),
                    value: fte_change,
                }],
            )
        }
        RuleCondition::DschOverallDeclines => {
            let improvement = context.improvement?;
            if improvement.overall >= 0.0 {
                return None;
            }
            (
                rule.base_impact + (-improvement.overall).min(0.2),
                vec![DataSource::DschDimension {
                    dimension: "overall".to_string(),
                    delta: improvement.overall,
                }],
            )
        }
        RuleCondition::DschDimensionDeclinesBeyond { dimension, amount } => {
            let improvement = context.improvement?;
            let delta = dimension.delta(improvement);
            if -delta <= *amount {
                return None;
            }
            (
                rule.base_impact,
                vec![DataSource::DschDimension {
                    dimension: dimension.name().to_string(),
                    delta,
                }],
            )
        }
        RuleCondition::RiskPresent(category) => {
            let risk = context
                .delta?
                .risk_factors
                .iter()
                .find(|r| r.category == *category)?;
            (
                rule.base_impact,
                vec![DataSource::StructuralFact {
                    description: risk.description.clone(),
                }],
            )
        }
        RuleCondition::PaybackBeyondMonths(threshold) => {
            let months = context.roi?.payback_months?;
            if months <= *threshold {
                return None;
            }
            (
                rule.base_impact,
                vec![DataSource::FinancialDelta {
                    field: "paybackMonths".to_string(),
                    value: months,
                }],
            )
        }
    };

    // Rules always supply at least one source, so construction succeeds.
    Recommendation::new(
        rule.id,
        rule.category,
        rule.title,
        rule.description,
        impact,
        rule.timeline,
        rule.estimated_cost,
        sources,
    )
    .ok()
}

fn band_floor(band: ScoreBand) -> f64 {
    match band {
        ScoreBand::Emerging => 0.0,
        ScoreBand::Establishing => 35.0,
        ScoreBand::Developing => 50.0,
        ScoreBand::Growing => 65.0,
        ScoreBand::Transforming => 80.0,
    }
}

/// The built-in rule set.
pub fn standard_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: "GOV-01",
            category: RuleCategory::Governance,
            condition: RuleCondition::SectionBelowBand {
                section: "Leadership & Strategy".to_string(),
                band: ScoreBand::Growing,
            },
            title: "Clarify decision rights and strategic accountability",
            description: "Leadership and strategy scores indicate unclear vision or decision \
                          rights. Establish a decision-rights matrix and cascade strategic goals \
                          to unit level before restructuring.",
            base_impact: 0.6,
            timeline: "3-6 months",
            estimated_cost: Some(50_000.0),
        },
        RecommendationRule {
            id: "GOV-02",
            category: RuleCategory::Governance,
            condition: RuleCondition::RiskPresent(RiskCategory::ChangeManagement),
            title: "Stand up a formal change management program",
            description: "The proposed restructuring eliminates a large share of existing \
                          positions. A dedicated change program with communication plans and \
                          transition support reduces attrition among retained staff.",
            base_impact: 0.7,
            timeline: "Start 2 months before implementation",
            estimated_cost: Some(120_000.0),
        },
        RecommendationRule {
            id: "COST-01",
            category: RuleCategory::Cost,
            condition: RuleCondition::CostIncreaseAbovePct(10.0),
            title: "Phase the investment to contain cost growth",
            description: "The variant structure costs materially more than the baseline. \
                          Stage new positions across budget cycles and tie each phase to \
                          measurable outcomes.",
            base_impact: 0.55,
            timeline: "Next budget cycle",
            estimated_cost: None,
        },
        RecommendationRule {
            id: "COST-02",
            category: RuleCategory::Cost,
            condition: RuleCondition::PaybackBeyondMonths(36.0),
            title: "Revisit the business case before committing",
            description: "Projected payback exceeds three years. Re-examine savings assumptions \
                          or reduce implementation scope before approval.",
            base_impact: 0.5,
            timeline: "Before approval",
            estimated_cost: None,
        },
        RecommendationRule {
            id: "STR-01",
            category: RuleCategory::Structure,
            condition: RuleCondition::DschOverallDeclines,
            title: "Reconsider the proposed structural changes",
            description: "The weighted structural health score declines under the proposed \
                          variant. Revisit layer and span changes before proceeding.",
            base_impact: 0.65,
            timeline: "Before approval",
            estimated_cost: None,
        },
        RecommendationRule {
            id: "STR-02",
            category: RuleCategory::Structure,
            condition: RuleCondition::FteReductionBeyond(10.0),
            title: "Build a workforce transition plan",
            description: "The variant reduces headcount substantially. Plan redeployment, \
                          retraining, and severance before announcing the new structure.",
            base_impact: 0.6,
            timeline: "1-3 months",
            estimated_cost: Some(80_000.0),
        },
        RecommendationRule {
            id: "CUL-01",
            category: RuleCategory::Culture,
            condition: RuleCondition::SectionBelowBand {
                section: "Culture & Change Management".to_string(),
                band: ScoreBand::Developing,
            },
            title: "Invest in change readiness before restructuring",
            description: "Culture and change management scores sit in the lower bands. Address \
                          change fatigue and communication gaps first; structural change on a \
                          weak cultural base routinely underdelivers.",
            base_impact: 0.55,
            timeline: "3-6 months",
            estimated_cost: Some(60_000.0),
        },
        RecommendationRule {
            id: "CUL-02",
            category: RuleCategory::Culture,
            condition: RuleCondition::DschDimensionDeclinesBeyond {
                dimension: DschDimensionRef::CulturalAlignment,
                amount: 0.05,
            },
            title: "Mitigate the cultural impact of the new structure",
            description: "Cultural alignment declines under the proposed variant. Pair the \
                          restructuring with explicit culture work in the affected units.",
            base_impact: 0.45,
            timeline: "During implementation",
            estimated_cost: None,
        },
    ]
}
