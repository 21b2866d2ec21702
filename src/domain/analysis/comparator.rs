//! Structural comparison between a baseline and a variant organization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::structure::{OrganizationStructure, Position, PositionKey};

/// Thresholds that decide when a structural change raises a risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ComparatorThresholds {
    /// Absolute cost change (percent of baseline) above which a
    /// financial risk is raised, in either direction.
    pub cost_change_risk_pct: f64,
    /// Fraction of baseline positions removed above which a change
    /// management risk is raised.
    pub removal_fraction_risk: f64,
    /// Fraction of baseline FTE reduced above which an operational risk
    /// is raised.
    pub fte_reduction_fraction_risk: f64,
    /// Fraction of surviving positions modified above which an
    /// implementation risk is raised.
    pub modification_fraction_risk: f64,
}

impl Default for ComparatorThresholds {
    fn default() -> Self {
        Self {
            cost_change_risk_pct: 20.0,
            removal_fraction_risk: 0.2,
            fte_reduction_fraction_risk: 0.2,
            modification_fraction_risk: 0.5,
        }
    }
}

/// A field that differs between the baseline and variant version of a
/// surviving position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangedField {
    Title,
    Layer,
    ReportsTo,
    Fte,
    AnnualCost,
}

/// A surviving position that changed between baseline and variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionChange {
    pub key: PositionKey,
    pub baseline: Position,
    pub variant: Position,
    pub changed_fields: Vec<ChangedField>,
}

/// Category of a raised risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Financial,
    Operational,
    ChangeManagement,
    Implementation,
}

/// Severity of a raised risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A risk flagged by the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub severity: Severity,
    pub description: String,
}

/// Full structural diff between baseline and variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralDelta {
    pub added: Vec<Position>,
    pub removed: Vec<Position>,
    pub modified: Vec<PositionChange>,
    /// Headcount change, positive when the variant is larger.
    pub fte_change: f64,
    /// Annual cost change, positive when the variant costs more.
    pub total_cost_change: f64,
    /// Cost change as a percentage of baseline cost. `None` when the
    /// baseline cost is zero.
    pub percentage_cost_change: Option<f64>,
    /// Layer count change. `None` when neither side exposes layers.
    pub layer_change: Option<i64>,
    pub risk_factors: Vec<RiskFactor>,
}

/// Diffs two organization structures and flags risks.
pub struct StructuralComparator;

impl StructuralComparator {
    pub fn compare(
        baseline: &OrganizationStructure,
        variant: &OrganizationStructure,
        thresholds: &ComparatorThresholds,
    ) -> StructuralDelta {
        let baseline_by_key: BTreeMap<PositionKey, &Position> =
            baseline.positions.iter().map(|p| (p.key(), p)).collect();
        let variant_by_key: BTreeMap<PositionKey, &Position> =
            variant.positions.iter().map(|p| (p.key(), p)).collect();

        let mut added = Vec::new();
        let mut removed = Vec::new();
        let mut modified = Vec::new();

        for (key, before) in &baseline_by_key {
            match variant_by_key.get(key) {
                None => removed.push((*before).clone()),
                Some(after) => {
                    let changed_fields = diff_fields(before, after);
                    if !changed_fields.is_empty() {
                        modified.push(PositionChange {
                            key: key.clone(),
                            baseline: (*before).clone(),
                            variant: (*after).clone(),
                            changed_fields,
                        });
                    }
                }
            }
        }
        for (key, after) in &variant_by_key {
            if !baseline_by_key.contains_key(key) {
                added.push((*after).clone());
            }
        }

        let baseline_headcount = baseline.headcount();
        let fte_change = variant.headcount() - baseline_headcount;

        let baseline_cost = baseline.total_annual_cost();
        let total_cost_change = variant.total_annual_cost() - baseline_cost;
        let percentage_cost_change = if baseline_cost == 0.0 {
            None
        } else {
            Some(total_cost_change / baseline_cost * 100.0)
        };

        let baseline_layers = baseline.layer_count();
        let variant_layers = variant.layer_count();
        let layer_change = if baseline_layers == 0 && variant_layers == 0 {
            None
        } else {
            Some(i64::from(variant_layers) - i64::from(baseline_layers))
        };

        let risk_factors = assess_risks(
            thresholds,
            percentage_cost_change,
            baseline.positions.len(),
            removed.len(),
            modified.len(),
            baseline_headcount,
            fte_change,
        );

        StructuralDelta {
            added,
            removed,
            modified,
            fte_change,
            total_cost_change,
            percentage_cost_change,
            layer_change,
            risk_factors,
        }
    }
}

fn diff_fields(before: &Position, after: &Position) -> Vec<ChangedField> {
    let mut fields = Vec::new();
    if before.title != after.title {
        fields.push(ChangedField::Title);
    }
    if before.layer != after.layer {
        fields.push(ChangedField::Layer);
    }
    if before.reports_to != after.reports_to {
        fields.push(ChangedField::ReportsTo);
    }
    if before.fte != after.fte {
        fields.push(ChangedField::Fte);
    }
    if before.annual_cost != after.annual_cost {
        fields.push(ChangedField::AnnualCost);
    }
    fields
}

fn assess_risks(
    thresholds: &ComparatorThresholds,
    percentage_cost_change: Option<f64>,
    baseline_positions: usize,
    removed: usize,
    modified: usize,
    baseline_headcount: f64,
    fte_change: f64,
) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if let Some(pct) = percentage_cost_change {
        // Large swings in either direction are financially destabilizing;
        // an increase strains the budget, a cut of the same size strains
        // service delivery.
        if pct > thresholds.cost_change_risk_pct {
            risks.push(RiskFactor {
                category: RiskCategory::Financial,
                severity: Severity::High,
                description: format!("Annual cost increases by {:.1}% over baseline", pct),
            });
        } else if pct < -thresholds.cost_change_risk_pct {
            risks.push(RiskFactor {
                category: RiskCategory::Financial,
                severity: Severity::Medium,
                description: format!("Annual cost drops by {:.1}% below baseline", -pct),
            });
        }
    }

    if baseline_positions > 0 {
        let removal_fraction = removed as f64 / baseline_positions as f64;
        if removal_fraction > thresholds.removal_fraction_risk {
            risks.push(RiskFactor {
                category: RiskCategory::ChangeManagement,
                severity: Severity::High,
                description: format!(
                    "{:.0}% of baseline positions are eliminated",
                    removal_fraction * 100.0
                ),
            });
        }

        let modification_fraction = modified as f64 / baseline_positions as f64;
        if modification_fraction > thresholds.modification_fraction_risk {
            risks.push(RiskFactor {
                category: RiskCategory::Implementation,
                severity: Severity::Medium,
                description: format!(
                    "{:.0}% of baseline positions are modified",
                    modification_fraction * 100.0
                ),
            });
        }
    }

    if baseline_headcount > 0.0 {
        let reduction_fraction = -fte_change / baseline_headcount;
        if reduction_fraction > thresholds.fte_reduction_fraction_risk {
            risks.push(RiskFactor {
                category: RiskCategory::Operational,
                severity: Severity::High,
                description: format!(
                    "Workforce shrinks by {:.0}% of baseline FTE",
                    reduction_fraction * 100.0
                ),
            });
        }
    }

    risks
}
