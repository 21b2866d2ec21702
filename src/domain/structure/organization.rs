//! Organizational structure snapshots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

use super::position::Position;

/// Pre-computed headline metrics for a structure.
///
/// Optional on input; when present, comparison prefers these over values
/// derived from the position list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMetrics {
    pub total_employees: f64,
    pub management_layers: u32,
    pub span_of_control: f64,
}

/// Aggregate cost figures for a structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostStructure {
    pub total_annual_cost: f64,
    pub management_cost: f64,
}

/// A snapshot of an organization's positions, optionally annotated with
/// headline metrics and costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationStructure {
    pub positions: Vec<Position>,
    pub metrics: Option<StructureMetrics>,
    pub cost_structure: Option<CostStructure>,
}

impl OrganizationStructure {
    /// Creates a structure, rejecting an empty position list.
    pub fn new(positions: Vec<Position>) -> Result<Self, ValidationError> {
        if positions.is_empty() {
            return Err(ValidationError::empty_field("positions"));
        }
        Ok(Self {
            positions,
            metrics: None,
            cost_structure: None,
        })
    }

    /// Attaches pre-computed headline metrics.
    pub fn with_metrics(mut self, metrics: StructureMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Attaches aggregate cost figures.
    pub fn with_cost_structure(mut self, costs: CostStructure) -> Self {
        self.cost_structure = Some(costs);
        self
    }

    /// Sum of FTE across all positions.
    pub fn total_fte(&self) -> f64 {
        self.positions.iter().map(|p| p.fte).sum()
    }

    /// Effective headcount: pre-computed metric when present, else the
    /// FTE sum.
    pub fn headcount(&self) -> f64 {
        self.metrics
            .map(|m| m.total_employees)
            .unwrap_or_else(|| self.total_fte())
    }

    /// Sum of annual cost across all positions, preferring the attached
    /// cost structure when present.
    pub fn total_annual_cost(&self) -> f64 {
        self.cost_structure
            .map(|c| c.total_annual_cost)
            .unwrap_or_else(|| self.positions.iter().map(|p| p.annual_cost).sum())
    }

    /// Number of distinct layers: pre-computed metric when present, else
    /// the deepest layer value in the position list.
    pub fn layer_count(&self) -> u32 {
        self.metrics
            .map(|m| m.management_layers)
            .unwrap_or_else(|| self.positions.iter().map(|p| p.layer).max().unwrap_or(0))
    }

    /// Direct-report counts per manager, derived from `reports_to` links.
    ///
    /// Positions without a `reports_to` link do not contribute.
    pub fn spans(&self) -> HashMap<&str, u32> {
        let mut spans: HashMap<&str, u32> = HashMap::new();
        for p in &self.positions {
            if let Some(manager) = &p.reports_to {
                *spans.entry(manager.as_str()).or_insert(0) += 1;
            }
        }
        spans
    }

    /// Mean direct-report count across managers. `None` when no
    /// reporting links exist.
    pub fn average_span(&self) -> Option<f64> {
        let spans = self.spans();
        if spans.is_empty() {
            return None;
        }
        let total: u32 = spans.values().sum();
        Some(f64::from(total) / spans.len() as f64)
    }

    /// Population variance of direct-report counts across managers.
    /// `None` when no reporting links exist.
    pub fn span_variance(&self) -> Option<f64> {
        let spans = self.spans();
        if spans.is_empty() {
            return None;
        }
        let mean = f64::from(spans.values().sum::<u32>()) / spans.len() as f64;
        let variance = spans
            .values()
            .map(|&s| {
                let d = f64::from(s) - mean;
                d * d
            })
            .sum::<f64>()
            / spans.len() as f64;
        Some(variance)
    }
}
