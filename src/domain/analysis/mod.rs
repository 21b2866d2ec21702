//! Analysis engines: validation, scoring, structural comparison, DSCH,
//! ROI, and recommendation synthesis.

pub mod comparator;
pub mod comparison;
pub mod dsch;
pub mod recommendation;
pub mod roi;
pub mod scoring;
pub mod validator;

pub use comparator::{
    ChangedField, ComparatorThresholds, PositionChange, RiskCategory, RiskFactor, Severity,
    StructuralComparator, StructuralDelta,
};
pub use comparison::ComparisonResult;
pub use dsch::{DschAnalyzer, DschConfig, DschContext, DschImprovement, DschVector};
pub use recommendation::{
    standard_rules, DataSource, DschDimensionRef, Recommendation, RecommendationContext,
    RecommendationRule, RecommendationSynthesizer, RuleCategory, RuleCondition,
};
pub use roi::{RoiCalculationType, RoiCalculator, RoiDefaults, RoiError, RoiRequest, RoiResult};
pub use scoring::{ScoringEngine, ScoringResult};
pub use validator::{ResponseValidator, TypeError, ValidationReport};
