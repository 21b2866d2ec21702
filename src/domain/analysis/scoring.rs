//! Section and overall scoring of a validated response set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{QuestionCatalog, ResponseSet, ResponseValue};
use crate::domain::foundation::{Score, ScoreBand};

/// Scores derived from a response set.
///
/// Sections with no scorable answers are omitted rather than scored zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub section_scores: BTreeMap<String, Score>,
    pub overall_score: Score,
}

impl ScoringResult {
    /// Band of the overall score.
    pub fn overall_band(&self) -> ScoreBand {
        ScoreBand::of(self.overall_score)
    }

    /// Returns the score for a section, if any scorable answers fed it.
    pub fn section(&self, name: &str) -> Option<Score> {
        self.section_scores.get(name).copied()
    }
}

/// Normalizes scorable answers to the 0-100 scale and aggregates them
/// into section means and an overall mean of section scores.
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn score(catalog: &QuestionCatalog, responses: &ResponseSet) -> ScoringResult {
        let tier = responses.tier;
        let org = responses.organization_type;

        // section -> (sum, count); BTreeMap keeps section order stable.
        let mut accumulators: BTreeMap<String, (f64, u32)> = BTreeMap::new();

        for question in catalog.applicable(tier, org) {
            let value = match responses.get(&question.id) {
                Some(v) => v,
                None => continue,
            };
            let normalized = match normalize(value, question) {
                Some(n) => n,
                None => continue,
            };
            let entry = accumulators.entry(question.section.clone()).or_insert((0.0, 0));
            entry.0 += normalized;
            entry.1 += 1;
        }

        let section_scores: BTreeMap<String, Score> = accumulators
            .into_iter()
            .map(|(section, (sum, count))| (section, Score::new(sum / f64::from(count))))
            .collect();

        let overall_score = if section_scores.is_empty() {
            Score::ZERO
        } else {
            let sum: f64 = section_scores.values().map(|s| s.value()).sum();
            Score::new(sum / section_scores.len() as f64)
        };

        ScoringResult {
            section_scores,
            overall_score,
        }
    }
}

/// Maps an answer onto the 0-100 scale. Returns `None` for answers that
/// do not contribute to scores.
fn normalize(value: &ResponseValue, question: &crate::domain::catalog::Question) -> Option<f64> {
    match value {
        ResponseValue::Likert(v) => {
            let v = f64::from((*v).clamp(1, 5));
            Some((v - 1.0) / 4.0 * 100.0)
        }
        ResponseValue::Numeric(v) => {
            if !v.is_finite() {
                return None;
            }
            let rules = &question.validation_rules;
            match (rules.min, rules.max) {
                (Some(min), Some(max)) if max > min => {
                    let fraction = ((v - min) / (max - min)).clamp(0.0, 1.0);
                    Some(fraction * 100.0)
                }
                // Without usable bounds the raw value is treated as a
                // 0-100 score directly.
                _ => Some(v.clamp(0.0, 100.0)),
            }
        }
        ResponseValue::Text(_)
        | ResponseValue::Selection(_)
        | ResponseValue::MultiSelection(_)
        | ResponseValue::Upload(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Question;
    use crate::domain::foundation::{OrganizationType, QuestionId};
    use crate::domain::tier::Tier;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Question::likert(qid("A_01"), "Alpha", "p"),
            Question::likert(qid("A_02"), "Alpha", "p"),
            Question::numeric(qid("B_01"), "Beta", "p", 0.0, 10.0),
            Question::text(qid("B_02"), "Beta", "p"),
            Question::likert(qid("C_01"), "Gamma", "p"),
        ])
        .unwrap()
    }

    fn responses(entries: Vec<(&str, ResponseValue)>) -> ResponseSet {
        let map = entries
            .into_iter()
            .map(|(id, v)| (qid(id), v))
            .collect::<BTreeMap<_, _>>();
        ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "Acme Corp",
            map,
        )
        .unwrap()
    }

    #[test]
    fn likert_normalizes_linearly() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![
                ("A_01", ResponseValue::Likert(1)),
                ("A_02", ResponseValue::Likert(5)),
            ]),
        );
        // (0 + 100) / 2
        assert_eq!(result.section("Alpha").unwrap().value(), 50.0);
    }

    #[test]
    fn likert_midpoint_scores_fifty() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![("A_01", ResponseValue::Likert(3))]),
        );
        assert_eq!(result.section("Alpha").unwrap().value(), 50.0);
    }

    #[test]
    fn numeric_normalizes_against_bounds() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![("B_01", ResponseValue::Numeric(7.5))]),
        );
        assert_eq!(result.section("Beta").unwrap().value(), 75.0);
    }

    #[test]
    fn numeric_outside_bounds_clamps() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![("B_01", ResponseValue::Numeric(25.0))]),
        );
        assert_eq!(result.section("Beta").unwrap().value(), 100.0);
    }

    #[test]
    fn non_scorable_answers_are_skipped() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![
                ("B_01", ResponseValue::Numeric(5.0)),
                ("B_02", ResponseValue::Text("context".into())),
            ]),
        );
        // Text answer does not drag the section mean.
        assert_eq!(result.section("Beta").unwrap().value(), 50.0);
    }

    #[test]
    fn sections_without_scorable_answers_are_omitted() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![("A_01", ResponseValue::Likert(4))]),
        );
        assert!(result.section("Beta").is_none());
        assert!(result.section("Gamma").is_none());
        assert_eq!(result.section_scores.len(), 1);
    }

    #[test]
    fn overall_is_mean_of_section_scores() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![
                ("A_01", ResponseValue::Likert(5)),
                ("B_01", ResponseValue::Numeric(5.0)),
            ]),
        );
        // Alpha 100, Beta 50 -> overall 75; each section weighs equally
        // regardless of how many answers fed it.
        assert_eq!(result.overall_score.value(), 75.0);
    }

    #[test]
    fn empty_submission_scores_zero_overall() {
        let result = ScoringEngine::score(&catalog(), &responses(vec![]));
        assert!(result.section_scores.is_empty());
        assert_eq!(result.overall_score, Score::ZERO);
    }

    #[test]
    fn overall_band_reflects_overall_score() {
        let result = ScoringEngine::score(
            &catalog(),
            &responses(vec![("A_01", ResponseValue::Likert(5))]),
        );
        assert_eq!(result.overall_band(), ScoreBand::Transforming);
    }
}
