//! Question catalog: the full bank of assessment questions plus
//! tier- and organization-aware filtering.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{OrganizationType, QuestionId, ValidationError};
use crate::domain::tier::Tier;

use super::question::Question;

/// An ordered, duplicate-free bank of questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    #[serde(skip)]
    by_id: BTreeMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Creates a catalog, rejecting duplicate question ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut by_id = BTreeMap::new();
        for (idx, question) in questions.iter().enumerate() {
            if by_id.insert(question.id.clone(), idx).is_some() {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id '{}'", question.id),
                ));
            }
        }
        Ok(Self { questions, by_id })
    }

    /// Looks up a question by id.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.by_id.get(id).map(|idx| &self.questions[*idx])
    }

    /// All questions in catalog order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    /// Questions that appear for the given tier and organization type,
    /// in catalog order.
    pub fn applicable(&self, tier: Tier, org_type: OrganizationType) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.applies_to(tier, org_type))
            .collect()
    }

    /// Required questions for the given tier and organization type.
    pub fn required_for(&self, tier: Tier, org_type: OrganizationType) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.required && q.applies_to(tier, org_type))
            .collect()
    }

    /// Distinct section names appearing for the given tier and
    /// organization type, in catalog order.
    pub fn sections_for(&self, tier: Tier, org_type: OrganizationType) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for q in self.applicable(tier, org_type) {
            if !sections.contains(&q.section.as_str()) {
                sections.push(&q.section);
            }
        }
        sections
    }
}

fn qid(s: &str) -> QuestionId {
    // Ids in the standard catalog are static and non-blank.
    match QuestionId::new(s) {
        Ok(id) => id,
        Err(_) => unreachable!(),
    }
}

/// The standard question bank shared by all assessments.
pub static STANDARD_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    let questions = vec![
        // Leadership & Strategy
        Question::likert(
            qid("LS_01"),
            "Leadership & Strategy",
            "Senior leadership communicates a clear, shared vision for the organization.",
        ),
        Question::likert(
            qid("LS_02"),
            "Leadership & Strategy",
            "Strategic priorities are translated into measurable unit-level goals.",
        ),
        Question::likert(
            qid("LS_03"),
            "Leadership & Strategy",
            "Decision rights are clearly assigned and respected across leadership levels.",
        ),
        Question::text(
            qid("LS_04"),
            "Leadership & Strategy",
            "Describe the most significant strategic shift your organization made in the last two years.",
        ),
        // Operations & Processes
        Question::likert(
            qid("OP_01"),
            "Operations & Processes",
            "Core operational processes are documented and consistently followed.",
        ),
        Question::likert(
            qid("OP_02"),
            "Operations & Processes",
            "Cross-functional handoffs happen without rework or delay.",
        ),
        Question::numeric(
            qid("OP_03"),
            "Operations & Processes",
            "Average number of business days to complete a standard procurement request.",
            0.0,
            60.0,
        ),
        Question::select(
            qid("OP_04"),
            "Operations & Processes",
            "How are process improvement initiatives prioritized?",
            vec![
                "Ad hoc".to_string(),
                "Annual planning cycle".to_string(),
                "Continuous improvement program".to_string(),
            ],
        ),
        // Human Capital
        Question::likert(
            qid("HC_01"),
            "Human Capital",
            "Staffing levels are matched to workload across units.",
        ),
        Question::likert(
            qid("HC_02"),
            "Human Capital",
            "Roles and reporting lines are clear to employees at every level.",
        ),
        Question::numeric(
            qid("HC_03"),
            "Human Capital",
            "Voluntary turnover rate over the last twelve months, as a percentage.",
            0.0,
            50.0,
        ),
        Question::likert(
            qid("HC_04"),
            "Human Capital",
            "Succession plans exist for critical leadership positions.",
        ),
        // Technology & Infrastructure
        Question::likert(
            qid("TI_01"),
            "Technology & Infrastructure",
            "Core systems integrate without manual re-entry of data.",
        ),
        Question::likert(
            qid("TI_02"),
            "Technology & Infrastructure",
            "Technology investments are governed by a documented roadmap.",
        ),
        Question::upload(
            qid("TI_03"),
            "Technology & Infrastructure",
            "Upload your current systems inventory or application portfolio, if available.",
            Tier::OneTimeDiagnostic,
        ),
        // Culture & Change Management
        Question::likert(
            qid("CL_01"),
            "Culture & Change Management",
            "Employees understand why organizational changes are made.",
        ),
        Question::likert(
            qid("CL_02"),
            "Culture & Change Management",
            "Past restructuring efforts were supported by adequate change management.",
        ),
        Question::likert(
            qid("CL_03"),
            "Culture & Change Management",
            "Staff feel safe raising concerns about proposed changes.",
        ),
        // Performance Management
        Question::likert(
            qid("PM_01"),
            "Performance Management",
            "Unit performance is reviewed against agreed metrics on a regular cadence.",
        ),
        Question::likert(
            qid("PM_02"),
            "Performance Management",
            "Underperformance triggers a documented corrective process.",
        ),
        // Higher-education specific
        Question::likert(
            qid("HE_01"),
            "Leadership & Strategy",
            "Academic and administrative leadership share accountability for enrollment outcomes.",
        )
        .only_for(vec![
            OrganizationType::CommunityCollege,
            OrganizationType::PublicUniversity,
            OrganizationType::TradeTechnical,
        ]),
        Question::likert(
            qid("HE_02"),
            "Operations & Processes",
            "Student-facing services are organized around the student journey rather than departments.",
        )
        .only_for(vec![
            OrganizationType::CommunityCollege,
            OrganizationType::PublicUniversity,
            OrganizationType::TradeTechnical,
        ]),
        // Healthcare specific
        Question::likert(
            qid("HS_01"),
            "Operations & Processes",
            "Clinical and administrative workflows are coordinated to minimize patient wait times.",
        )
        .only_for(vec![OrganizationType::HospitalHealthcare]),
        // Financial Performance (comprehensive and above)
        Question::numeric(
            qid("FP_01"),
            "Financial Performance",
            "Operating margin over the last fiscal year, as a percentage.",
            -20.0,
            40.0,
        )
        .from_tier(Tier::ComprehensivePackage),
        Question::likert(
            qid("FP_02"),
            "Financial Performance",
            "Budget owners receive timely, accurate spend reporting.",
        )
        .from_tier(Tier::ComprehensivePackage),
        Question::likert(
            qid("FP_03"),
            "Financial Performance",
            "Cost reduction targets are tied to specific structural changes.",
        )
        .from_tier(Tier::ComprehensivePackage),
        // Risk Management (enterprise only)
        Question::likert(
            qid("RM_01"),
            "Risk Management",
            "Organizational risks are tracked in a register with named owners.",
        )
        .from_tier(Tier::EnterpriseTransformation),
        Question::likert(
            qid("RM_02"),
            "Risk Management",
            "Restructuring proposals undergo a formal risk assessment before approval.",
        )
        .from_tier(Tier::EnterpriseTransformation),
        Question::upload(
            qid("RM_03"),
            "Risk Management",
            "Upload your enterprise risk register, if available.",
            Tier::EnterpriseTransformation,
        ),
    ];

    match QuestionCatalog::new(questions) {
        Ok(catalog) => catalog,
        // Static ids above are unique.
        Err(_) => unreachable!(),
    }
});
