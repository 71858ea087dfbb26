use serde::Serialize;

use crate::matching::pipeline::CombinedScore;
use crate::normalize::nfkc_lower;
use crate::SkillSet;

/// One document's assessment. Scores are 0-100 percentages rounded to two
/// decimals; skill sets keep catalog casing and sort order. Immutable once
/// created; collections of results are ranked by `match_score` descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub identifier: String,
    pub match_score: f64,
    pub jd_similarity: f64,
    pub skill_coverage: f64,
    pub years_experience: Option<f64>,
    pub matched_skills: SkillSet,
    pub required_skills: SkillSet,
    pub missing_skills: SkillSet,
}

impl MatchResult {
    pub fn new(
        identifier: impl Into<String>,
        combined: CombinedScore,
        years_experience: Option<f64>,
        matched_skills: SkillSet,
        required_skills: SkillSet,
    ) -> Self {
        // missing = required - matched, compared case-insensitively, so the
        // invariant missing ⊆ required holds by construction.
        let matched_lower: SkillSet = matched_skills.iter().map(|s| nfkc_lower(s)).collect();
        let missing_skills = required_skills
            .iter()
            .filter(|skill| !matched_lower.contains(&nfkc_lower(skill)))
            .cloned()
            .collect();

        Self {
            identifier: identifier.into(),
            match_score: round2(combined.score * 100.0),
            jd_similarity: round2(combined.similarity * 100.0),
            skill_coverage: round2(combined.coverage * 100.0),
            years_experience,
            matched_skills,
            required_skills,
            missing_skills,
        }
    }

    /// Label against a caller-supplied minimum pass score (0-100).
    pub fn verdict(&self, min_score: f64) -> Verdict {
        if self.match_score >= min_score {
            Verdict::Pass
        } else {
            Verdict::Reject
        }
    }

    /// Flat tabular row for downstream ranking/export: two-decimal score
    /// strings, skill sets `;`-joined in sorted order, blank cell for a
    /// missing experience estimate.
    pub fn flat_row(&self) -> Vec<String> {
        vec![
            self.identifier.clone(),
            format!("{:.2}", self.match_score),
            format!("{:.2}", self.jd_similarity),
            format!("{:.2}", self.skill_coverage),
            self.years_experience
                .map(|years| format!("{years}"))
                .unwrap_or_default(),
            join_skills(&self.matched_skills),
            join_skills(&self.required_skills),
            join_skills(&self.missing_skills),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Reject,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Reject => "REJECT",
        }
    }
}

fn join_skills(set: &SkillSet) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(";")
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
