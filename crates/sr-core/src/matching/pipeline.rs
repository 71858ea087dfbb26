use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use super::coverage::skill_coverage;
use super::similarity::jd_resume_similarity;
use super::skills::find_skills;
use super::weights::WeightPair;
use crate::catalog::SkillCatalog;
use crate::error::ScreenError;
use crate::experience::estimate_years;
use crate::extraction::TextExtractor;
use crate::schema::MatchResult;
use crate::SkillSet;

/// Composite score with its two constituents, all in the sub-scorers' [0, 1]
/// range when the weights sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedScore {
    pub score: f64,
    pub similarity: f64,
    pub coverage: f64,
}

/// Blend JD similarity and skill coverage with the caller's coefficients.
/// No clamping: the output range follows the weights, by contract.
pub fn combined_match_score(
    jd_text: &str,
    resume_text: &str,
    required: &SkillSet,
    found: &SkillSet,
    weights: WeightPair,
) -> CombinedScore {
    if (weights.sum() - 1.0).abs() > 1e-9 {
        debug!(
            weight_sum = weights.sum(),
            "weights do not sum to 1; composite range follows the caller's coefficients"
        );
    }

    let similarity = jd_resume_similarity(jd_text, resume_text);
    let coverage = skill_coverage(required, found);
    CombinedScore {
        score: weights.similarity * similarity + weights.coverage * coverage,
        similarity,
        coverage,
    }
}

/// One résumé file queued for screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub identifier: String,
    pub path: PathBuf,
}

impl DocumentSource {
    /// Identify the document by its file name, falling back to the full path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { identifier, path }
    }
}

/// A per-document failure reported alongside sibling results, never instead
/// of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenFailure {
    pub identifier: String,
    pub reason: String,
}

impl fmt::Display for ScreenFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to process {}: {}", self.identifier, self.reason)
    }
}

/// Batch outcome: results ranked by match score descending, failures listed
/// separately.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<MatchResult>,
    pub failures: Vec<ScreenFailure>,
}

/// Scores résumés against a JD using an injected read-only skill catalog.
/// Every scoring call is pure; the engine holds no mutable state and can be
/// shared across threads.
pub struct ScreeningEngine {
    catalog: SkillCatalog,
    weights: WeightPair,
}

impl ScreeningEngine {
    pub fn new(catalog: SkillCatalog, weights: WeightPair) -> Self {
        Self { catalog, weights }
    }

    pub fn with_default_weights(catalog: SkillCatalog) -> Self {
        Self::new(catalog, WeightPair::default())
    }

    /// Score one résumé text against the JD. A blank JD is rejected up front;
    /// a blank résumé is not an error and scores zero across the board.
    pub fn screen(
        &self,
        identifier: &str,
        jd_text: &str,
        resume_text: &str,
    ) -> Result<MatchResult, ScreenError> {
        if jd_text.trim().is_empty() {
            return Err(ScreenError::EmptyJobDescription);
        }

        let required = find_skills(jd_text, &self.catalog);
        let found = find_skills(resume_text, &self.catalog);
        let combined = combined_match_score(jd_text, resume_text, &required, &found, self.weights);
        let years = estimate_years(resume_text);

        Ok(MatchResult::new(identifier, combined, years, found, required))
    }

    /// Extract and score one résumé file.
    pub fn screen_path(
        &self,
        jd_text: &str,
        document: &DocumentSource,
        extractor: &dyn TextExtractor,
    ) -> Result<MatchResult, ScreenError> {
        let text = extractor.extract_text(&document.path)?;
        self.screen(&document.identifier, jd_text, &text)
    }

    /// Screen a batch of résumé files in parallel. Each document is
    /// independent: an extraction failure is isolated into the report and
    /// never aborts its siblings.
    pub fn screen_batch(
        &self,
        jd_text: &str,
        documents: &[DocumentSource],
        extractor: &dyn TextExtractor,
    ) -> Result<BatchReport, ScreenError> {
        if jd_text.trim().is_empty() {
            return Err(ScreenError::EmptyJobDescription);
        }
        if documents.is_empty() {
            return Err(ScreenError::NoDocuments);
        }

        let outcomes: Vec<Result<MatchResult, ScreenFailure>> = documents
            .par_iter()
            .map(|document| {
                self.screen_path(jd_text, document, extractor).map_err(|err| {
                    warn!(identifier = %document.identifier, error = %err, "document skipped");
                    ScreenFailure {
                        identifier: document.identifier.clone(),
                        reason: err.to_string(),
                    }
                })
            })
            .collect();

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(result) => report.results.push(result),
                Err(failure) => report.failures.push(failure),
            }
        }

        report.results.sort_by(|a, b| {
            match b
                .match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
            {
                Ordering::Equal => a.identifier.cmp(&b.identifier),
                other => other,
            }
        });

        Ok(report)
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }
}
