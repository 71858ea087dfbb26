pub mod catalog;
pub mod error;
pub mod experience;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod schema;

/// Deduplicated skill strings, sorted for deterministic output.
pub type SkillSet = std::collections::BTreeSet<String>;

pub use catalog::SkillCatalog;
pub use error::ScreenError;
pub use matching::pipeline::{
    combined_match_score, BatchReport, CombinedScore, DocumentSource, ScreenFailure,
    ScreeningEngine,
};
pub use matching::weights::WeightPair;
pub use schema::{MatchResult, Verdict};
