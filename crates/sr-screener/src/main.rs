use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sr_core::extraction::{PlainTextExtractor, TextExtractor};
use sr_core::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use sr_core::{BatchReport, DocumentSource, ScreeningEngine, SkillCatalog, WeightPair};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "sr-screener", about = "Score resumes against a job description")]
struct Cli {
    /// Newline-delimited skill catalog file
    #[arg(long, env = "SRS_SKILLS_FILE")]
    skills: PathBuf,

    /// Job description text file
    #[arg(long)]
    jd: PathBuf,

    /// Weight applied to JD similarity
    #[arg(long, default_value_t = 0.6)]
    similarity_weight: f64,

    /// Weight applied to skill coverage
    #[arg(long, default_value_t = 0.4)]
    coverage_weight: f64,

    /// Minimum match score (0-100) for a PASS verdict
    #[arg(long, default_value_t = 50.0)]
    min_score: f64,

    /// Emit results as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Resume files to score (read as plain text; richer formats need
    /// upstream extraction)
    #[arg(required = true)]
    resumes: Vec<PathBuf>,
}

fn main() -> Result<()> {
    install_tracing_panic_hook("sr-screener");
    init_tracing_subscriber("sr-screener");

    let cli = Cli::parse();
    if cli.similarity_weight < 0.0 || cli.coverage_weight < 0.0 {
        bail!("weights must be non-negative");
    }
    if !(0.0..=100.0).contains(&cli.min_score) {
        bail!("--min-score must be between 0 and 100");
    }

    let catalog = SkillCatalog::from_path(&cli.skills)
        .with_context(|| format!("loading skill catalog from {}", cli.skills.display()))?;
    info!(skills = catalog.len(), "skill catalog loaded");

    let extractor = PlainTextExtractor;
    let jd_text = extractor
        .extract_text(&cli.jd)
        .context("reading job description")?;
    if jd_text.trim().is_empty() {
        bail!("job description {} is empty", cli.jd.display());
    }

    let weights = WeightPair::new(cli.similarity_weight, cli.coverage_weight);
    let engine = ScreeningEngine::new(catalog, weights);
    let documents: Vec<DocumentSource> = cli
        .resumes
        .iter()
        .cloned()
        .map(DocumentSource::from_path)
        .collect();

    info!(documents = documents.len(), "screening batch");
    let report = engine.screen_batch(&jd_text, &documents, &extractor)?;

    for failure in &report.failures {
        warn!(%failure, "document skipped");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.results)?);
    } else {
        print_table(&report, cli.min_score);
    }

    Ok(())
}

fn print_table(report: &BatchReport, min_score: f64) {
    println!(
        "{:<30} {:>8} {:>8} {:>10} {:>6}  {:<7} {}",
        "resume", "score", "jd sim", "coverage", "years", "verdict", "missing skills"
    );

    for result in &report.results {
        let years = result
            .years_experience
            .map(|y| format!("{y}"))
            .unwrap_or_else(|| "-".to_string());
        let missing = result
            .missing_skills
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(";");

        println!(
            "{:<30} {:>8.2} {:>8.2} {:>10.2} {:>6}  {:<7} {}",
            result.identifier,
            result.match_score,
            result.jd_similarity,
            result.skill_coverage,
            years,
            result.verdict(min_score).as_str(),
            missing
        );
    }

    for failure in &report.failures {
        println!("{failure}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_weights_threshold_and_resumes() {
        let cli = Cli::parse_from([
            "sr-screener",
            "--skills",
            "skills.txt",
            "--jd",
            "jd.txt",
            "--similarity-weight",
            "0.7",
            "--coverage-weight",
            "0.3",
            "--min-score",
            "60",
            "a.txt",
            "b.txt",
        ]);

        assert_eq!(cli.resumes.len(), 2);
        assert!((cli.similarity_weight - 0.7).abs() < f64::EPSILON);
        assert!((cli.min_score - 60.0).abs() < f64::EPSILON);
        assert!(!cli.json);
    }
}
