use std::collections::HashSet;

use crate::normalize::nfkc_lower;
use crate::SkillSet;

/// Fraction of required skills present in the found set, in [0, 1].
/// Comparison is case-insensitive. An empty requirement set scores 0.0 by
/// policy: nothing required means nothing can be covered, not vacuous
/// perfection.
pub fn skill_coverage(required: &SkillSet, found: &SkillSet) -> f64 {
    let required_lower: HashSet<String> = required.iter().map(|s| nfkc_lower(s)).collect();
    if required_lower.is_empty() {
        return 0.0;
    }

    let found_lower: HashSet<String> = found.iter().map(|s| nfkc_lower(s)).collect();
    let matched = required_lower.intersection(&found_lower).count();
    matched as f64 / required_lower.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_and_partial_coverage() {
        let required = set(&["Python", "Docker"]);
        assert!((skill_coverage(&required, &set(&["python", "docker"])) - 1.0).abs() < f64::EPSILON);
        assert!((skill_coverage(&required, &set(&["Python"])) - 0.5).abs() < f64::EPSILON);
        assert_eq!(skill_coverage(&required, &set(&[])), 0.0);
    }

    #[test]
    fn empty_requirements_score_zero_not_one() {
        assert_eq!(skill_coverage(&set(&[]), &set(&["Python", "SQL"])), 0.0);
        assert_eq!(skill_coverage(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(
            (skill_coverage(&set(&["PostgreSQL"]), &set(&["postgresql"])) - 1.0).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn result_is_always_in_unit_interval() {
        let required = set(&["a", "b", "c"]);
        let found = set(&["a", "z", "q", "b"]);
        let cov = skill_coverage(&required, &found);
        assert!((0.0..=1.0).contains(&cov));
    }
}
