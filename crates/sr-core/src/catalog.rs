use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::normalize::nfkc_lower;

/// Canonical skill list, case-preserving for display and case-insensitive for
/// lookup. Immutable after construction and shared read-only by all matching
/// operations.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<String>,
    by_lower: HashMap<String, usize>,
}

impl SkillCatalog {
    pub fn from_skills(skills: Vec<String>) -> Self {
        let mut by_lower = HashMap::with_capacity(skills.len());
        for (idx, skill) in skills.iter().enumerate() {
            // Duplicates are harmless; the first occurrence wins for lookup.
            by_lower.entry(nfkc_lower(skill)).or_insert(idx);
        }
        Self { skills, by_lower }
    }

    /// Parse a newline-delimited skill list, ignoring blank lines and
    /// surrounding whitespace.
    pub fn from_lines(input: &str) -> Self {
        let skills = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::from_skills(skills)
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        Ok(Self::from_lines(&std::fs::read_to_string(path)?))
    }

    /// Resolve any casing of a skill to its catalog form.
    pub fn canonical(&self, skill: &str) -> Option<&str> {
        self.by_lower
            .get(&nfkc_lower(skill))
            .map(|&idx| self.skills[idx].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_skips_blanks_and_trims() {
        let catalog = SkillCatalog::from_lines("Python\n\n  SQL  \nDocker\n");
        let skills: Vec<_> = catalog.iter().collect();
        assert_eq!(skills, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn canonical_lookup_is_case_insensitive() {
        let catalog = SkillCatalog::from_lines("PostgreSQL\nDocker");
        assert_eq!(catalog.canonical("postgresql"), Some("PostgreSQL"));
        assert_eq!(catalog.canonical("DOCKER"), Some("Docker"));
        assert_eq!(catalog.canonical("kubernetes"), None);
    }

    #[test]
    fn duplicate_entries_resolve_to_first_occurrence() {
        let catalog = SkillCatalog::from_lines("Python\npython");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.canonical("PYTHON"), Some("Python"));
    }

    #[test]
    fn empty_input_yields_empty_catalog() {
        let catalog = SkillCatalog::from_lines("");
        assert!(catalog.is_empty());
        assert_eq!(catalog.canonical("anything"), None);
    }
}
