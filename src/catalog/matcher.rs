//! Fuzzy matching of search queries against projects.
//!
//! Scores run 0-95: exact matches score 95, substring matches 10-95 scaled
//! by coverage, and anything else by Levenshtein similarity (max 85),
//! rejected outright past 50% edits.

use crate::models::Project;
use serde::Serialize;

/// Which part of the project matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Tag,
    Description,
}

/// A project and how well it matched.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMatch {
    pub project: Project,
    pub confidence: u8,
    pub matched_field: MatchField,
}

/// Ranks projects against a free-text query.
#[derive(Debug, Default)]
pub struct ProjectMatcher;

impl ProjectMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score every project and return the best matches, highest first.
    pub fn find_matches(
        &self,
        query: &str,
        projects: &[Project],
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<ProjectMatch> {
        let query = Self::normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<ProjectMatch> = projects
            .iter()
            .filter_map(|project| {
                let (confidence, matched_field) = self.score_project(&query, project)?;
                (confidence >= min_confidence).then(|| ProjectMatch {
                    project: project.clone(),
                    confidence,
                    matched_field,
                })
            })
            .collect();

        // Highest confidence first, then gallery order
        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.project.id.cmp(&b.project.id))
        });
        results.truncate(max_results);
        results
    }

    fn score_project(&self, query: &str, project: &Project) -> Option<(u8, MatchField)> {
        let title = Self::calculate_fuzzy_score(query, &Self::normalize(&project.title));

        let tag = project
            .tags
            .iter()
            .chain(std::iter::once(&project.category.as_str().to_string()))
            .map(|t| Self::calculate_fuzzy_score(query, &Self::normalize(t)))
            .max()
            .unwrap_or(0);

        // Descriptions are long; only whole-word hits count
        let description = Self::normalize(&project.description)
            .split_whitespace()
            .map(|word| Self::calculate_fuzzy_score(query, word))
            .max()
            .unwrap_or(0)
            .saturating_sub(10);

        [
            (title, MatchField::Title),
            (tag, MatchField::Tag),
            (description, MatchField::Description),
        ]
        .into_iter()
        .filter(|(score, _)| *score > 0)
        .max_by_key(|(score, _)| *score)
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Lowercase, fold Latin accents and collapse whitespace.
    pub fn normalize(text: &str) -> String {
        text.trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'í' | 'ì' | 'î' | 'ï' => 'i',
                'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
                'ú' | 'ù' | 'û' | 'ü' => 'u',
                'ç' => 'c',
                'ñ' => 'n',
                '-' => ' ',
                other => other,
            })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
