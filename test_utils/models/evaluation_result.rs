use std::collections::{HashMap, HashSet};

/// Comparison of the asset keys a document was expected to produce against the keys
/// actually extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub expected: Vec<String>,
    pub results: Vec<String>,
    pub false_positives: Vec<String>,
    pub false_negatives: Vec<String>,
    pub duplicates: Vec<String>,
}

impl EvaluationResult {
    pub fn new(expected: &[String], results: &[String]) -> Self {
        let expected_set: HashSet<&String> = expected.iter().collect();
        let results_set: HashSet<&String> = results.iter().collect();

        // Keep result order so failure output reads like the document
        let false_positives: Vec<String> = results
            .iter()
            .filter(|key| !expected_set.contains(key))
            .cloned()
            .collect();
        let false_negatives: Vec<String> = expected
            .iter()
            .filter(|key| !results_set.contains(key))
            .cloned()
            .collect();

        let mut key_counts: HashMap<&String, usize> = HashMap::new();
        for key in results {
            *key_counts.entry(key).or_insert(0) += 1;
        }
        let mut duplicates: Vec<String> = key_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key.clone())
            .collect();
        duplicates.sort();

        Self {
            expected: expected.to_vec(),
            results: results.to_vec(),
            false_positives,
            false_negatives,
            duplicates,
        }
    }

    pub fn is_exact_match(&self) -> bool {
        self.expected == self.results
    }

    /// Number of keys which were missing, unexpected or repeated.
    pub fn error_count(&self) -> usize {
        self.false_positives.len() + self.false_negatives.len() + self.duplicates.len()
    }
}
