//! Registry of brands available by id

use std::collections::BTreeMap;

use crate::LogomarkError;

use super::Brand;

/// Brands keyed by id, iterated in id order
#[derive(Debug, Default)]
pub struct BrandRegistry {
    brands: BTreeMap<String, Brand>,
}

impl BrandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in brands
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for brand in Brand::builtins() {
            registry.brands.insert(brand.id.clone(), brand);
        }
        registry
    }

    /// Register a brand, rejecting duplicate ids
    pub fn register(&mut self, brand: Brand) -> Result<(), LogomarkError> {
        if self.brands.contains_key(&brand.id) {
            return Err(LogomarkError::DuplicateBrand { id: brand.id });
        }
        tracing::debug!(brand = %brand.id, "registered brand");
        self.brands.insert(brand.id.clone(), brand);
        Ok(())
    }

    /// Get a brand by id, suggesting close matches when it is missing
    pub fn get(&self, id: &str) -> Result<&Brand, LogomarkError> {
        self.brands
            .get(id)
            .ok_or_else(|| LogomarkError::UnknownBrand {
                name: id.to_string(),
                suggestions: find_similar(self.brands.keys(), id, 2),
            })
    }

    /// Check if a brand exists
    pub fn contains(&self, id: &str) -> bool {
        self.brands.contains_key(id)
    }

    /// All registered brand ids
    pub fn ids(&self) -> Vec<&str> {
        self.brands.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brand> {
        self.brands.values()
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

/// Find ids within `max_distance` edits of `target`, closest first
fn find_similar<'a>(
    candidates: impl Iterator<Item = &'a String>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut matches: Vec<(usize, &String)> = candidates
        .map(|c| (levenshtein_distance(c, target), c))
        .filter(|(d, c)| *d <= max_distance || c.starts_with(target))
        .collect();
    matches.sort();
    matches.into_iter().map(|(_, c)| c.clone()).collect()
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
