//! Advertisement line filtering
//!
//! A line is noise when it contains any configured keyword, compared
//! case-insensitively. Noise takes precedence over everything else: a noise
//! line is never a title candidate and never part of chapter content.

/// Case-insensitive substring filter for promotional lines
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    keywords: Vec<String>,
}

impl NoiseFilter {
    /// Create a filter from keywords; empty keywords are ignored
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort();
        keywords.dedup();

        Self { keywords }
    }

    /// Check whether a line is an advertisement
    pub fn is_noise(&self, line: &str) -> bool {
        if self.keywords.is_empty() || line.trim().is_empty() {
            return false;
        }

        let lowered = line.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Number of keywords in the filter
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if no keyword is configured
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
