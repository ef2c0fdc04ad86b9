//! Line view of a raw document with noise marks

use std::ops::Range;

use crate::domain::noise::NoiseFilter;
use crate::domain::text::trim_blank_lines;

/// A document split into lines, each flagged as noise or not
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
    noise: Vec<bool>,
}

impl<'a> Document<'a> {
    /// Split text into lines (`\n` or `\r\n`) and mark advertisement lines
    pub fn new(text: &'a str, filter: &NoiseFilter) -> Self {
        let lines: Vec<&'a str> = text.lines().collect();
        let noise = lines.iter().map(|line| filter.is_noise(line)).collect();
        Self { lines, noise }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true for a document without lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if any
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Whether the line at `index` is an advertisement
    pub fn is_noise(&self, index: usize) -> bool {
        self.noise.get(index).copied().unwrap_or(false)
    }

    /// Number of advertisement lines
    pub fn noise_count(&self) -> usize {
        self.noise.iter().filter(|&&n| n).count()
    }

    /// Lines that are neither noise nor blank, with their indices
    pub fn meaningful_lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(move |(i, line)| !self.is_noise(*i) && !line.trim().is_empty())
            .map(|(i, line)| (i, *line))
    }

    /// Join the non-noise lines of `range` with `\n`, dropping leading and
    /// trailing blank lines. Blank lines inside the range are kept.
    pub fn body(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);

        let kept: Vec<&str> = (start..end)
            .filter(|&i| !self.is_noise(i))
            .filter_map(|i| self.line(i))
            .collect();

        trim_blank_lines(&kept.join("\n"))
    }

    /// The whole document with noise removed
    pub fn filtered_text(&self) -> String {
        self.body(0..self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tables::NOISE_KEYWORDS;

    fn filter() -> NoiseFilter {
        NoiseFilter::new(NOISE_KEYWORDS)
    }

    #[test]
    fn test_lines_and_noise() {
        let filter = filter();
        let doc = Document::new("一\r\n打包下载\n\n二", &filter);
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.line(0), Some("一"));
        assert!(doc.is_noise(1));
        assert!(!doc.is_noise(2));
        assert_eq!(doc.noise_count(), 1);
        assert!(!doc.is_noise(99));
    }

    #[test]
    fn test_body_trims_blank_edges_and_skips_noise() {
        let filter = filter();
        let text = "\n\n　　第一段\n免费下载全本\n\n　　第二段\n\n";
        let doc = Document::new(text, &filter);
        assert_eq!(doc.body(0..doc.len()), "　　第一段\n\n　　第二段");
    }

    #[test]
    fn test_body_out_of_range() {
        let filter = filter();
        let doc = Document::new("a\nb", &filter);
        assert_eq!(doc.body(1..10), "b");
        assert_eq!(doc.body(5..10), "");
    }

    #[test]
    fn test_meaningful_lines() {
        let filter = filter();
        let doc = Document::new("a\n  \n提取码 1234\nb", &filter);
        let lines: Vec<_> = doc.meaningful_lines().collect();
        assert_eq!(lines, vec![(0, "a"), (3, "b")]);
    }

    #[test]
    fn test_empty_document() {
        let filter = filter();
        let doc = Document::new("", &filter);
        assert!(doc.is_empty());
        assert_eq!(doc.filtered_text(), "");
    }
}
