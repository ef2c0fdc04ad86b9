//! Per-line heading scan
//!
//! Every meaningful line (not noise, not blank) is trimmed and tested
//! against the rules in priority order. The first rule whose shape matches
//! owns the line: if its validator rejects the line, later rules are not
//! consulted.

use crate::domain::document::Document;
use crate::domain::rules::TitleRule;
use crate::domain::validator::{Rejection, TitleValidator};

/// A validated heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Formatted title
    pub title: String,
    /// Name of the rule that matched
    pub rule: String,
    /// Line index of the heading
    pub line: usize,
}

/// Outcome of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineVerdict {
    /// No rule shape matched
    Body,
    /// A rule matched and its validator accepted the line
    Heading { title: String, rule: String },
    /// A rule matched but its validator rejected the line
    Rejected { rule: String, reason: Rejection },
}

/// Result of scanning a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Accepted headings in document order
    pub candidates: Vec<Candidate>,
    /// Lines whose shape matched but failed validation
    pub rejected: usize,
    /// Meaningful lines examined
    pub lines_scanned: usize,
}

/// Classify a single trimmed line
pub fn classify_line(line: &str, rules: &[TitleRule], validator: &TitleValidator) -> LineVerdict {
    for rule in rules {
        let Some(shape) = rule.match_shape(line) else {
            continue;
        };

        let title = rule.format_title(line, &shape);
        return match validator.validate(rule, line, &shape, &title) {
            Ok(()) => LineVerdict::Heading {
                title,
                rule: rule.name().to_string(),
            },
            Err(reason) => LineVerdict::Rejected {
                rule: rule.name().to_string(),
                reason,
            },
        };
    }

    LineVerdict::Body
}

/// Scan a document for heading candidates
pub fn scan_candidates(
    doc: &Document<'_>,
    rules: &[TitleRule],
    validator: &TitleValidator,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for (index, raw) in doc.meaningful_lines() {
        outcome.lines_scanned += 1;
        let line = raw.trim();

        match classify_line(line, rules, validator) {
            LineVerdict::Body => {}
            LineVerdict::Heading { title, rule } => {
                log::trace!("line {index}: heading '{title}' ({rule})");
                outcome.candidates.push(Candidate {
                    title,
                    rule,
                    line: index,
                });
            }
            LineVerdict::Rejected { rule, reason } => {
                log::debug!("line {index}: rejected '{line}' for rule {rule}: {reason}");
                outcome.rejected += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::noise::NoiseFilter;
    use crate::domain::rules::{builtin_rules, RuleSpec};
    use crate::domain::tables::{NOISE_KEYWORDS, PROSE_BLACKLIST};

    fn rules() -> Vec<TitleRule> {
        builtin_rules()
            .into_iter()
            .map(|spec| TitleRule::compile(spec).unwrap())
            .collect()
    }

    fn validator() -> TitleValidator {
        TitleValidator::new(PROSE_BLACKLIST.iter().copied())
    }

    #[test]
    fn test_classify_heading() {
        let verdict = classify_line("第一章 开始", &rules(), &validator());
        assert_eq!(
            verdict,
            LineVerdict::Heading {
                title: "第一章 开始".to_string(),
                rule: "chinese-numeral".to_string()
            }
        );
    }

    #[test]
    fn test_custom_rule_rejects_pronoun_after_ordinal() {
        let mut rules = rules();
        let custom = RuleSpec::custom("ordinal-any", r"^第\S+章", 2, 30, true);
        rules.push(TitleRule::compile(custom).unwrap());

        assert_eq!(
            classify_line("第她章", &rules, &validator()),
            LineVerdict::Rejected {
                rule: "ordinal-any".to_string(),
                reason: Rejection::PronounOrdinal('她'),
            }
        );
        assert_eq!(
            classify_line("第甲章", &rules, &validator()),
            LineVerdict::Heading {
                title: "第甲章".to_string(),
                rule: "ordinal-any".to_string()
            }
        );
    }

    #[test]
    fn test_classify_body() {
        assert_eq!(
            classify_line("他推开门，外面下着雨。", &rules(), &validator()),
            LineVerdict::Body
        );
    }

    #[test]
    fn test_first_matching_rule_owns_the_line() {
        let verdict = classify_line("第三章 突然她需要面对这个问题", &rules(), &validator());
        assert!(matches!(
            verdict,
            LineVerdict::Rejected { ref rule, reason: Rejection::Blacklisted(_) } if rule == "chinese-numeral"
        ));
    }

    #[test]
    fn test_scan_skips_noise_and_blank_lines() {
        let filter = NoiseFilter::new(NOISE_KEYWORDS);
        let text = "第一章 免费下载\n\n第二章 归来\n正文。\n   第3章 再会  \n";
        let doc = Document::new(text, &filter);
        let outcome = scan_candidates(&doc, &rules(), &validator());

        assert_eq!(outcome.lines_scanned, 3);
        assert_eq!(outcome.rejected, 0);
        let found: Vec<_> = outcome
            .candidates
            .iter()
            .map(|c| (c.title.as_str(), c.line))
            .collect();
        assert_eq!(found, vec![("第二章 归来", 2), ("第3章 再会", 4)]);
    }

    #[test]
    fn test_scan_counts_rejections() {
        let filter = NoiseFilter::new(NOISE_KEYWORDS);
        let text = "第一章，他说。\n第二章 好\n";
        let doc = Document::new(text, &filter);
        let outcome = scan_candidates(&doc, &rules(), &validator());
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.candidates.len(), 1);
    }
}
