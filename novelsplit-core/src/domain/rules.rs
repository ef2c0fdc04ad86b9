//! Chapter heading rules
//!
//! A rule pairs a shape regex with the bounds its validator enforces and a
//! style that turns the matched line into a display title. Shapes are
//! matched against the trimmed line and expose two optional named groups:
//! `marker` (the `第十二章` / `Chapter 12` part) and `label` (the free text
//! after it).

use regex::{Captures, Regex};

use crate::domain::text::{collapse_whitespace, strip_whitespace};

/// How a matched line is turned into a title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// `marker` with whitespace removed, then a space and the label
    Ordinal,
    /// `Chapter N` with a canonical keyword, then a space and the label
    English,
    /// The whole line, whitespace-collapsed
    Verbatim,
}

/// Uncompiled rule definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Rule name used in logs and statistics
    pub name: String,
    /// Shape regex
    pub pattern: String,
    /// Minimum formatted title length in chars
    pub min_chars: usize,
    /// Maximum formatted title length in chars
    pub max_chars: usize,
    /// Maximum label length in chars (None = unbounded)
    pub max_label_chars: Option<usize>,
    /// Whether the line must contain a CJK character
    pub require_cjk: bool,
    /// Title formatter
    pub style: TitleStyle,
}

impl RuleSpec {
    /// Create a user-defined rule with verbatim titles
    pub fn custom(
        name: impl Into<String>,
        pattern: impl Into<String>,
        min_chars: usize,
        max_chars: usize,
        require_cjk: bool,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            min_chars,
            max_chars,
            max_label_chars: None,
            require_cjk,
            style: TitleStyle::Verbatim,
        }
    }
}

/// The built-in rules in priority order
pub fn builtin_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec {
            name: "chinese-numeral".into(),
            pattern: r"^(?P<marker>第[零〇一二两三四五六七八九十百千万]+[章回节篇卷集部])(?P<label>.*)$"
                .into(),
            min_chars: 3,
            max_chars: 30,
            max_label_chars: Some(20),
            require_cjk: true,
            style: TitleStyle::Ordinal,
        },
        RuleSpec {
            name: "arabic-numeral".into(),
            pattern: r"^(?P<marker>第\s*[0-9０-９]+\s*[章回节篇卷集部])(?P<label>.*)$".into(),
            min_chars: 3,
            max_chars: 30,
            max_label_chars: Some(20),
            require_cjk: true,
            style: TitleStyle::Ordinal,
        },
        RuleSpec {
            name: "english".into(),
            pattern: r"(?i)^(?P<marker>chapter\s+(?:[0-9]+|[ivxlcdm]+\b))(?P<label>.*)$".into(),
            min_chars: 9,
            max_chars: 40,
            max_label_chars: Some(30),
            require_cjk: false,
            style: TitleStyle::English,
        },
        RuleSpec {
            name: "enumerated".into(),
            pattern: r"^(?P<marker>[0-9]{1,4}[.、．])\s*(?P<label>\p{Han}{1,15})$".into(),
            min_chars: 3,
            max_chars: 20,
            max_label_chars: Some(15),
            require_cjk: true,
            style: TitleStyle::Verbatim,
        },
    ]
}

/// A compiled heading rule
#[derive(Debug, Clone)]
pub struct TitleRule {
    spec: RuleSpec,
    regex: Regex,
}

/// Parts of a line matched by a rule's shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMatch<'a> {
    /// Byte offset of the match within the trimmed line
    pub start: usize,
    /// The `marker` group, if the rule defines one
    pub marker: Option<&'a str>,
    /// Text the validator checks for punctuation
    pub label: &'a str,
}

impl TitleRule {
    /// Compile a rule definition
    pub fn compile(spec: RuleSpec) -> Result<Self, regex::Error> {
        let regex = Regex::new(&spec.pattern)?;
        Ok(Self { spec, regex })
    }

    /// Rule name
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Rule definition
    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    /// Match the shape against a trimmed line
    pub fn match_shape<'a>(&self, line: &'a str) -> Option<ShapeMatch<'a>> {
        let caps = self.regex.captures(line)?;
        let whole = caps.get(0)?;
        let marker = caps.name("marker").map(|m| m.as_str());
        let label = Self::label_text(&caps, line);

        Some(ShapeMatch {
            start: whole.start(),
            marker,
            label,
        })
    }

    /// The label is the `label` group, else everything after `marker`,
    /// else the whole line.
    fn label_text<'a>(caps: &Captures<'a>, line: &'a str) -> &'a str {
        if let Some(label) = caps.name("label") {
            return label.as_str();
        }
        match caps.name("marker") {
            Some(marker) => line.get(marker.end()..).unwrap_or_default(),
            None => line,
        }
    }

    /// Format the display title for a matched line
    pub fn format_title(&self, line: &str, shape: &ShapeMatch<'_>) -> String {
        let label = collapse_whitespace(shape.label);

        let head = match (self.spec.style, shape.marker) {
            (TitleStyle::Ordinal, Some(marker)) => strip_whitespace(marker),
            (TitleStyle::English, Some(marker)) => Self::english_marker(marker),
            _ => return collapse_whitespace(line),
        };

        if label.is_empty() {
            head
        } else {
            format!("{head} {label}")
        }
    }

    fn english_marker(marker: &str) -> String {
        let number = marker.split_whitespace().nth(1).unwrap_or_default();
        if number.chars().all(|c| c.is_ascii_digit()) {
            format!("Chapter {number}")
        } else {
            format!("Chapter {}", number.to_uppercase())
        }
    }
}
