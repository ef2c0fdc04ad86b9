//! Built-in keyword tables
//!
//! These are the defaults behind [`Config::strict`](crate::Config::strict)
//! and [`Config::simple`](crate::Config::simple). Configuration files may
//! extend both lists but never shrink them.

/// Promotional / marketplace phrases found in pirated TXT novels.
///
/// Matched case-insensitively as substrings anywhere in a line.
pub const NOISE_KEYWORDS: &[&str] = &[
    "打包下载",
    "免费下载",
    "全集电子书",
    "电子书下载",
    "网盘链接",
    "百度网盘",
    "提取码",
    "联系微信",
    "联系qq",
    "加微信",
    "加qq群",
    "qq群",
    "微信公众号",
    "关注公众号",
    "txt下载",
    "txt全集",
    "手机阅读",
    "更多精彩",
    "最新章节请",
    "本书由",
    "整理制作",
    "请记住本站",
    "本站地址",
    "http://",
    "https://",
    "www.",
];

/// Action and reasoning vocabulary that marks a "heading" as prose
pub const PROSE_BLACKLIST: &[&str] = &[
    "需要", "应该", "必须", "因为", "所以", "但是", "如果", "虽然", "可是", "然而", "于是", "觉得",
];

/// Characters that never follow `第` in a real chapter marker
pub const PRONOUNS_AFTER_ORDINAL: &[char] = &['她', '他', '它', '你', '我'];

/// Placeholder title for a fallback chapter without a meaningful first line
pub const FALLBACK_TITLE: &str = "全文";

/// Minimum trimmed length for a line to serve as the fallback title
pub const FALLBACK_TITLE_MIN_CHARS: usize = 10;

/// Longest title the segmenter will emit
pub const MAX_TITLE_CHARS: usize = 30;

/// Longest excerpt appended to a short title
pub const TITLE_EXCERPT_CHARS: usize = 12;
