//! Tests for the public API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::domain::rules::RuleSpec;
    use crate::domain::scan::LineVerdict;
    use crate::domain::validator::Rejection;

    const SENTENCE: &str = "他推开门走进雨里，心里想着明天的事。";

    /// Roughly `chars` characters of prose, one sentence per line
    fn prose(chars: usize) -> String {
        let line = format!("{SENTENCE}\n");
        let per_line = line.chars().count();
        line.repeat(chars / per_line + 1).trim_end().to_string()
    }

    #[test]
    fn test_segmenter_creation() {
        let segmenter = ChapterSegmenter::new().unwrap();
        assert_eq!(segmenter.config(), &Config::strict());
        assert_eq!(segmenter.rules().len(), 4);

        let simple = ChapterSegmenter::with_preset(Preset::Simple).unwrap();
        assert_eq!(simple.config().strategy(), Strategy::DominantPattern);
        assert_eq!(simple.config().min_chapter_chars(), 500);

        let config = Config::builder()
            .preset(Preset::Simple)
            .strategy(Strategy::RuleScan)
            .min_sentences(2)
            .build()
            .unwrap();
        let custom = ChapterSegmenter::with_config(config).unwrap();
        assert_eq!(custom.config().strategy(), Strategy::RuleScan);
        assert_eq!(custom.config().min_sentences(), 2);
    }

    #[test]
    fn test_config_presets() {
        let strict = Config::strict();
        assert_eq!(strict.strategy(), Strategy::RuleScan);
        assert_eq!(strict.min_chapter_chars(), 800);
        assert_eq!(strict.fallback_min_chars(), 2000);
        assert_eq!(strict.min_sentences(), 5);
        assert_eq!(strict.short_title_chars(), 5);

        let simple = Config::simple();
        assert_eq!(simple.strategy(), Strategy::DominantPattern);
        assert_eq!(simple.min_chapter_chars(), 500);
        assert_eq!(simple.fallback_min_chars(), 1000);
        assert_eq!(simple.min_sentences(), 0);
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(
            Config::builder().min_chapter_chars(0).build(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Config::builder()
                .min_chapter_chars(900)
                .fallback_min_chars(100)
                .build(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Config::builder()
                .custom_rule(RuleSpec::custom("", "^卷", 2, 30, true))
                .build(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Config::builder()
                .custom_rule(RuleSpec::custom("bad", "^[卷", 2, 30, true))
                .build(),
            Err(Error::InvalidPattern { .. })
        ));
        assert!(matches!(
            Config::builder().encoding("not-a-charset").build(),
            Err(Error::Configuration(_))
        ));
        assert!(Config::builder().preset_name("turbo").is_err());
    }

    #[test]
    fn test_two_chapter_boundaries() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let text = format!("第一章 开始\n{}\n第二章 继续\n{}\n", prose(2500), prose(2500));
        let output = segmenter.detect(&text);

        assert_eq!(output.len(), 2);
        assert_eq!(output.chapters[0].title, "第一章 开始");
        assert_eq!(output.chapters[1].title, "第二章 继续");
        assert_eq!(output.chapters[0].index, 1);
        assert_eq!(output.chapters[1].index, 2);
        assert!(output.chapters[0].word_count >= 2500);
        assert!(!output.chapters[0].content.contains("第二章"));
        assert_eq!(output.metadata.strategy, Strategy::RuleScan);
        assert_eq!(output.metadata.stats.candidates, 2);
        assert!(!output.metadata.stats.fallback_used);
    }

    #[test]
    fn test_short_input_yields_nothing() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let text: String = prose(60).chars().take(50).collect();
        assert!(segmenter.detect(&text).is_empty());
        assert!(segmenter.detect("").is_empty());
    }

    #[test]
    fn test_fallback_chapter() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let output = segmenter.detect(&prose(2500));

        assert_eq!(output.len(), 1);
        assert_eq!(output.chapters[0].index, 1);
        assert_eq!(output.chapters[0].title, SENTENCE);
        assert!(output.metadata.stats.fallback_used);
    }

    #[test]
    fn test_prose_line_is_not_a_heading() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let text = format!(
            "第一章 开始\n{}\n第三章 突然她需要面对这个问题\n{}\n",
            prose(1000),
            prose(1000)
        );
        let output = segmenter.detect(&text);

        assert_eq!(output.len(), 1);
        assert!(output.chapters[0]
            .content
            .contains("第三章 突然她需要面对这个问题"));
        assert_eq!(output.metadata.stats.rejected, 1);
    }

    #[test]
    fn test_ads_are_excluded() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let text = format!(
            "第一章 开始\n{}\n全集电子书打包下载 www.example.com\n{}\n第二章 免费下载\n{}\n",
            prose(1000),
            prose(1000),
            prose(1000)
        );
        let output = segmenter.detect(&text);

        assert_eq!(output.len(), 1);
        assert!(!output.chapters[0].content.contains("下载"));
        assert_eq!(output.metadata.stats.noise_lines, 2);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let text = format!("第一章 开始\n{}\n第二章 继续\n{}", prose(900), prose(900));
        assert_eq!(
            segmenter.detect(&text).chapters,
            segmenter.detect(&text).chapters
        );
    }

    #[test]
    fn test_dominant_pattern_strategy() {
        let segmenter = ChapterSegmenter::with_preset(Preset::Simple).unwrap();
        let text = format!(
            "第一章 起\n{}\n第二章 承\n{}\n第三章 转\n{}\n",
            prose(600),
            prose(600),
            prose(100)
        );
        let output = segmenter.detect(&text);

        assert_eq!(output.metadata.pattern.as_deref(), Some("chinese-ordinal"));
        assert_eq!(output.metadata.stats.candidates, 3);
        assert_eq!(output.metadata.stats.chapters_dropped, 1);
        let titles: Vec<_> = output.chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["第一章 起", "第二章 承"]);
    }

    #[test]
    fn test_custom_rule_after_builtins() {
        let config = Config::builder()
            .custom_rule(RuleSpec::custom(
                "volume",
                r"^卷[一二三四五六七八九十]+\s+\S+$",
                2,
                30,
                true,
            ))
            .build()
            .unwrap();
        let segmenter = ChapterSegmenter::with_config(config).unwrap();
        assert_eq!(segmenter.rules().len(), 5);

        let text = format!("卷一 风起\n{}\n卷二 云涌\n{}\n", prose(1000), prose(1000));
        let output = segmenter.detect(&text);
        assert_eq!(output.len(), 2);
        assert!(output.chapters[0].title.starts_with("卷一 风起"));
        assert!(output.chapters[1].title.starts_with("卷二 云涌"));
    }

    #[test]
    fn test_extra_noise_keywords() {
        let config = Config::builder()
            .extra_noise_keywords(["求月票"])
            .build()
            .unwrap();
        let segmenter = ChapterSegmenter::with_config(config).unwrap();
        let text = format!("第一章 开始\n{}\n新书求月票！\n", prose(1000));
        let output = segmenter.detect(&text);
        assert!(!output.chapters[0].content.contains("求月票"));
    }

    #[test]
    fn test_classify() {
        let segmenter = ChapterSegmenter::new().unwrap();
        assert!(segmenter.classify("百度网盘提取码 1234").is_none());
        assert!(segmenter.classify("   ").is_none());
        assert!(matches!(
            segmenter.classify("  第十二章 风雪夜归人"),
            Some(LineVerdict::Heading { ref title, .. }) if title == "第十二章 风雪夜归人"
        ));
    }

    #[test]
    fn test_classify_custom_rule_pronoun() {
        let config = Config::builder()
            .custom_rule(RuleSpec::custom("ordinal-any", r"^第\S+章", 2, 30, true))
            .build()
            .unwrap();
        let segmenter = ChapterSegmenter::with_config(config).unwrap();

        assert!(matches!(
            segmenter.classify("第他章"),
            Some(LineVerdict::Rejected { ref rule, reason: Rejection::PronounOrdinal('他') })
                if rule == "ordinal-any"
        ));
        assert!(matches!(
            segmenter.classify("第乙章"),
            Some(LineVerdict::Heading { ref title, .. }) if title == "第乙章"
        ));
    }

    #[test]
    fn test_detect_many_matches_detect() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let first = format!("第一章 开始\n{}", prose(1000));
        let second = prose(2500);
        let outputs = segmenter.detect_many(&[first.as_str(), second.as_str()]);

        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].chapters, segmenter.detect(&first).chapters);
        assert_eq!(outputs[1].chapters, segmenter.detect(&second).chapters);
    }

    #[test]
    fn test_detect_input_bytes() {
        let segmenter = ChapterSegmenter::new().unwrap();
        let text = format!("第一章 开始\n{}", prose(1000));
        let (encoded, _, _) = encoding_rs::GB18030.encode(&text);
        let output = segmenter
            .detect_input(Input::from_bytes(encoded.into_owned()))
            .unwrap();
        assert_eq!(output.chapters[0].title, "第一章 开始");
    }

    #[test]
    fn test_free_function() {
        let text = format!("第一章 开始\n{}\n第二章 继续\n{}", prose(1000), prose(1000));
        let chapters = detect_chapters(&text);
        assert_eq!(chapters.len(), 2);
        assert!(detect_chapters("太短").is_empty());
    }
}
