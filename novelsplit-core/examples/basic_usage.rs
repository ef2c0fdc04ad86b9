//! Example of using the segmenter API

use novelsplit_core::{
    detect_chapters, render_markdown, ChapterSegmenter, Config, Input, Preset, RuleSpec,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let body = "他推开门走进雨里，心里想着明天的事。\n".repeat(60);

    // Example 1: Default configuration
    println!("=== Example 1: Default Configuration ===");
    let text = format!(
        "全集电子书打包下载\n第一章 开始\n{body}第二章中他说：我懂了。\n{body}第二章 继续\n{body}"
    );
    for chapter in detect_chapters(&text) {
        println!("  {}. {} ({} chars)", chapter.index, chapter.title, chapter.word_count);
    }

    // Example 2: Simple preset with statistics
    println!("\n=== Example 2: Simple Preset ===");
    let simple = ChapterSegmenter::with_preset(Preset::Simple)?;
    let output = simple.detect_input(Input::from_text(text.clone()))?;
    println!("Pattern: {:?}", output.metadata.pattern);
    println!("Stats: {:?}", output.metadata.stats);

    // Example 3: Custom heading rule
    println!("\n=== Example 3: Custom Rule ===");
    let config = Config::builder()
        .min_chapter_chars(500)
        .custom_rule(RuleSpec::custom(
            "volume",
            r"^卷[一二三四五六七八九十]+\s+\S+$",
            2,
            30,
            true,
        ))
        .build()?;
    let segmenter = ChapterSegmenter::with_config(config)?;
    let volumes = format!("卷一 风起青萍\n{body}卷二 云涌四方\n{body}");
    let output = segmenter.detect(&volumes);

    if let Some(first) = output.chapter(1) {
        print!("{}", render_markdown(first));
    }

    Ok(())
}
