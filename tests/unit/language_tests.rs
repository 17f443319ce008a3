/*!
 * Tests for sentence splitting and tokenization through the processor registry
 */

use encremagique::language::{self, LanguageProcessor, SegmentationOptions, Sentence};

fn processor(tag: &str) -> Box<dyn LanguageProcessor> {
    language::create_processor(tag, &SegmentationOptions::default()).unwrap()
}

/// Test that both registered languages are reported
#[test]
fn test_supported_languages_shouldListChineseAndEnglish() {
    assert_eq!(language::supported_languages(), vec!["en", "zh"]);
}

/// Test that ISO aliases resolve to the same processor
#[test]
fn test_create_processor_withAliases_shouldResolve() {
    for tag in ["zh", "ZH", "zho", "chi"] {
        assert_eq!(processor(tag).code(), "zh", "tag {}", tag);
    }
    for tag in ["en", "eng", " En "] {
        assert_eq!(processor(tag).code(), "en", "tag {}", tag);
    }
}

/// Test that unknown languages are configuration errors
#[test]
fn test_create_processor_withUnsupportedLanguage_shouldFail() {
    for tag in ["fr", "fra", "xx", ""] {
        let err = language::create_processor(tag, &SegmentationOptions::default()).err();
        assert!(
            err.as_ref().is_some_and(|e| e.is_configuration_error()),
            "tag {:?} should be rejected",
            tag
        );
    }
    assert!(!language::is_supported("fr"));
    assert!(language::is_supported("eng"));
}

/// Test that the Chinese narration splits on the clause and the full stops
#[test]
fn test_chinese_segment_withNarration_shouldKeepPunctuation() {
    let sentences = processor("zh").segment(crate::common::CHINESE_NARRATION);
    let captions: Vec<String> = sentences.iter().map(Sentence::caption_text).collect();

    assert_eq!(
        captions,
        vec!["这是一个长句子，", "需要被分割成多个小句子。", "这是第二个长句子。"]
    );
}

/// Test that sentence bodies never carry terminators
#[test]
fn test_chinese_split_sentences_shouldStripTerminators() {
    let sentences = processor("zh").split_sentences("你好！今天天气很好吗？是的。");
    assert_eq!(sentences, vec!["你好", "今天天气很好吗", "是的"]);
}

/// Test that a lower clause threshold stops short fragments from merging
#[test]
fn test_chinese_segment_withCustomThreshold_shouldChangeMerging() {
    let text = "你好，世界。";

    let merged = processor("zh").segment(text);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].caption_text(), "你好，世界。");

    let strict = language::create_processor("zh", &SegmentationOptions { clause_threshold: 3 }).unwrap();
    let captions: Vec<String> = strict.segment(text).iter().map(Sentence::caption_text).collect();
    assert_eq!(captions, vec!["你好，", "世界。"]);
}

/// Test that text without terminators is one sentence
#[test]
fn test_split_sentences_withoutTerminator_shouldReturnTrimmedInput() {
    assert_eq!(processor("en").split_sentences("  no ending here  "), vec!["no ending here"]);
    assert_eq!(processor("zh").split_sentences(" 没有结尾 "), vec!["没有结尾"]);
}

/// Test that blank text yields no sentences
#[test]
fn test_split_sentences_withBlankText_shouldReturnNothing() {
    assert!(processor("en").split_sentences(" \n\t ").is_empty());
    assert!(processor("zh").split_sentences("").is_empty());
}

/// Test that English only splits at terminators followed by whitespace
#[test]
fn test_english_split_sentences_shouldRespectBoundaries() {
    let sentences = processor("en").split_sentences("Version 2.5 is out! Really?? Yes.");
    assert_eq!(sentences, vec!["Version 2.5 is out", "Really", "Yes"]);
}

/// Test that Chinese tokens concatenate back to the sentence
#[test]
fn test_chinese_tokenize_shouldBeLossless() {
    let zh = processor("zh");
    let sentence = "需要被分割成多个小句子。";
    assert_eq!(zh.tokenize(sentence).concat(), sentence);
    assert_eq!(zh.word_separator(), "");
}

/// Test that embedded Latin words stay separated by single spaces
#[test]
fn test_chinese_tokenize_withLatinWords_shouldKeepSpaces() {
    let tokens = processor("zh").tokenize("我喜欢 Rust programming language 和 Python。");

    assert_eq!(tokens.concat(), "我喜欢 Rust programming language 和 Python。");
    assert!(tokens.contains(&"programming".to_string()));
    assert_eq!(tokens.iter().filter(|t| t.as_str() == " ").count(), 5);
}

/// Test that English tokens are whitespace separated words
#[test]
fn test_english_tokenize_shouldSplitOnWhitespace() {
    let en = processor("en");
    assert_eq!(en.tokenize("multiple   ones."), vec!["multiple", "ones."]);
    assert_eq!(en.word_separator(), " ");
    assert_eq!(en.default_max_line_length(), 20);
}
