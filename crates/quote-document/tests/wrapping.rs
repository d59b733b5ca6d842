//! Property tests for measured line splitting.

use proptest::prelude::*;
use quote_document::metrics::{split_text_to_size, text_width};
use quote_document::FontStyle;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9àèéìòù,.]{1,12}", 0..60)
}

// Widths start above the widest generated word, so no word is ever split.
proptest! {
    #[test]
    fn lines_fit_and_keep_every_word(words in words(), width in 50.0f32..180.0) {
        let text = words.join(" ");
        let lines = split_text_to_size(&text, FontStyle::Normal, 12.0, width);

        prop_assert!(!lines.is_empty());
        for line in &lines {
            prop_assert!(text_width(line, FontStyle::Normal, 12.0) <= width + 1e-3);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(rejoined, original);
    }

    #[test]
    fn bold_never_needs_fewer_lines(words in words(), width in 50.0f32..180.0) {
        let text = words.join(" ");
        let normal = split_text_to_size(&text, FontStyle::Normal, 12.0, width);
        let bold = split_text_to_size(&text, FontStyle::Bold, 12.0, width);
        prop_assert!(bold.len() >= normal.len());
    }
}
