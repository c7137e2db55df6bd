// Shared text helpers: lossy UTF-8 reconstruction, word segmentation, and
// grapheme-cluster iteration.
//
// Byte-oriented codecs rebuild strings from decoded byte vectors; the helpers
// here centralize the recovery policy (strict first, replacement on failure)
// so no transform ever surfaces a UTF-8 error to its caller.

use unicode_segmentation::UnicodeSegmentation;

/// Rebuild a string from decoded bytes: strict UTF-8 first, replacement
/// characters on failure.
pub fn lossy_utf8(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// A run of word characters (`[A-Za-z0-9]`) or a run of everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_word: bool,
}

/// Split into alternating word / non-word segments, preserving punctuation
/// and whitespace verbatim. Concatenating the segments yields the input.
pub fn word_segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_word = None::<bool>;

    for (idx, ch) in text.char_indices() {
        let word = ch.is_ascii_alphanumeric();
        match in_word {
            Some(w) if w == word => {}
            Some(w) => {
                out.push(Segment {
                    text: &text[start..idx],
                    is_word: w,
                });
                start = idx;
                in_word = Some(word);
            }
            None => in_word = Some(word),
        }
    }
    if let Some(w) = in_word {
        out.push(Segment {
            text: &text[start..],
            is_word: w,
        });
    }
    out
}

/// Split on runs of non-alphanumeric characters, dropping empty pieces.
/// This is the tokenizer behind the case-style transforms.
pub fn ascii_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect()
}

/// User-perceived characters (grapheme clusters). Keeps multi-codepoint
/// emoji intact for combining-mark transforms.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// True if the string contains at least `n` consecutive ASCII alphanumeric
/// or space characters. The universal decoder's weak plausibility filter.
pub fn has_alnum_run(text: &str, n: usize) -> bool {
    let mut run = 0;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == ' ' {
            run += 1;
            if run >= n {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// True if anything remains after stripping control characters and
/// whitespace. Candidates failing this are discarded by the decoder.
pub fn has_visible_content(text: &str) -> bool {
    text.chars()
        .any(|c| !c.is_control() && !c.is_whitespace() && !('\u{7F}'..='\u{9F}').contains(&c))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_utf8_strict_path() {
        assert_eq!(lossy_utf8("héllo 🌞".as_bytes().to_vec()), "héllo 🌞");
    }

    #[test]
    fn lossy_utf8_replacement_path() {
        let s = lossy_utf8(vec![0x68, 0x69, 0xFF]);
        assert!(s.starts_with("hi"));
        assert!(s.contains('\u{FFFD}'));
    }

    #[test]
    fn word_segments_roundtrip() {
        let input = "Hello, world! 42";
        let segs = word_segments(input);
        let rebuilt: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, input);
        assert_eq!(
            segs.iter().filter(|s| s.is_word).map(|s| s.text).collect::<Vec<_>>(),
            vec!["Hello", "world", "42"]
        );
    }

    #[test]
    fn ascii_words_drops_separators() {
        assert_eq!(ascii_words("foo--bar_baz 12"), vec!["foo", "bar", "baz", "12"]);
        assert!(ascii_words("...").is_empty());
    }

    #[test]
    fn graphemes_keep_emoji_clusters() {
        let g = graphemes("a👍🏽b");
        assert_eq!(g.len(), 3);
        assert_eq!(g[1], "👍🏽");
    }

    #[test]
    fn alnum_run_filter() {
        assert!(has_alnum_run("xx abc", 3));
        assert!(!has_alnum_run("a-b-c", 3));
    }

    #[test]
    fn visible_content_filter() {
        assert!(has_visible_content(" a "));
        assert!(!has_visible_content(" \t\n\u{0001}\u{0085}"));
    }
}
