// Carrier graphemes and the emoji metadata collaborator.
//
// The decoder has to find the visible grapheme a payload trails. Search
// order: known catalog entries (longest first, so multi-codepoint sequences
// beat their prefixes), then regional-indicator flag pairs, then the generic
// pictograph ranges.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Emoji metadata provider: display names and lowercase keywords per
/// grapheme, plus enumeration.
pub trait EmojiCatalog {
    fn display_name(&self, glyph: &str) -> Option<&str>;
    fn keywords(&self, glyph: &str) -> &[String];
    fn glyphs(&self) -> Vec<&str>;
}

#[derive(Debug, Clone)]
pub struct EmojiEntry {
    pub glyph: String,
    pub name: String,
    pub keywords: Vec<String>,
}

/// In-memory catalog implementation.
#[derive(Debug, Default)]
pub struct EmojiIndex {
    entries: Vec<EmojiEntry>,
    by_glyph: HashMap<String, usize>,
    /// Indices ordered by descending glyph byte length for longest-match.
    longest_first: Vec<usize>,
}

impl EmojiIndex {
    pub fn new(entries: Vec<EmojiEntry>) -> Self {
        let by_glyph = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.glyph.clone(), i))
            .collect();
        let mut longest_first: Vec<usize> = (0..entries.len()).collect();
        longest_first.sort_by(|&a, &b| entries[b].glyph.len().cmp(&entries[a].glyph.len()));
        Self {
            entries,
            by_glyph,
            longest_first,
        }
    }

    pub fn display_name(&self, glyph: &str) -> Option<&str> {
        self.by_glyph
            .get(glyph)
            .map(|&i| self.entries[i].name.as_str())
    }

    pub fn keywords(&self, glyph: &str) -> &[String] {
        static EMPTY: Vec<String> = Vec::new();
        self.by_glyph
            .get(glyph)
            .map(|&i| self.entries[i].keywords.as_slice())
            .unwrap_or(EMPTY.as_slice())
    }

    pub fn glyphs(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.glyph.as_str()).collect()
    }

    fn glyphs_longest_first(&self) -> impl Iterator<Item = &str> {
        self.longest_first
            .iter()
            .map(|&i| self.entries[i].glyph.as_str())
    }

    /// The built-in catalog: the classic carrier set plus a small keyword
    /// vocabulary for Emoji Speak.
    pub fn builtin() -> &'static EmojiIndex {
        static BUILTIN: LazyLock<EmojiIndex> = LazyLock::new(|| {
            let entry = |glyph: &str, name: &str, keywords: &[&str]| EmojiEntry {
                glyph: glyph.to_string(),
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            };
            EmojiIndex::new(vec![
                entry("🐍", "SNAKE", &["snake", "serpent"]),
                entry("🐉", "DRAGON", &["dragon"]),
                entry("🦎", "LIZARD", &["lizard", "gecko"]),
                entry("🐊", "CROCODILE", &["crocodile", "croc"]),
                entry("❤️", "RED HEART", &["heart", "love", "<3"]),
                entry("☀️", "SUN", &["sun", "sunny"]),
                entry("🌞", "SUN WITH FACE", &["sunshine"]),
                entry("🌙", "CRESCENT MOON", &["moon", "night"]),
                entry("⭐", "STAR", &["star"]),
                entry("🔥", "FIRE", &["fire", "hot", "flame"]),
                entry("💧", "DROPLET", &["water", "drop"]),
                entry("🌍", "GLOBE", &["world", "earth", "globe"]),
                entry("🐶", "DOG FACE", &["dog", "puppy"]),
                entry("🐱", "CAT FACE", &["cat", "kitten"]),
                entry("😀", "GRINNING FACE", &["smile", "happy", ":)"]),
                entry("😢", "CRYING FACE", &["sad", "cry", ":("]),
                entry("👑", "CROWN", &["king", "queen", "crown"]),
                entry("🎉", "PARTY POPPER", &["party", "celebrate"]),
                entry("✅", "CHECK MARK", &["check", "yes", "done"]),
                entry("❓", "QUESTION MARK", &["question"]),
                entry("✈️", "AIRPLANE", &["plane", "fly", "travel"]),
                entry("🏠", "HOUSE", &["house", "home"]),
                entry("📚", "BOOKS", &["book", "books", "read"]),
                entry("🕐", "ONE O'CLOCK", &["clock", "time"]),
            ])
        });
        &BUILTIN
    }
}

impl EmojiCatalog for EmojiIndex {
    fn display_name(&self, glyph: &str) -> Option<&str> {
        EmojiIndex::display_name(self, glyph)
    }

    fn keywords(&self, glyph: &str) -> &[String] {
        EmojiIndex::keywords(self, glyph)
    }

    fn glyphs(&self) -> Vec<&str> {
        EmojiIndex::glyphs(self)
    }
}

// ---------------------------------------------------------------------------
// Carrier matching
// ---------------------------------------------------------------------------

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Generic pictograph/symbol ranges accepted as fallback carriers.
fn is_pictograph(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1F9FF}'
        | '\u{1FA00}'..='\u{1FAFF}'
        | '\u{2600}'..='\u{27BF}'
        | '\u{2300}'..='\u{23FF}'
        | '\u{2B50}'
        | '\u{1F004}')
}

/// Earliest carrier match: `(byte offset, matched carrier)`.
pub fn find_carrier<'t>(text: &'t str, catalog: &EmojiIndex) -> Option<(usize, &'t str)> {
    // Catalog entries, longest first at each position.
    let glyphs: Vec<&str> = catalog.glyphs_longest_first().collect();
    if !glyphs.is_empty() {
        for (i, _) in text.char_indices() {
            for glyph in &glyphs {
                if text[i..].starts_with(glyph) {
                    return Some((i, &text[i..i + glyph.len()]));
                }
            }
        }
    }

    // Flag pairs (two regional indicators).
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    for w in chars.windows(2) {
        let (i, a) = w[0];
        let (_, b) = w[1];
        if is_regional_indicator(a) && is_regional_indicator(b) {
            let end = i + a.len_utf8() + b.len_utf8();
            return Some((i, &text[i..end]));
        }
    }

    // Any single pictograph.
    for (i, c) in text.char_indices() {
        if is_pictograph(c) {
            return Some((i, &text[i..i + c.len_utf8()]));
        }
    }
    None
}

/// Cheap test used by the universal decoder before attempting a full decode.
pub fn has_carrier(text: &str, catalog: &EmojiIndex) -> bool {
    if catalog.glyphs().iter().any(|g| text.contains(g)) {
        return true;
    }
    text.chars()
        .any(|c| is_pictograph(c) || is_regional_indicator(c))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lookup() {
        let idx = EmojiIndex::builtin();
        assert_eq!(idx.display_name("🐍"), Some("SNAKE"));
        assert!(idx.keywords("🐍").iter().any(|k| k == "snake"));
        assert!(idx.display_name("xyz").is_none());
        assert!(idx.keywords("xyz").is_empty());
    }

    #[test]
    fn carrier_catalog_match_wins() {
        let idx = EmojiIndex::builtin();
        let (pos, glyph) = find_carrier("say 🐍 hi", idx).unwrap();
        assert_eq!(glyph, "🐍");
        assert_eq!(pos, 4);
    }

    #[test]
    fn carrier_longest_match_first() {
        // ❤️ is heart + VS16; the catalog match must take both codepoints.
        let idx = EmojiIndex::builtin();
        let (_, glyph) = find_carrier("x ❤️ y", idx).unwrap();
        assert_eq!(glyph, "❤️");
    }

    #[test]
    fn carrier_flag_pair_fallback() {
        let idx = EmojiIndex::new(Vec::new());
        let (pos, glyph) = find_carrier("go 🇸🇪 now", &idx).unwrap();
        assert_eq!(pos, 3);
        assert_eq!(glyph.chars().count(), 2);
        assert!(glyph.chars().all(is_regional_indicator));
    }

    #[test]
    fn carrier_pictograph_fallback() {
        let idx = EmojiIndex::new(Vec::new());
        let (_, glyph) = find_carrier("watch ⌚ out", &idx).unwrap();
        assert_eq!(glyph, "⌚");
        assert!(find_carrier("no emoji here", &idx).is_none());
    }

    #[test]
    fn has_carrier_matches_finder() {
        let idx = EmojiIndex::builtin();
        assert!(has_carrier("🐍", idx));
        assert!(has_carrier("🇸🇪", idx));
        assert!(!has_carrier("plain", idx));
    }
}
