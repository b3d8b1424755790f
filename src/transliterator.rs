//! The conversion pipeline: script normalization, phrase overrides, then
//! per-character glyph lookup.

use thiserror::Error;
use tracing::warn;

use crate::glyph::{GlyphTable, PinyinFormat};
use crate::phrase::PhraseOverrideTable;
use crate::resource::ResourceError;
use crate::script::ScriptMap;
use crate::unicode::{contains_han, is_han};

/// Errors surfaced by the strict conversion path.
#[derive(Debug, Error)]
pub enum PinyinError {
    /// A Han character with no dictionary reading. Silent wrong output for
    /// phonetic data is worse than an explicit failure, so the strict path
    /// fails the whole call; use the lenient path for bulk text.
    #[error("can't convert to pinyin: `{0}`")]
    Unconvertible(char),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// What to do when a Han character has no reading.
#[derive(Clone, Copy)]
enum OnMissing<'a> {
    Fail,
    Substitute(&'a str),
}

/// Converts Chinese text to Pinyin and between script variants.
///
/// Owns the three dictionary tables; construct once and share. Reads are
/// safe to share across threads once construction completes. The
/// `merge_*_dict` methods mutate shared state and take `&mut self`: a
/// caller running multi-threaded must uphold single-writer discipline
/// around them, the table types provide no internal locking.
pub struct Transliterator {
    script: ScriptMap,
    glyphs: GlyphTable,
    phrases: PhraseOverrideTable,
}

impl Transliterator {
    /// Transliterator over the built-in dictionaries.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder for injecting caller-constructed tables.
    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    // ── conversion ──────────────────────────────────────────────────

    /// Strict conversion, no separator, tones stripped (成都 → `chengdu`).
    pub fn to_pinyin(&self, text: &str) -> Result<String, PinyinError> {
        self.to_pinyin_with(text, "", PinyinFormat::WithoutTone)
    }

    /// Strict conversion with an explicit separator and format.
    ///
    /// Normalizes to Simplified first, then scans left to right preferring
    /// the longest phrase override at each position; otherwise a Han
    /// character contributes the first formatted candidate of its glyph
    /// entry, and any other character passes through unchanged. An
    /// unmapped Han character fails the whole call.
    pub fn to_pinyin_with(
        &self,
        text: &str,
        separator: &str,
        format: PinyinFormat,
    ) -> Result<String, PinyinError> {
        self.convert(text, separator, format, OnMissing::Fail)
    }

    /// Lenient conversion: space separator, tones stripped, unmapped Han
    /// characters replaced by a space (成都 → `cheng du`).
    pub fn to_pinyin_lenient(&self, text: &str) -> String {
        self.to_pinyin_lenient_with(text, " ", " ", PinyinFormat::WithoutTone)
    }

    /// Lenient conversion with explicit separator, placeholder and format.
    ///
    /// Identical scan to [`Self::to_pinyin_with`], but an unmapped Han
    /// character emits `default_pinyin` and a `tracing` diagnostic instead
    /// of failing. Intended for bulk text where one bad character must not
    /// abort processing.
    pub fn to_pinyin_lenient_with(
        &self,
        text: &str,
        separator: &str,
        default_pinyin: &str,
        format: PinyinFormat,
    ) -> String {
        // OnMissing::Substitute never returns an error.
        self.convert(text, separator, format, OnMissing::Substitute(default_pinyin))
            .unwrap_or_default()
    }

    /// Pinyin of the first character of `text` only (成都 → `cheng`).
    pub fn first_syllable(&self, text: &str) -> String {
        let pinyin =
            self.to_pinyin_lenient_with(text, ",", " ", PinyinFormat::WithoutTone);
        pinyin.split(',').next().unwrap_or_default().to_string()
    }

    /// First letter of every syllable (成都 → `cd`), `#` marking unmapped
    /// characters.
    pub fn initials(&self, text: &str) -> String {
        self.initials_with(text, "#")
    }

    /// [`Self::initials`] with an explicit unmapped-character marker.
    ///
    /// Operates on the tokens of the whole-string phonetic result, so the
    /// letter count follows the syllable tokens, not the input characters.
    pub fn initials_with(&self, text: &str, unmapped_marker: &str) -> String {
        let pinyin =
            self.to_pinyin_lenient_with(text, ",", unmapped_marker, PinyinFormat::WithoutTone);
        pinyin
            .split(',')
            .filter_map(|token| token.chars().next())
            .collect()
    }

    fn convert(
        &self,
        text: &str,
        separator: &str,
        format: PinyinFormat,
        missing: OnMissing<'_>,
    ) -> Result<String, PinyinError> {
        let simplified = self.script.to_simplified_string(text);
        let mut out = String::with_capacity(simplified.len() * 2);
        let mut rest = simplified.as_str();

        while let Some(c) = rest.chars().next() {
            if let Some(m) = self.phrases.longest_match(rest, format) {
                for syllable in &m.syllables {
                    out.push_str(syllable);
                    out.push_str(separator);
                }
                rest = &rest[m.matched_bytes..];
                continue;
            }

            if !is_han(c) {
                out.push(c);
            } else if let Some(raw) = self.glyphs.candidates(c) {
                // Polyphone ambiguity outside a phrase resolves to the
                // dictionary-declared primary reading.
                if let Some(first) = GlyphTable::format(raw, format).first() {
                    out.push_str(first);
                }
            } else {
                match missing {
                    OnMissing::Fail => return Err(PinyinError::Unconvertible(c)),
                    OnMissing::Substitute(placeholder) => {
                        warn!(character = %c, "no pinyin reading, substituting placeholder");
                        out.push_str(placeholder);
                    }
                }
            }
            out.push_str(separator);
            rest = &rest[c.len_utf8()..];
        }

        // Every unit appended a trailing separator; trim the last one.
        if !separator.is_empty() && out.ends_with(separator) {
            out.truncate(out.len() - separator.len());
        }
        Ok(out)
    }

    // ── script & classification wrappers ────────────────────────────

    /// True iff `c` is a Han character (see [`crate::unicode::is_han`]).
    pub fn is_han_char(&self, c: char) -> bool {
        is_han(c)
    }

    /// True iff `text` contains at least one Han character.
    pub fn contains_han(&self, text: &str) -> bool {
        contains_han(text)
    }

    /// True iff `c` is a Traditional-only character.
    pub fn is_traditional(&self, c: char) -> bool {
        self.script.is_traditional(c)
    }

    pub fn to_simplified_char(&self, c: char) -> char {
        self.script.to_simplified(c)
    }

    pub fn to_traditional_char(&self, c: char) -> char {
        self.script.to_traditional(c)
    }

    /// Traditional → Simplified, unknown characters passing through.
    pub fn to_simplified(&self, text: &str) -> String {
        self.script.to_simplified_string(text)
    }

    /// Simplified → Traditional, unknown characters passing through.
    pub fn to_traditional(&self, text: &str) -> String {
        self.script.to_traditional_string(text)
    }

    /// True iff `c` has more than one recorded reading.
    pub fn has_multiple_readings(&self, c: char) -> bool {
        self.glyphs.has_multiple_readings(c)
    }

    // ── dictionary extension ────────────────────────────────────────

    /// Merge `Traditional=Simplified` lines into the live script map.
    pub fn merge_script_dict<'a, I>(&mut self, lines: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.script.merge(lines)
    }

    /// Merge `char=reading[,reading…]` lines into the live glyph table.
    pub fn merge_glyph_dict<'a, I>(&mut self, lines: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.glyphs.merge(lines)
    }

    /// Merge `phrase=syllable,…` lines into the live phrase table.
    pub fn merge_phrase_dict<'a, I>(&mut self, lines: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.phrases.merge(lines)
    }

    pub fn script_map(&self) -> &ScriptMap {
        &self.script
    }

    pub fn glyph_table(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn phrase_table(&self) -> &PhraseOverrideTable {
        &self.phrases
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Transliterator`], defaulting any table not supplied to the
/// built-in dictionary resources.
#[derive(Default)]
pub struct TransliteratorBuilder {
    script: Option<ScriptMap>,
    glyphs: Option<GlyphTable>,
    phrases: Option<PhraseOverrideTable>,
}

impl TransliteratorBuilder {
    pub fn script_map(mut self, map: ScriptMap) -> Self {
        self.script = Some(map);
        self
    }

    pub fn glyph_table(mut self, table: GlyphTable) -> Self {
        self.glyphs = Some(table);
        self
    }

    pub fn phrase_table(mut self, table: PhraseOverrideTable) -> Self {
        self.phrases = Some(table);
        self
    }

    pub fn build(self) -> Transliterator {
        Transliterator {
            script: self.script.unwrap_or_else(ScriptMap::builtin),
            glyphs: self.glyphs.unwrap_or_else(GlyphTable::builtin),
            phrases: self.phrases.unwrap_or_else(PhraseOverrideTable::builtin),
        }
    }
}
