//! Single-character readings and tone-format conversion.

use std::collections::HashMap;

use phf::phf_map;
use smallvec::SmallVec;

use crate::resource::{self, ResourceError};

static GLYPH_DICT: &str = include_str!("data/glyph.txt");

/// Separator between candidate readings inside a dictionary value, and
/// between per-character syllables of a phrase value.
pub const CANDIDATE_SEPARATOR: char = ',';

/// Dictionary tombstone: a character recorded with no usable reading.
const NO_READING: &str = "null";

const SINGLE_CHAR_REASON: &str = "glyph entries are keyed by a single character";

/// Output shape for Pinyin syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinyinFormat {
    /// Tone-marked syllables exactly as stored (`zhōng`).
    WithToneMark,
    /// Unmarked syllable plus tone digit 1–5 (`zhong1`); neutral tone is 5.
    WithToneNumber,
    /// Unmarked syllable (`zhong`); `ü` becomes `v`.
    #[default]
    WithoutTone,
}

/// Fixed tone table: marked vowel → (base vowel, tone digit).
///
/// Four tone variants per base, bases ordered `a e i o u v`. This is a
/// lookup table, not a linguistic rule; the groupings are load-bearing and
/// any change corrupts tone digits.
static TONE_VOWELS: phf::Map<char, (char, u8)> = phf_map! {
    'ā' => ('a', 1), 'á' => ('a', 2), 'ǎ' => ('a', 3), 'à' => ('a', 4),
    'ē' => ('e', 1), 'é' => ('e', 2), 'ě' => ('e', 3), 'è' => ('e', 4),
    'ī' => ('i', 1), 'í' => ('i', 2), 'ǐ' => ('i', 3), 'ì' => ('i', 4),
    'ō' => ('o', 1), 'ó' => ('o', 2), 'ǒ' => ('o', 3), 'ò' => ('o', 4),
    'ū' => ('u', 1), 'ú' => ('u', 2), 'ǔ' => ('u', 3), 'ù' => ('u', 4),
    'ǖ' => ('v', 1), 'ǘ' => ('v', 2), 'ǚ' => ('v', 3), 'ǜ' => ('v', 4),
};

/// Formatted candidate list. One or two entries in the overwhelmingly
/// common case, so keep them inline.
pub type Candidates = SmallVec<[String; 2]>;

/// Single Han character → raw tone-marked candidate readings.
#[derive(Debug)]
pub struct GlyphTable {
    readings: HashMap<char, String>,
}

impl GlyphTable {
    /// The built-in reading table compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_lines(GLYPH_DICT.lines())
            .expect("built-in glyph dictionary is well-formed - this is a bug")
    }

    /// Build a table from raw `char=reading[,reading…]` lines.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self {
            readings: HashMap::new(),
        };
        table.merge(lines)?;
        Ok(table)
    }

    /// Merge raw lines into the live table; additive, last-write-wins.
    pub fn merge<'a, I>(&mut self, lines: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for raw in lines {
            let Some((key, value)) = resource::parse_line(raw)? else {
                continue;
            };
            let c = resource::single_char(key, raw, SINGLE_CHAR_REASON)?;
            self.readings.insert(c, value.to_string());
        }
        Ok(())
    }

    /// Raw tone-marked candidates for `c`, in dictionary order.
    ///
    /// `None` for unmapped characters and for the `null` tombstone.
    pub fn candidates(&self, c: char) -> Option<&str> {
        match self.readings.get(&c) {
            Some(raw) if raw != NO_READING => Some(raw.as_str()),
            _ => None,
        }
    }

    /// True iff `c` has more than one recorded reading.
    pub fn has_multiple_readings(&self, c: char) -> bool {
        self.candidates(c)
            .is_some_and(|raw| raw.contains(CANDIDATE_SEPARATOR))
    }

    /// Convert a raw `,`-joined tone-marked candidate string into `format`.
    ///
    /// `WithoutTone` deduplicates candidates that become identical after
    /// stripping (two tonal variants of one syllable collapse to one),
    /// preserving first-seen order.
    pub fn format(raw: &str, format: PinyinFormat) -> Candidates {
        match format {
            PinyinFormat::WithToneMark => raw
                .split(CANDIDATE_SEPARATOR)
                .map(str::to_string)
                .collect(),
            PinyinFormat::WithToneNumber => raw
                .split(CANDIDATE_SEPARATOR)
                .map(number_tone)
                .collect(),
            PinyinFormat::WithoutTone => {
                let mut out = Candidates::new();
                for syllable in raw.split(CANDIDATE_SEPARATOR) {
                    let stripped = strip_tone(syllable);
                    if !out.contains(&stripped) {
                        out.push(stripped);
                    }
                }
                out
            }
        }
    }

    /// Number of characters with a recorded entry (tombstones included).
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Replace every tone-marked vowel with its unmarked base; `ü` becomes `v`.
fn strip_tone(syllable: &str) -> String {
    syllable
        .chars()
        .map(|c| match TONE_VOWELS.get(&c) {
            Some(&(base, _)) => base,
            None if c == 'ü' => 'v',
            None => c,
        })
        .collect()
}

/// Replace the tone-marked vowel with its base and append the tone digit;
/// a syllable without any marked vowel is neutral tone, digit `5`.
fn number_tone(syllable: &str) -> String {
    let mut out = String::with_capacity(syllable.len() + 1);
    // A well-formed syllable carries at most one marked vowel, so a single
    // forward pass finds the same vowel as the original right-to-left scan.
    let mut tone = 5u8;
    for c in syllable.chars() {
        match TONE_VOWELS.get(&c) {
            Some(&(base, t)) => {
                tone = t;
                out.push(base);
            }
            None if c == 'ü' => out.push('v'),
            None => out.push(c),
        }
    }
    out.push((b'0' + tone) as char);
    out
}
