//! Multi-character phrase overrides and longest-match scanning.
//!
//! Phrases carry the combined reading of sequences whose pronunciation
//! differs from character-by-character lookup (polyphones in context,
//! e.g. 银行 reads `yín háng`, not the per-character first reading
//! `yín xíng`). A phrase match always wins over single-character lookup.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::glyph::{CANDIDATE_SEPARATOR, GlyphTable, PinyinFormat};
use crate::resource::{self, ResourceError};

static PHRASE_DICT: &str = include_str!("data/phrase.txt");

/// Shortest key the table will ever match.
pub const MIN_PHRASE_CHARS: usize = 2;

/// Result of a successful longest-match scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Bytes consumed from the scanned text.
    pub matched_bytes: usize,
    /// Characters consumed (scan positions to advance by).
    pub matched_chars: usize,
    /// One formatted syllable per matched character.
    pub syllables: Vec<String>,
}

/// Multi-character Han sequence → `,`-joined tone-marked readings, one
/// syllable per character.
#[derive(Debug)]
pub struct PhraseOverrideTable {
    overrides: HashMap<String, String>,
    // Longest key currently present, in characters. Maintained on merge so
    // the scan window never grows with dictionary size.
    max_phrase_chars: usize,
}

impl PhraseOverrideTable {
    /// The built-in override table compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_lines(PHRASE_DICT.lines())
            .expect("built-in phrase dictionary is well-formed - this is a bug")
    }

    /// Build a table from raw `phrase=syllable,syllable…` lines.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self {
            overrides: HashMap::new(),
            max_phrase_chars: 0,
        };
        table.merge(lines)?;
        Ok(table)
    }

    /// Merge raw lines into the live table; additive, last-write-wins.
    ///
    /// Rejects keys shorter than [`MIN_PHRASE_CHARS`] and values whose
    /// syllable count does not equal the key's character count.
    pub fn merge<'a, I>(&mut self, lines: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for raw in lines {
            let Some((key, value)) = resource::parse_line(raw)? else {
                continue;
            };
            let chars = key.chars().count();
            if chars < MIN_PHRASE_CHARS {
                return Err(ResourceError::InvalidEntry {
                    line: raw.trim().to_string(),
                    reason: "phrase keys are at least two characters",
                });
            }
            if value.split(CANDIDATE_SEPARATOR).count() != chars {
                return Err(ResourceError::InvalidEntry {
                    line: raw.trim().to_string(),
                    reason: "phrase values carry one syllable per character",
                });
            }
            self.overrides.insert(key.to_string(), value.to_string());
            self.max_phrase_chars = self.max_phrase_chars.max(chars);
        }
        Ok(())
    }

    /// Longest phrase starting at the beginning of `rest`, formatted.
    ///
    /// Candidate lengths are tried descending from
    /// `min(remaining chars, max key length)` down to [`MIN_PHRASE_CHARS`],
    /// returning on the first hit, so the longest key always wins. Each
    /// syllable of the value is formatted and only the first formatted
    /// candidate is taken: the dictionary-declared reading is the primary
    /// one. Text shorter than [`MIN_PHRASE_CHARS`] never matches.
    pub fn longest_match(&self, rest: &str, format: PinyinFormat) -> Option<PhraseMatch> {
        if self.max_phrase_chars < MIN_PHRASE_CHARS {
            return None;
        }

        // Byte offset past each of the first `max_phrase_chars` characters.
        let mut ends: SmallVec<[usize; 8]> = SmallVec::new();
        for (i, c) in rest.char_indices() {
            if ends.len() == self.max_phrase_chars {
                break;
            }
            ends.push(i + c.len_utf8());
        }
        if ends.len() < MIN_PHRASE_CHARS {
            return None;
        }

        for chars in (MIN_PHRASE_CHARS..=ends.len()).rev() {
            let end = ends[chars - 1];
            let Some(raw) = self.overrides.get(&rest[..end]) else {
                continue;
            };
            let syllables = raw
                .split(CANDIDATE_SEPARATOR)
                .map(|syllable| {
                    GlyphTable::format(syllable, format)
                        .into_iter()
                        .next()
                        .unwrap_or_default()
                })
                .collect();
            return Some(PhraseMatch {
                matched_bytes: end,
                matched_chars: chars,
                syllables,
            });
        }
        None
    }

    /// Number of phrase entries.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
