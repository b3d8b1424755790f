//! Traditional ⇄ Simplified character mapping.

use std::collections::HashMap;

use crate::resource::{self, ResourceError};

static SCRIPT_DICT: &str = include_str!("data/script.txt");

const SINGLE_CHAR_REASON: &str = "script entries map a single character to a single character";

/// Directional Traditional→Simplified map with a companion reverse index.
///
/// Both per-character lookups are total: a character absent from the map
/// passes through unchanged, so script conversion never fails. The reverse
/// index is built at construction and maintained on every merge, trading
/// memory for O(1) `to_traditional`. The forward mapping is not injective
/// (e.g. 發 and 髮 both simplify to 发); the reverse index keeps the
/// first-seen Traditional key for each Simplified value.
#[derive(Debug)]
pub struct ScriptMap {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl ScriptMap {
    /// The built-in mapping compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_lines(SCRIPT_DICT.lines())
            .expect("built-in script dictionary is well-formed - this is a bug")
    }

    /// Build a map from raw `Traditional=Simplified` lines.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        };
        map.merge(lines)?;
        Ok(map)
    }

    /// Merge raw `Traditional=Simplified` lines into the live map.
    ///
    /// Additive, last-write-wins on conflicting keys. Entries are applied
    /// in line order, which is what gives the reverse index its
    /// first-seen-wins behaviour for non-injective values.
    pub fn merge<'a, I>(&mut self, lines: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for raw in lines {
            let Some((key, value)) = resource::parse_line(raw)? else {
                continue;
            };
            let traditional = resource::single_char(key, raw, SINGLE_CHAR_REASON)?;
            let simplified = resource::single_char(value, raw, SINGLE_CHAR_REASON)?;
            self.insert(traditional, simplified);
        }
        Ok(())
    }

    fn insert(&mut self, traditional: char, simplified: char) {
        if let Some(old) = self.forward.insert(traditional, simplified) {
            // The overwritten pair may own the reverse slot; re-point it to
            // any surviving key for that value, or drop it.
            if self.reverse.get(&old) == Some(&traditional) {
                self.reverse.remove(&old);
                if let Some((&t, _)) = self.forward.iter().find(|&(_, &s)| s == old) {
                    self.reverse.insert(old, t);
                }
            }
        }
        self.reverse.entry(simplified).or_insert(traditional);
    }

    /// True iff `c` is a key in the Traditional→Simplified mapping.
    #[inline]
    pub fn is_traditional(&self, c: char) -> bool {
        self.forward.contains_key(&c)
    }

    /// Simplified form of `c`, or `c` itself when unmapped.
    #[inline]
    pub fn to_simplified(&self, c: char) -> char {
        self.forward.get(&c).copied().unwrap_or(c)
    }

    /// Traditional form of `c` via the reverse index, or `c` itself when
    /// no Traditional key maps to it.
    #[inline]
    pub fn to_traditional(&self, c: char) -> char {
        self.reverse.get(&c).copied().unwrap_or(c)
    }

    /// Apply [`Self::to_simplified`] to every scalar value of `text`.
    pub fn to_simplified_string(&self, text: &str) -> String {
        text.chars().map(|c| self.to_simplified(c)).collect()
    }

    /// Apply [`Self::to_traditional`] to every scalar value of `text`.
    pub fn to_traditional_string(&self, text: &str) -> String {
        text.chars().map(|c| self.to_traditional(c)).collect()
    }

    /// Number of Traditional→Simplified pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
