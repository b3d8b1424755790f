pub mod glyph;
pub mod phrase;
pub mod resource;
pub mod script;
pub mod transliterator;
pub mod unicode;

pub use glyph::{GlyphTable, PinyinFormat};
pub use phrase::{PhraseMatch, PhraseOverrideTable};
pub use resource::ResourceError;
pub use script::ScriptMap;
pub use transliterator::{PinyinError, Transliterator, TransliteratorBuilder};
pub use unicode::{contains_han, is_han};
