pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod preprocess;
pub mod reader;
pub mod sentence;
pub mod tagger;
pub mod transliterate;

pub use config::{load_config, NormalizerConfig, TaggerBackend, UnknownTokenPolicy};
pub use dictionary::Dictionary;
pub use error::InitError;
pub use normalizer::{normalize, normalize_batch, NormalizerContext, NormalizerOptions};
pub use tagger::{MorphologicalTagger, Morpheme, PosTag};
pub use transliterate::Transliterator;
