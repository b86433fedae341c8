//! # Common Types

use crate::errors::{CorpusError, CorpusResult};

/// Integer id assigned to a token.
pub type TokenId = u32;

/// A logical partition of the corpus.
///
/// Parses from `"train"`, `"validation"`, `"val"` and `"test"`; displays as
/// `"train"`, `"validation"` and `"test"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Split {
    /// The training split; the vocabulary is built from it.
    #[strum(serialize = "train")]
    Train,

    /// The validation split.
    #[strum(to_string = "validation", serialize = "val")]
    Validation,

    /// The test split.
    #[strum(serialize = "test")]
    Test,
}

impl Split {
    /// Parse a split name, accepting the `"val"` alias.
    ///
    /// # Errors
    /// [`CorpusError::InvalidSplit`] for any other name.
    pub fn parse(name: &str) -> CorpusResult<Self> {
        name.parse()
            .map_err(|_| CorpusError::InvalidSplit(name.to_string()))
    }

    /// The short name used in cache file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "valid",
            Split::Test => "test",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Split::parse("train").unwrap(), Split::Train);
        assert_eq!(Split::parse("validation").unwrap(), Split::Validation);
        assert_eq!(Split::parse("val").unwrap(), Split::Validation);
        assert_eq!(Split::parse("test").unwrap(), Split::Test);

        for bad in ["bogus", "", "Train", "valid", " test"] {
            match Split::parse(bad) {
                Err(CorpusError::InvalidSplit(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidSplit for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        let names: Vec<String> = Split::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["train", "validation", "test"]);

        for split in Split::iter() {
            assert_eq!(Split::parse(&split.to_string()).unwrap(), split);
        }
    }
}
