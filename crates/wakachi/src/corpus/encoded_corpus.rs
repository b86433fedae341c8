//! # Encoded Corpus

use ndarray::Array1;

use crate::{
    types::{Split, TokenId},
    vocab::VocabularyMapping,
};

/// A split encoded as token ids, in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    split: Split,
    ids: Vec<TokenId>,
}

impl Corpus {
    /// Construct a new [`Corpus`].
    pub fn new(
        split: Split,
        ids: Vec<TokenId>,
    ) -> Self {
        Self { split, ids }
    }

    /// The split this corpus encodes.
    pub fn split(&self) -> Split {
        self.split
    }

    /// The token ids.
    pub fn ids(&self) -> &[TokenId] {
        &self.ids
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Take the token ids.
    pub fn into_ids(self) -> Vec<TokenId> {
        self.ids
    }

    /// Copy the ids into a 1-D array.
    pub fn to_array(&self) -> Array1<TokenId> {
        Array1::from(self.ids.clone())
    }

    /// Decode back to tokens; `None` if an id is not in `vocab`.
    pub fn decode<'v>(
        &self,
        vocab: &'v VocabularyMapping,
    ) -> Option<Vec<&'v str>> {
        vocab.decode(&self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus() {
        let vocab = VocabularyMapping::from_tokens(["犬", "が", "<eos>"]).unwrap();
        let corpus = Corpus::new(Split::Train, vec![0, 1, 2, 0]);

        assert_eq!(corpus.split(), Split::Train);
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.to_array().as_slice().unwrap(), &[0, 1, 2, 0]);
        assert_eq!(corpus.decode(&vocab).unwrap(), vec!["犬", "が", "<eos>", "犬"]);
        assert_eq!(corpus.into_ids(), vec![0, 1, 2, 0]);
    }
}
