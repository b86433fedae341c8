//! # Token <-> Id Vocabulary

use std::collections::HashMap;

use crate::{
    errors::{CorpusError, CorpusResult},
    types::{Split, TokenId},
};

/// Bidirectional ``{ token <-> id }`` mapping.
///
/// Ids are dense and zero-based, assigned in first-encounter order:
/// * `id_to_token[token_to_id[t]] == t` for every token `t`;
/// * the ids are exactly `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyMapping {
    token_to_id: HashMap<String, TokenId>,
    id_to_token: Vec<String>,
}

impl VocabularyMapping {
    /// Build a vocabulary from a token stream.
    ///
    /// Walks the tokens once; each unseen token gets the next id.
    ///
    /// # Errors
    /// [`CorpusError::VocabSizeOverflow`] if there are more distinct tokens
    /// than [`TokenId`] can number.
    pub fn from_tokens<I, S>(tokens: I) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            let token = token.as_ref();
            if vocab.token_to_id.contains_key(token) {
                continue;
            }

            let size = vocab.id_to_token.len();
            let id = TokenId::try_from(size).map_err(|_| CorpusError::VocabSizeOverflow {
                size: size + 1,
            })?;

            vocab.token_to_id.insert(token.to_string(), id);
            vocab.id_to_token.push(token.to_string());
        }
        Ok(vocab)
    }

    /// Build a vocabulary from an ordered id table; id `i` is `id_to_token[i]`.
    ///
    /// # Errors
    /// A description of the problem if a token repeats or the table is too large.
    pub fn from_id_table(id_to_token: Vec<String>) -> Result<Self, String> {
        let mut token_to_id = HashMap::with_capacity(id_to_token.len());
        for (idx, token) in id_to_token.iter().enumerate() {
            let id = TokenId::try_from(idx)
                .map_err(|_| format!("id {idx} exceeds token id capacity"))?;
            if let Some(prev) = token_to_id.insert(token.clone(), id) {
                return Err(format!("token {token:?} has ids {prev} and {id}"));
            }
        }
        Ok(Self {
            token_to_id,
            id_to_token,
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// The ``{ token -> id }`` map.
    pub fn token_to_id(&self) -> &HashMap<String, TokenId> {
        &self.token_to_id
    }

    /// The ``{ id -> token }`` table; id `i` is at index `i`.
    pub fn id_to_token(&self) -> &[String] {
        &self.id_to_token
    }

    /// Look up the id of a token.
    pub fn id_of(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    /// Look up the token for an id.
    pub fn token_of(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    /// Encode the tokens of `split`.
    ///
    /// # Errors
    /// [`CorpusError::UnknownToken`] on the first token missing from the vocabulary.
    pub fn encode<S: AsRef<str>>(
        &self,
        split: Split,
        tokens: &[S],
    ) -> CorpusResult<Vec<TokenId>> {
        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                let token = token.as_ref();
                self.id_of(token).ok_or_else(|| CorpusError::UnknownToken {
                    split,
                    token: token.to_string(),
                    position,
                })
            })
            .collect()
    }

    /// Decode ids back to tokens; `None` if any id is out of range.
    pub fn decode(
        &self,
        ids: &[TokenId],
    ) -> Option<Vec<&str>> {
        ids.iter().map(|&id| self.token_of(id)).collect()
    }
}
