//! # Vocabulary Record IO
//!
//! A vocabulary is persisted as one JSON record holding both directions:
//!
//! ```json
//! {"token_to_id":{"が":1,"犬":0},"id_to_token":{"0":"犬","1":"が"}}
//! ```
//!
//! Keys are written in sorted order, so equal vocabularies serialize to equal bytes.

use std::{
    collections::BTreeMap,
    io::{Read, Write},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{CorpusError, CorpusResult},
    types::TokenId,
    vocab::VocabularyMapping,
};

/// The serialized form of a [`VocabularyMapping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabRecord {
    /// ``{ token -> id }``.
    pub token_to_id: BTreeMap<String, TokenId>,

    /// ``{ id -> token }``.
    pub id_to_token: BTreeMap<TokenId, String>,
}

impl From<&VocabularyMapping> for VocabRecord {
    fn from(vocab: &VocabularyMapping) -> Self {
        Self {
            token_to_id: vocab
                .token_to_id()
                .iter()
                .map(|(token, &id)| (token.clone(), id))
                .collect(),
            id_to_token: (0..)
                .zip(vocab.id_to_token().iter().cloned())
                .collect(),
        }
    }
}

impl VocabRecord {
    /// Check the two maps are aligned inverses over `0..N`, and rebuild the vocabulary.
    ///
    /// # Errors
    /// A description of the first inconsistency found.
    pub fn into_vocab(self) -> Result<VocabularyMapping, String> {
        if self.token_to_id.len() != self.id_to_token.len() {
            return Err(format!(
                "token_to_id has {} entries, id_to_token has {}",
                self.token_to_id.len(),
                self.id_to_token.len()
            ));
        }

        let mut table = Vec::with_capacity(self.id_to_token.len());
        for (expected, (id, token)) in (0..).zip(self.id_to_token) {
            if id != expected {
                return Err(format!("ids are not contiguous: expected {expected}, found {id}"));
            }
            if self.token_to_id.get(&token) != Some(&id) {
                return Err(format!("token {token:?} does not map back to id {id}"));
            }
            table.push(token);
        }

        VocabularyMapping::from_id_table(table)
    }
}

/// Write a vocabulary record.
pub fn write_vocab_record<W: Write>(
    vocab: &VocabularyMapping,
    writer: W,
) -> CorpusResult<()> {
    serde_json::to_writer(writer, &VocabRecord::from(vocab))?;
    Ok(())
}

/// Read and validate a vocabulary record.
///
/// # Arguments
/// * `key` - the artifact key, used in error reports.
pub fn read_vocab_record<R: Read>(
    reader: R,
    key: &str,
) -> CorpusResult<VocabularyMapping> {
    let record: VocabRecord = serde_json::from_reader(reader)?;
    record
        .into_vocab()
        .map_err(|reason| CorpusError::CorruptArtifact {
            key: key.to_string(),
            reason,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn sample_vocab() -> VocabularyMapping {
        VocabularyMapping::from_tokens(tokenize("犬 が 猫 を 見 た 。 犬 が 走っ た 。")).unwrap()
    }

    #[test]
    fn test_record_format() {
        let vocab = VocabularyMapping::from_tokens(["犬", "が"]).unwrap();

        let mut buf = Vec::new();
        write_vocab_record(&vocab, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"{"token_to_id":{"が":1,"犬":0},"id_to_token":{"0":"犬","1":"が"}}"#
        );
    }

    #[test]
    fn test_write_is_deterministic() {
        let mut first = Vec::new();
        write_vocab_record(&sample_vocab(), &mut first).unwrap();
        let mut second = Vec::new();
        write_vocab_record(&sample_vocab(), &mut second).unwrap();
        assert_eq!(first, second);

        let loaded = read_vocab_record(first.as_slice(), "vocab.json").unwrap();
        assert_eq!(loaded, sample_vocab());
    }

    #[test]
    fn test_rejects_misaligned_records() {
        let cases = [
            r#"{"token_to_id":{"犬":0},"id_to_token":{"0":"犬","1":"が"}}"#,
            r#"{"token_to_id":{"犬":0,"が":2},"id_to_token":{"0":"犬","2":"が"}}"#,
            r#"{"token_to_id":{"犬":1,"が":0},"id_to_token":{"0":"犬","1":"が"}}"#,
        ];
        for case in cases {
            match read_vocab_record(case.as_bytes(), "vocab.json") {
                Err(CorpusError::CorruptArtifact { key, .. }) => assert_eq!(key, "vocab.json"),
                other => panic!("expected CorruptArtifact for {case}, got {other:?}"),
            }
        }

        assert!(matches!(
            read_vocab_record("not json".as_bytes(), "vocab.json"),
            Err(CorpusError::Json(_))
        ));
    }
}
