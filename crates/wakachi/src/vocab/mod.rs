//! # Vocabulary
//!
//! * [`VocabularyMapping`] - the ``{ token <-> id }`` table.
//! * [`VocabularyManager`] - builds it from the train split once, then serves
//!   the cached copy.
//! * [`vocab_record`] - the persisted JSON form.

pub mod vocab_manager;
pub mod vocab_record;
pub mod vocabulary;

#[doc(inline)]
pub use vocab_manager::VocabularyManager;
#[doc(inline)]
pub use vocab_record::{VocabRecord, read_vocab_record, write_vocab_record};
#[doc(inline)]
pub use vocabulary::VocabularyMapping;
