//! # Wakachi Tokenizer
//!
//! The input is already segmented by spaces; this only marks sentence ends.

/// End-of-sequence marker token.
pub const EOS_TOKEN: &str = "<eos>";

/// The sentence terminator (ideographic full stop).
pub const SENTENCE_TERMINATOR: char = '。';

/// A tokenizer: raw text in, ordered tokens out.
pub type TokenizeFn = fn(&str) -> Vec<String>;

/// Split whitespace-segmented text into tokens.
///
/// Every `'\n'` and every [`SENTENCE_TERMINATOR`] becomes [`EOS_TOKEN`]
/// followed by a space; the result is split on whitespace.
///
/// A terminator glued to the preceding word stays glued:
/// `"た。"` yields `"た<eos>"`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut marked = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if c == '\n' || c == SENTENCE_TERMINATOR {
            marked.push_str(EOS_TOKEN);
            marked.push(' ');
        } else {
            marked.push(c);
        }
    }

    marked.split_whitespace().map(str::to_string).collect()
}
