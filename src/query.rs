//! Query parsing: classifies raw query tokens into plus and minus terms.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::tokenize::{StopWordSet, split_into_tokens};

/// A parsed query.
///
/// `plus` terms are required and scored; `minus` terms exclude any document
/// they occur in. The sets are disjoint by construction: each raw token is
/// either minus-marked or not.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Query {
    pub(crate) plus: BTreeSet<String>,
    pub(crate) minus: BTreeSet<String>,
}

impl Query {
    /// Parses `text`, dropping stop words from both term classes.
    ///
    /// Tokens are validated before the leading `-` is stripped, so a bare
    /// `-` never reaches the stop-word check as an empty word. The stop-word
    /// check for a minus candidate runs on the stripped word, which means a
    /// stop word can never act as an exclusion term.
    pub(crate) fn parse(text: &str, stop_words: &StopWordSet) -> Result<Self> {
        let mut query = Self::default();
        for token in split_into_tokens(text)? {
            if let Some(word) = token.strip_prefix('-') {
                if !stop_words.contains(word) {
                    query.minus.insert(word.to_owned());
                }
            } else if !stop_words.contains(token) {
                query.plus.insert(token.to_owned());
            }
        }
        Ok(query)
    }
}
