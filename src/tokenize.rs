//! Token validation and stop-word filtering.
//!
//! A single validation path covers every string that enters the engine:
//! stop words at construction, document text at ingestion, and raw queries.

use std::collections::BTreeSet;

use crate::error::{Result, SearchError};

/// Splits `text` into tokens on runs of spaces, validating as it scans.
///
/// A token is a maximal run of non-space characters. The scan fails with
/// [`SearchError::InvalidInput`] when it sees a character with code point in
/// `[0, 31]`, a `-` directly following another `-`, or a `-` directly before
/// a space or the end of the input. A leading `-` is preserved in the token;
/// classifying it as a minus marker is the query parser's job.
pub(crate) fn split_into_tokens(text: &str) -> Result<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut prev_was_minus = false;

    for (pos, ch) in text.char_indices() {
        if (ch as u32) < 32 {
            return Err(SearchError::InvalidInput(format!(
                "control character {:?} in input",
                ch
            )));
        }

        if ch == ' ' {
            if prev_was_minus {
                return Err(SearchError::InvalidInput(format!(
                    "token {:?} ends with a dangling '-'",
                    &text[start.unwrap_or(pos)..pos]
                )));
            }
            if let Some(s) = start.take() {
                tokens.push(&text[s..pos]);
            }
        } else if ch == '-' {
            if prev_was_minus {
                return Err(SearchError::InvalidInput("'--' in input".to_owned()));
            }
            prev_was_minus = true;
            start.get_or_insert(pos);
        } else {
            prev_was_minus = false;
            start.get_or_insert(pos);
        }
    }

    if prev_was_minus {
        return Err(SearchError::InvalidInput(format!(
            "token {:?} ends with a dangling '-'",
            &text[start.unwrap_or_default()..]
        )));
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    Ok(tokens)
}

/// Set of tokens excluded from indexing and from query interpretation.
///
/// Immutable after construction; the engine owns exactly one.
#[derive(Debug, Default, Clone)]
pub struct StopWordSet {
    words: BTreeSet<String>,
}

impl StopWordSet {
    /// Builds the set from a single space-delimited string.
    ///
    /// Duplicates collapse; validation happens while the string is split.
    pub fn from_text(text: &str) -> Result<Self> {
        let words = split_into_tokens(text)?
            .into_iter()
            .map(str::to_owned)
            .collect();
        Ok(Self { words })
    }

    /// Builds the set from individual words.
    ///
    /// Empty entries are dropped; every remaining word is validated through
    /// the tokenizer and inserted whole.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            split_into_tokens(word)?;
            set.insert(word.to_owned());
        }
        Ok(Self { words: set })
    }

    /// Whether `token` is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("funny pet and nasty rat", &["funny", "pet", "and", "nasty", "rat"])]
    #[case("  leading and   inner  gaps ", &["leading", "and", "inner", "gaps"])]
    #[case("-cat stays marked", &["-cat", "stays", "marked"])]
    #[case("mid-dash survives", &["mid-dash", "survives"])]
    #[case("", &[])]
    #[case("   ", &[])]
    fn splits_on_spaces(#[case] input: &str, #[case] expected: &[&str]) {
        let tokens = split_into_tokens(input).unwrap();
        check!(tokens == expected);
    }

    #[rstest]
    #[case("--cat")]
    #[case("a--b")]
    #[case("fine until --")]
    fn rejects_double_minus(#[case] input: &str) {
        check!(let Err(SearchError::InvalidInput(_)) = split_into_tokens(input));
    }

    #[rstest]
    #[case("-")]
    #[case("cat-")]
    #[case("cat - dog")]
    #[case("ends with -")]
    fn rejects_dangling_minus(#[case] input: &str) {
        check!(let Err(SearchError::InvalidInput(_)) = split_into_tokens(input));
    }

    #[rstest]
    #[case("bell\u{7}")]
    #[case("tab\tseparated")]
    #[case("new\nline")]
    fn rejects_control_characters(#[case] input: &str) {
        check!(let Err(SearchError::InvalidInput(_)) = split_into_tokens(input));
    }

    #[test]
    fn stop_words_from_text_deduplicate() {
        let stop_words = StopWordSet::from_text("and with and the with").unwrap();
        check!(stop_words.contains("and"));
        check!(stop_words.contains("with"));
        check!(stop_words.contains("the"));
        check!(!stop_words.contains("cat"));
    }

    #[test]
    fn stop_words_from_collection_drop_empty_entries() {
        let stop_words = StopWordSet::from_words(["and", "", "with"]).unwrap();
        check!(stop_words.contains("and"));
        check!(stop_words.contains("with"));
        check!(!stop_words.contains(""));
    }

    #[test]
    fn stop_words_from_collection_validate_each_word() {
        check!(let Err(SearchError::InvalidInput(_)) = StopWordSet::from_words(["and", "wi--th"]));
        check!(let Err(SearchError::InvalidInput(_)) = StopWordSet::from_text("and wi\u{2}th"));
    }
}
