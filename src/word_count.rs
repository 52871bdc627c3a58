// 🔤 Word Occurrence Counter - Case-insensitive counting
// Two deliberate policies, never mixed:
//   Token     - whole tokens split on single spaces, punctuation kept
//   Substring - non-overlapping contiguous matches, even inside other words

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// COUNT POLICY
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// "typescript!" is not "typescript"
    #[default]
    Token,

    /// "typescript" occurs twice in "TypeScript ... TypeScript!"
    Substring,
}

impl CountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountPolicy::Token => "token",
            CountPolicy::Substring => "substring",
        }
    }
}

// ============================================================================
// COUNTERS
// ============================================================================

/// Count tokens (split on `' '`) equal to `word`, ignoring case.
///
/// An empty `word` yields 0, even where doubled spaces leave empty tokens.
pub fn count_tokens(sentence: &str, word: &str) -> usize {
    if word.is_empty() {
        debug!("Empty search word, reporting 0 occurrences");
        return 0;
    }

    let sentence = sentence.to_lowercase();
    let word = word.to_lowercase();

    sentence.split(' ').filter(|token| *token == word).count()
}

/// Count non-overlapping case-insensitive occurrences of `word` anywhere in `sentence`.
///
/// An empty `word` yields 0.
pub fn count_substrings(sentence: &str, word: &str) -> usize {
    if word.is_empty() {
        debug!("Empty search word, reporting 0 occurrences");
        return 0;
    }

    let sentence = sentence.to_lowercase();
    let word = word.to_lowercase();

    sentence.matches(word.as_str()).count()
}

/// Count occurrences of `word` under the given policy.
pub fn count_occurrences(sentence: &str, word: &str, policy: CountPolicy) -> usize {
    match policy {
        CountPolicy::Token => count_tokens(sentence, word),
        CountPolicy::Substring => count_substrings(sentence, word),
    }
}

// ============================================================================
// TESTS
// ============================================================================
