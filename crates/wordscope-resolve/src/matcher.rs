//! Multi-token identifier recognition.
//!
//! Identifiers may span several tokens (`total amount due`) and nothing in
//! the token stream says where they end. The matcher grows a candidate one
//! token at a time and asks the scope chain whether the candidate is, or
//! could still become, a declared name.
//!
//! When a candidate is both a complete name and the start of a longer one
//! (`a` and `a b`), the longer match is preferred. If the extension breaks
//! later (`a b` declared, tokens `a b x` where only `a` is complete), the
//! last complete match is kept as a checkpoint to fall back to.
//!
//! [`longest_match`] applies this over a whole token run and returns the
//! final decision. [`MatchState`] exposes the same process one token at a
//! time for grammars that call it as a predicate.

use wordscope_syntax::Token;

use crate::chain::{CandidateQuery, Resolution, ScopeChain};

/// The outcome of recognizing one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// Number of tokens the identifier consumes.
    pub len: usize,
    /// Token texts joined by single spaces.
    pub text: String,
    /// The declared symbol, or `None` for a single undeclared token (a name
    /// being introduced, or an error the grammar reports).
    pub resolution: Option<Resolution>,
}

impl NameMatch {
    pub fn is_declared(&self) -> bool {
        self.resolution.is_some()
    }
}

/// In-flight state of one identifier-recognition attempt.
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    buffer: String,
    /// Byte length of the first token's text within `buffer`.
    head: usize,
    tokens: usize,
    last: Option<CandidateQuery>,
    confirmed: Option<NameMatch>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new candidate with `text`.
    ///
    /// Any non-blank token may start a name, declared or not. If `text` is
    /// itself declared it becomes the first checkpoint. A blank token leaves
    /// the state empty.
    pub fn start(&mut self, chain: &ScopeChain, text: &str) {
        if is_blank(text) {
            self.reset();
            return;
        }
        self.buffer.clear();
        self.buffer.push_str(text);
        self.head = text.len();
        self.tokens = 1;
        self.confirmed = None;
        let query = chain.query(&self.buffer);
        self.confirm(&query);
        self.last = Some(query);
    }

    /// Try to extend the candidate with `text`.
    ///
    /// Returns `true` if the extended candidate is a declared name or the
    /// prefix of one. On `false` the candidate is left as it was before the
    /// call, so the token can be handed to the next grammar element.
    /// Called without a prior `start`, this starts a candidate instead.
    /// A blank token is always rejected.
    pub fn follow_up(&mut self, chain: &ScopeChain, text: &str) -> bool {
        if is_blank(text) {
            return false;
        }
        if self.tokens == 0 {
            self.start(chain, text);
            return true;
        }

        let mark = self.buffer.len();
        self.buffer.push(' ');
        self.buffer.push_str(text);
        let query = chain.query(&self.buffer);
        let keep = query.keeps_going();
        if keep {
            self.tokens += 1;
            self.confirm(&query);
        } else {
            self.buffer.truncate(mark);
        }
        self.last = Some(query);
        keep
    }

    /// The candidate assembled so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of tokens in the candidate.
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    /// Result of the most recent query, including a rejected extension.
    pub fn last_query(&self) -> Option<&CandidateQuery> {
        self.last.as_ref()
    }

    /// The longest declared name seen during this attempt.
    pub fn confirmed(&self) -> Option<&NameMatch> {
        self.confirmed.as_ref()
    }

    /// True if the whole candidate is a declared name.
    pub fn is_complete(&self) -> bool {
        self.confirmed.as_ref().map(|m| m.len) == Some(self.tokens) && self.tokens > 0
    }

    /// Final decision for the attempt: the checkpoint if there is one,
    /// otherwise the first token as an undeclared name.
    pub fn outcome(&self) -> Option<NameMatch> {
        if self.tokens == 0 {
            return None;
        }
        Some(self.confirmed.clone().unwrap_or_else(|| NameMatch {
            len: 1,
            text: self.buffer[..self.head].to_string(),
            resolution: None,
        }))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn confirm(&mut self, query: &CandidateQuery) {
        if let Some(resolution) = &query.exact {
            self.confirmed = Some(NameMatch {
                len: self.tokens,
                text: self.buffer.clone(),
                resolution: Some(resolution.clone()),
            });
        }
    }
}

/// Recognize the identifier at the start of `tokens`.
///
/// Extends over the maximal run of tokens that keeps the candidate a
/// declared name or a prefix of one, then commits to the longest declared
/// name within that run. With no declared name, the first token alone is
/// returned as undeclared. Returns `None` for an empty slice or a blank
/// first token.
pub fn longest_match<T: Token>(chain: &ScopeChain, tokens: &[T]) -> Option<NameMatch> {
    let (first, rest) = tokens.split_first()?;
    let mut state = MatchState::new();
    state.start(chain, first.text());
    if state.token_count() == 0 {
        return None;
    }
    for token in rest {
        if !state.follow_up(chain, token.text()) {
            break;
        }
    }
    state.outcome()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
