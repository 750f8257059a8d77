//! Labels for scopes that are about to be opened.
//!
//! A grammar rule that introduces a named construct pushes the construct's
//! header text before descending into it; the next scope pushed takes the
//! top label. Label pushes pair with construct entry/exit, which need not
//! coincide with scope pushes.

use log::trace;

use crate::error::{ResolveError, Stack};

/// A stack of labels that is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStack {
    labels: Vec<String>,
}

impl NameStack {
    /// Create a stack holding only `seed`, which can never be popped.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            labels: vec![seed.into()],
        }
    }

    pub fn push(&mut self, label: impl Into<String>) {
        let label = label.into();
        trace!("push name {:?} (depth {})", label, self.labels.len());
        self.labels.push(label);
    }

    /// Pop the top label. Popping the seed is a stack-discipline violation.
    pub fn pop(&mut self) -> Result<String, ResolveError> {
        if self.labels.len() == 1 {
            return Err(ResolveError::stack_discipline(Stack::Name, self.labels[0].clone()));
        }
        let label = self.labels.pop().unwrap_or_default();
        trace!("pop name {:?}", label);
        Ok(label)
    }

    pub fn top(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or_default()
    }

    pub fn seed(&self) -> &str {
        &self.labels[0]
    }

    /// Number of labels pushed above the seed.
    pub fn depth(&self) -> usize {
        self.labels.len() - 1
    }

    /// Labels from the seed up to the top.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for NameStack {
    fn default() -> Self {
        Self::new("<local>")
    }
}
