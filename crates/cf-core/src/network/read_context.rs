//! Tagging of in-flight reads with the context they were issued under.
//!
//! Reads are not cancelled when the user switches network. Each read captures
//! the current [`ReadContext`]; results whose context is no longer current
//! are dropped by the caller.

use std::sync::Mutex;

use super::chain::Chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadContext {
    pub chain: Chain,
    pub generation: u64,
}

/// Result of checking a completed read against the current context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tagged<T> {
    Fresh(T),
    Stale,
}

impl<T> Tagged<T> {
    pub fn into_fresh(self) -> Option<T> {
        match self {
            Self::Fresh(value) => Some(value),
            Self::Stale => None,
        }
    }
}

/// Source of truth for the current read context.
#[derive(Debug)]
pub struct ReadContextTracker {
    current: Mutex<ReadContext>,
}

impl ReadContextTracker {
    pub fn new(chain: Chain) -> Self {
        Self {
            current: Mutex::new(ReadContext {
                chain,
                generation: 0,
            }),
        }
    }

    pub fn current(&self) -> ReadContext {
        *self.lock()
    }

    /// Select a chain. Every switch starts a new generation, even back to
    /// the same chain, so reads issued before it are stale.
    pub fn switch_chain(&self, chain: Chain) -> ReadContext {
        let mut current = self.lock();
        current.chain = chain;
        current.generation += 1;
        *current
    }

    /// Start a new generation on the current chain.
    pub fn invalidate(&self) -> ReadContext {
        let mut current = self.lock();
        current.generation += 1;
        *current
    }

    pub fn is_current(&self, context: &ReadContext) -> bool {
        self.current() == *context
    }

    pub fn accept<T>(&self, context: &ReadContext, value: T) -> Tagged<T> {
        if self.is_current(context) {
            Tagged::Fresh(value)
        } else {
            Tagged::Stale
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ReadContext> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ReadContextTracker {
    fn default() -> Self {
        Self::new(Chain::default())
    }
}
