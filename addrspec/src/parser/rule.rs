//! # Parse Rules
//!
//! A [`Rule`] is a reusable predicate over a [`CharStream`]. On a match it
//! consumes input and yields `Ok(true)`. On a mismatch it yields `Ok(false)`
//! and leaves the stream exactly where it found it.
//!
//! Every constructor and combinator here goes through [`Rule::wrap`], which
//! records the stream position before running the rule and seeks back to it
//! when the rule fails. A failed seek is not a mismatch. It means the stream
//! is broken, so it comes back as [`ParseError::Restore`] and stops the whole
//! parse.
//!
//! Alternation is ordered: [`Rule::or`] commits to the first alternative that
//! matches, PEG style.
//!
//! Recursion through [`Rule::lazy`] is bounded. Each level costs native stack,
//! so past [`MAX_NESTING_DEPTH`] active lazy rules on one thread the next one
//! reports a mismatch instead of recursing.
//!
//! ## Example
//! ```rust
//! use addrspec::parser::Rule;
//!
//! // 1*DIGIT *("." 1*DIGIT)
//! let digits = Rule::range('0', '9').at_least(1);
//! let version = digits.clone().then(Rule::char('.').then(digits).zero_or_more());
//!
//! assert!(version.clone().complete().matches("1.2.30").unwrap());
//! assert!(!version.complete().matches("1..2").unwrap());
//! ```
use std::{cell::Cell, fmt, sync::Arc};

use thiserror::Error;
use tracing::{debug, error};

use super::stream::{CharStream, SeekError, StrStream};

/// Result of running a [`Rule`]: `Ok(true)` on a match, `Ok(false)` on a
/// mismatch, `Err` when the stream could not be restored.
pub type Outcome = Result<bool, ParseError>;

/// Fatal parser errors. These are never ordinary mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("stream could not seek back to position {position}")]
    Restore {
        position: usize,
        #[source]
        source: SeekError,
    },
}

type ParseFn = dyn Fn(&mut dyn CharStream) -> Outcome + Send + Sync;

/// Default bound on how many [`Rule::lazy`] rules may be active at once on
/// one thread.
pub const MAX_NESTING_DEPTH: usize = 64;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Holds one level of lazy nesting until dropped.
struct DepthGuard;

impl DepthGuard {
    fn enter(max_depth: usize) -> Option<Self> {
        DEPTH.with(|depth| {
            let current = depth.get();
            if current >= max_depth {
                return None;
            }
            depth.set(current + 1);
            Some(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// A backtracking parse rule.
///
/// Cloning is cheap, the parse function is shared.
#[derive(Clone)]
pub struct Rule {
    parse: Arc<ParseFn>,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

impl Rule {
    fn raw<F>(parse: F) -> Self
    where
        F: Fn(&mut dyn CharStream) -> Outcome + Send + Sync + 'static,
    {
        Self {
            parse: Arc::new(parse),
        }
    }

    /// Makes a rule from a parse function, returning the stream to its
    /// starting position whenever the function reports a mismatch.
    ///
    /// # Errors
    /// The returned rule yields [`ParseError::Restore`] if the stream refuses
    /// to seek back to the position it started from.
    pub fn wrap<F>(parse: F) -> Self
    where
        F: Fn(&mut dyn CharStream) -> Outcome + Send + Sync + 'static,
    {
        Self::raw(move |s| {
            let position = s.position();
            let matched = parse(s)?;

            if !matched {
                if let Err(source) = s.seek(position) {
                    error!(position, %source, "char stream could not seek back after a failed match");
                    return Err(ParseError::Restore { position, source });
                }
            }

            Ok(matched)
        })
    }

    /// Defers to the rule returned by `resolve`, looked up on every parse.
    ///
    /// This is how a rule refers to itself (or to a rule that refers back to
    /// it) without an initialisation cycle. Nesting is capped at
    /// [`MAX_NESTING_DEPTH`], see [`Rule::lazy_bounded`].
    pub fn lazy(resolve: fn() -> &'static Rule) -> Self {
        Self::lazy_bounded(resolve, MAX_NESTING_DEPTH)
    }

    /// Like [`Rule::lazy`], but mismatches without reading anything once
    /// `max_depth` lazy rules are already active on the current thread.
    ///
    /// The count is shared by every lazy rule, so mutually recursive rules
    /// draw on the same budget.
    pub fn lazy_bounded(resolve: fn() -> &'static Rule, max_depth: usize) -> Self {
        Self::raw(move |s| {
            let Some(_guard) = DepthGuard::enter(max_depth) else {
                debug!(max_depth, position = s.position(), "rule nesting too deep, not descending");
                return Ok(false);
            };
            resolve().parse(s)
        })
    }

    /// Always matches and consumes nothing.
    pub fn always() -> Self {
        Self::raw(|_| Ok(true))
    }

    /// Matches the single char `c`.
    pub fn char(c: char) -> Self {
        Self::wrap(move |s| Ok(s.read() == Some(c)))
    }

    /// Matches any single char contained in `set`.
    pub fn any_of(set: &'static str) -> Self {
        Self::wrap(move |s| Ok(s.read().is_some_and(|c| set.contains(c))))
    }

    /// Matches any single char in the inclusive range `min..=max`.
    pub fn range(min: char, max: char) -> Self {
        Self::wrap(move |s| Ok(s.read().is_some_and(|c| (min..=max).contains(&c))))
    }

    /// Runs the rule against `stream`.
    pub fn parse(&self, stream: &mut dyn CharStream) -> Outcome {
        (self.parse)(stream)
    }

    /// Runs the rule against a fresh stream over `input`.
    ///
    /// This does not anchor the match. Use [`Rule::complete`] to require
    /// the whole input to be consumed.
    pub fn matches(&self, input: &str) -> Outcome {
        self.parse(&mut StrStream::new(input))
    }

    /// `self` followed by `next`. If `next` fails the whole sequence is
    /// undone, not just `next`.
    pub fn then(self, next: Rule) -> Self {
        Self::wrap(move |s| Ok(self.parse(s)? && next.parse(s)?))
    }

    /// `self`, or `other` tried from the same position when `self` fails.
    /// The first alternative that matches wins.
    pub fn or(self, other: Rule) -> Self {
        Self::wrap(move |s| Ok(self.parse(s)? || other.parse(s)?))
    }

    /// Matches `self` if possible, otherwise matches nothing. Never fails.
    pub fn optional(self) -> Self {
        self.or(Rule::always())
    }

    /// Greedy repetition of `self`. Never fails.
    ///
    /// Stops at the first repetition that fails or that matches without
    /// consuming anything, so a zero-width `self` cannot loop forever.
    pub fn zero_or_more(self) -> Self {
        Self::wrap(move |s| {
            loop {
                let before = s.position();
                if !self.parse(s)? || s.position() == before {
                    break;
                }
            }
            Ok(true)
        })
    }

    /// Exactly `times` consecutive matches of `self`.
    pub fn repeat(self, times: usize) -> Self {
        Self::wrap(move |s| {
            for _ in 0..times {
                if !self.parse(s)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// `times` or more consecutive matches of `self`, greedily.
    pub fn at_least(self, times: usize) -> Self {
        self.clone().repeat(times).then(self.zero_or_more())
    }

    /// Matches only if `self` matches and nothing is left in the stream.
    pub fn complete(self) -> Self {
        Self::wrap(move |s| Ok(self.parse(s)? && s.read().is_none()))
    }
}
