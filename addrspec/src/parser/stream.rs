//! # Character Streams
//!
//! A [`CharStream`] is a forward reader over a fixed sequence of characters
//! with a cursor that can be moved back to any previously valid position.
//! Rules built in [`crate::parser::rule`] read from it and seek back when a
//! match fails.
//!
//! ## Example
//! ```rust
//! use addrspec::parser::{CharStream, StrStream};
//!
//! let mut stream = StrStream::new("ab");
//! assert_eq!(stream.read(), Some('a'));
//! assert_eq!(stream.position(), 1);
//!
//! stream.seek(0).unwrap();
//! assert_eq!(stream.read(), Some('a'));
//! assert_eq!(stream.read(), Some('b'));
//! assert_eq!(stream.read(), None);
//! assert_eq!(stream.position(), 2);
//! ```
use thiserror::Error;

/// A read-only, seekable stream of `char`s.
///
/// Implementors must keep `position()` in `0..=len` at all times. Once the
/// whole stream has been read, [`read`](CharStream::read) keeps returning
/// `None` and the position stays equal to the length.
pub trait CharStream {
    /// Current offset in the stream, starting at 0.
    fn position(&self) -> usize;

    /// Reads the next char and advances the position by one, or returns
    /// `None` without moving when the stream is exhausted.
    fn read(&mut self) -> Option<char>;

    /// Moves the position to `offset`.
    ///
    /// An offset equal to the length seeks past the data. Anything larger
    /// fails with [`SeekError::OutOfBounds`] and leaves the position unchanged.
    fn seek(&mut self, offset: usize) -> Result<(), SeekError>;
}

/// Errors returned by [`CharStream::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeekError {
    #[error("offset {offset} is out of bounds for a stream of length {len}")]
    OutOfBounds { offset: usize, len: usize },
}

/// A [`CharStream`] over an in-memory string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrStream {
    chars: Vec<char>,
    position: usize,
}

impl StrStream {
    /// Creates a stream positioned at the first char of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Number of chars in the stream.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of chars left to read.
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.position
    }
}

impl From<&str> for StrStream {
    fn from(value: &str) -> Self {
        StrStream::new(value)
    }
}

impl CharStream for StrStream {
    fn position(&self) -> usize {
        self.position
    }

    fn read(&mut self) -> Option<char> {
        let c = self.chars.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn seek(&mut self, offset: usize) -> Result<(), SeekError> {
        if offset > self.chars.len() {
            return Err(SeekError::OutOfBounds {
                offset,
                len: self.chars.len(),
            });
        }

        self.position = offset;
        Ok(())
    }
}
