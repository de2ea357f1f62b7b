//! # Backtracking Parser Combinators
//!
//! A small recursive-descent engine: [`Rule`]s are composed with
//! [`then`](Rule::then), [`or`](Rule::or), [`optional`](Rule::optional),
//! [`zero_or_more`](Rule::zero_or_more), [`repeat`](Rule::repeat),
//! [`at_least`](Rule::at_least) and [`complete`](Rule::complete), and run
//! depth-first over a [`CharStream`]. The only state is the stream position;
//! each rule saves it, attempts its match, and either commits or restores.
//!
//! - [`stream`]: the seekable char stream and its string-backed implementation.
//! - [`rule`]: rules, combinators, and the fatal [`ParseError`].
pub mod rule;
pub use rule::{MAX_NESTING_DEPTH, Outcome, ParseError, Rule};

pub mod stream;
pub use stream::{CharStream, SeekError, StrStream};
