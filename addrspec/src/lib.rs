#![cfg_attr(docsrs, feature(doc_cfg))]
//! # addrspec
//!
//! RFC 5322 email address ("addr-spec") validation, built on a small
//! backtracking parser-combinator engine.
//!
//! ## Features
//!
//! - **Full addr-spec grammar**: dot-atoms, quoted strings, domain literals,
//!   comments and folding white space, and the obsolete syntax RFC 5322 still
//!   asks receivers to accept
//! - **Validated value type**: an [`EmailAddress`] only exists if both halves matched
//! - **Configurable strictness**: reject obsolete syntax and enforce RFC 5321 length limits
//! - **Reusable engine**: the [`parser`] module works for any grammar over a char stream
//!
//! ("serde" feature)
//! - **Serde support**: `EmailAddress` (de)serializes as a `local@domain` string
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! addrspec = "0.1"
//!
//! # or, with serde support
//! # addrspec = { version = "0.1", features = ["serde"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Validating the two halves
//!
//! ```rust
//! use addrspec::EmailAddress;
//!
//! let email = EmailAddress::new("john.doe", "example.com").unwrap();
//! println!("{}", email);
//!
//! assert!(EmailAddress::new("\"a quoted string\"", "example.com").is_ok());
//! assert!(EmailAddress::new("john", "[192.168.0.1]").is_ok());
//! assert!(EmailAddress::new("john..doe", "example.com").is_err());
//! ```
//!
//! ### Parsing a whole address
//!
//! ```rust
//! use addrspec::EmailAddress;
//!
//! let email: EmailAddress = "\"john@home\"@example.com".parse().unwrap();
//! assert_eq!(email.local_part(), "\"john@home\"");
//! ```
//!
//! ### Strict validation
//!
//! ```rust
//! use addrspec::{Validator, ValidatorOptions};
//!
//! let validator = Validator::new().with_options(ValidatorOptions::strict());
//! assert!(validator.validate("john.doe", "example.com").is_ok());
//! assert!(validator.validate("john . doe", "example.com").is_err());
//! ```
//!
//! ### Writing your own rules
//!
//! ```rust
//! use addrspec::{alt, seq};
//! use addrspec::parser::Rule;
//!
//! // hex = "0x" 1*(DIGIT / "a"-"f")
//! let hex = seq!(
//!     Rule::char('0'),
//!     Rule::char('x'),
//!     alt!(Rule::range('0', '9'), Rule::range('a', 'f')).at_least(1),
//! )
//! .complete();
//!
//! assert!(hex.matches("0xff").unwrap());
//! assert!(!hex.matches("0xfg").unwrap());
//! ```
//!
//! ## Architecture
//!
//! - **`parser`**: char streams, rules and combinators
//! - **`email`**: the RFC 5322 grammar, the validator and the `EmailAddress` type
//!
//! ## Error Handling
//!
//! Validation returns `Result<EmailAddress, EmailAddressError>`:
//!
//! ```rust
//! use addrspec::{EmailAddress, EmailAddressError, Part};
//!
//! match EmailAddress::new("john..doe", "example.com") {
//!     Ok(email) => println!("Valid: {}", email),
//!     Err(EmailAddressError::Format(Part::LocalPart)) => eprintln!("Bad local-part"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! A mismatch is never an error inside the parser. The only parser-level
//! error is [`parser::ParseError`], raised when a stream cannot seek back to
//! a position it already visited.

pub mod parser;

pub mod email;
pub use email::{EmailAddress, EmailAddressError, Part, Validator, ValidatorOptions};

/// Ordered alternation of two or more rules: `alt!(a, b, c)` is
/// `a.or(b).or(c)`.
///
/// # Example
/// ```
/// use addrspec::{alt, parser::Rule};
///
/// let sign = alt!(Rule::char('+'), Rule::char('-'));
/// assert!(sign.matches("-").unwrap());
/// ```
#[macro_export]
macro_rules! alt {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first$(.or($rest))*
    };
}

/// Sequence of two or more rules: `seq!(a, b, c)` is `a.then(b).then(c)`.
///
/// # Example
/// ```
/// use addrspec::{seq, parser::Rule};
///
/// let crlf = seq!(Rule::char('\r'), Rule::char('\n'));
/// assert!(crlf.matches("\r\n").unwrap());
/// ```
#[macro_export]
macro_rules! seq {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first$(.then($rest))*
    };
}
