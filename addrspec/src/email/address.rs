//! # EmailAddress
//!
//! A validation type for an RFC 5322 addr-spec. The only way to get one is
//! to pass validation, so holding an [`EmailAddress`] means both halves
//! matched the grammar in full.
//!
//! ## Example
//!
//! ```rust
//! use std::convert::TryFrom;
//! use addrspec::EmailAddress;
//!
//! // From the two halves
//! let email = EmailAddress::new("john.doe", "example.com").unwrap();
//! assert_eq!(email.local_part(), "john.doe");
//!
//! // Via `parse` using FromStr
//! let email2: EmailAddress = "john.doe@example.com".parse().unwrap();
//!
//! // Via TryFrom
//! let email3 = EmailAddress::try_from("john.doe@example.com").unwrap();
//!
//! assert_eq!(email, email2);
//! assert_eq!(email2, email3);
//! assert_eq!(email.to_string(), "john.doe@example.com");
//! ```
use std::fmt::Display;

use thiserror::Error;

use super::validator::Validator;
use crate::parser::ParseError;

/// A validated RFC 5322 addr-spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    local_part: String,
    domain: String,
}

/// The half of an address an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    LocalPart,
    Domain,
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalPart => write!(f, "local-part"),
            Self::Domain => write!(f, "domain"),
        }
    }
}

/// Represents possible errors when validating an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailAddressError {
    /// The half does not match the grammar.
    #[error("invalid {0} format")]
    Format(Part),
    /// The half is longer than the configured limit.
    #[error("{part} is {len} characters long, the limit is {max}")]
    TooLong { part: Part, len: usize, max: usize },
    /// A whole address was given without any "@".
    #[error("missing \"@\" between local-part and domain")]
    MissingSeparator,
    /// The parser itself broke. Not a problem with the input.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl EmailAddress {
    /// Validates `local_part` and `domain` against the RFC 5322 grammar with
    /// the default [`ValidatorOptions`](super::ValidatorOptions).
    ///
    /// # Errors
    /// Returns [`EmailAddressError::Format`] naming the first half that does
    /// not match.
    pub fn new(local_part: &str, domain: &str) -> Result<EmailAddress, EmailAddressError> {
        Validator::new().validate(local_part, domain)
    }

    pub(crate) fn from_validated(local_part: &str, domain: &str) -> Self {
        Self {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
        }
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = EmailAddressError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Validator::new().parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailAddressError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Validator::new().parse(value)
    }
}
