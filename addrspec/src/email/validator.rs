//! Configurable validation of email addresses.
//!
//! [`Validator`] runs the anchored grammar rules over each half of an
//! address. [`ValidatorOptions`] selects whether obsolete RFC 5322 syntax is
//! accepted and whether length limits apply.
//!
//! # Example
//! ```rust
//! use addrspec::{EmailAddressError, Part, Validator, ValidatorOptions};
//!
//! let lenient = Validator::new();
//! assert!(lenient.validate("john . doe", "example.com").is_ok());
//!
//! let strict = Validator::new().with_options(ValidatorOptions::strict());
//! assert_eq!(
//!     strict.validate("john . doe", "example.com"),
//!     Err(EmailAddressError::Format(Part::LocalPart))
//! );
//! ```
use tracing::{debug, trace};

use super::address::{EmailAddress, EmailAddressError, Part};
use super::grammar;

/// Validation settings.
///
/// The default accepts everything RFC 5322 allows, obsolete syntax included,
/// with no length limits.
///
/// # Example
/// ```rust
/// use addrspec::ValidatorOptions;
///
/// let options = ValidatorOptions {
///     allow_obsolete: false,
///     ..ValidatorOptions::default()
/// };
/// assert_eq!(options.max_local_part_len, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Accept the obsolete syntax of RFC 5322 §4: `obs-local-part`,
    /// `obs-domain`, control characters, escaped NUL/CR/LF and multi-line folds.
    pub allow_obsolete: bool,
    /// Longest accepted local-part, in characters.
    pub max_local_part_len: Option<usize>,
    /// Longest accepted domain, in characters.
    pub max_domain_len: Option<usize>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            allow_obsolete: true,
            max_local_part_len: None,
            max_domain_len: None,
        }
    }
}

impl ValidatorOptions {
    /// No obsolete syntax, and the RFC 5321 §4.5.3.1 size limits of 64
    /// characters for the local-part and 255 for the domain.
    pub fn strict() -> Self {
        Self {
            allow_obsolete: false,
            max_local_part_len: Some(64),
            max_domain_len: Some(255),
        }
    }
}

/// Builds [`EmailAddress`]es under a given set of [`ValidatorOptions`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    pub options: ValidatorOptions,
}

impl Validator {
    /// Creates a validator with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom configuration of the [`Validator`].
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Validates both halves independently and completely.
    ///
    /// # Errors
    /// - [`EmailAddressError::TooLong`] if a length limit is configured and exceeded
    /// - [`EmailAddressError::Format`] if a half does not match the grammar
    /// - [`EmailAddressError::Parse`] if the parser could not restore its stream
    pub fn validate(
        &self,
        local_part: &str,
        domain: &str,
    ) -> Result<EmailAddress, EmailAddressError> {
        self.check(Part::LocalPart, local_part)?;
        self.check(Part::Domain, domain)?;

        trace!(
            local_part_len = local_part.chars().count(),
            domain_len = domain.chars().count(),
            "email address accepted"
        );
        Ok(EmailAddress::from_validated(local_part, domain))
    }

    /// Validates a whole `local-part "@" domain` string.
    ///
    /// Both the local-part (inside a quoted-string or comment) and the domain
    /// (inside a domain-literal) may contain "@", so each "@" is tried as the
    /// separator from left to right and the first split whose halves both
    /// validate wins. If none does, the error of the last split is returned.
    pub fn parse(&self, address: &str) -> Result<EmailAddress, EmailAddressError> {
        let mut last_err = EmailAddressError::MissingSeparator;

        for (at, _) in address.match_indices('@') {
            match self.validate(&address[..at], &address[at + 1..]) {
                Ok(email) => return Ok(email),
                Err(e @ EmailAddressError::Parse(_)) => return Err(e),
                Err(e) => last_err = e,
            }
        }

        Err(last_err)
    }

    fn check(&self, part: Part, input: &str) -> Result<(), EmailAddressError> {
        let max = match part {
            Part::LocalPart => self.options.max_local_part_len,
            Part::Domain => self.options.max_domain_len,
        };

        if let Some(max) = max {
            let len = input.chars().count();
            if len > max {
                debug!(%part, len, max, "email address rejected: too long");
                return Err(EmailAddressError::TooLong { part, len, max });
            }
        }

        let rule = match (part, self.options.allow_obsolete) {
            (Part::LocalPart, true) => &grammar::LOCAL_PART_COMPLETE,
            (Part::LocalPart, false) => &grammar::strict::LOCAL_PART_COMPLETE,
            (Part::Domain, true) => &grammar::DOMAIN_COMPLETE,
            (Part::Domain, false) => &grammar::strict::DOMAIN_COMPLETE,
        };

        if rule.matches(input)? {
            Ok(())
        } else {
            debug!(%part, len = input.chars().count(), "email address rejected: no grammar match");
            Err(EmailAddressError::Format(part))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_default_options() {
        let validator = Validator::new();
        assert_eq!(validator.options, ValidatorOptions::default());
        assert!(validator.options.allow_obsolete);
        assert_eq!(validator.options.max_local_part_len, None);
        assert_eq!(validator.options.max_domain_len, None);
    }

    #[test]
    fn test_validator_custom_options() {
        let validator = Validator::new().with_options(ValidatorOptions::strict());
        assert!(!validator.options.allow_obsolete);
        assert_eq!(validator.options.max_local_part_len, Some(64));
        assert_eq!(validator.options.max_domain_len, Some(255));
    }

    #[test]
    fn test_validator_obsolete_syntax() {
        let lenient = Validator::new();
        let strict = Validator::new().with_options(ValidatorOptions {
            allow_obsolete: false,
            ..ValidatorOptions::default()
        });

        assert!(lenient.validate(r#"john."doe""#, "example.com").is_ok());
        assert_eq!(
            strict.validate(r#"john."doe""#, "example.com"),
            Err(EmailAddressError::Format(Part::LocalPart))
        );

        assert!(lenient.validate("john", "example . com").is_ok());
        assert_eq!(
            strict.validate("john", "example . com"),
            Err(EmailAddressError::Format(Part::Domain))
        );

        assert!(strict.validate("john.doe", "[192.168.0.1]").is_ok());
        assert!(strict.validate(r#""john doe""#, "example.com").is_ok());
    }

    #[test]
    fn test_validator_strict_rejects_obsolete_characters() {
        let lenient = Validator::new();
        let strict = Validator::new().with_options(ValidatorOptions::strict());

        for local in ["\"a\\\0b\"", "\"a\u{01}b\"", "(\u{01})john", " \r\n \r\n john"] {
            assert!(lenient.validate(local, "example.com").is_ok(), "{local:?}");
            assert_eq!(
                strict.validate(local, "example.com"),
                Err(EmailAddressError::Format(Part::LocalPart)),
                "{local:?}"
            );
        }

        assert!(lenient.validate("john", "[a\u{7f}b]").is_ok());
        assert_eq!(
            strict.validate("john", "[a\u{7f}b]"),
            Err(EmailAddressError::Format(Part::Domain))
        );
    }

    #[test]
    fn test_validator_deep_nesting_is_a_format_error() {
        let validator = Validator::new();

        let open = "(".repeat(100_000);
        assert_eq!(
            validator.validate(&open, "example.com"),
            Err(EmailAddressError::Format(Part::LocalPart))
        );
        assert_eq!(
            validator.validate("john", &open),
            Err(EmailAddressError::Format(Part::Domain))
        );

        let malformed = format!("{}x", "(a".repeat(2000));
        assert_eq!(
            validator.validate(&malformed, "example.com"),
            Err(EmailAddressError::Format(Part::LocalPart))
        );
    }

    #[test]
    fn test_validator_length_limits() {
        let strict = Validator::new().with_options(ValidatorOptions::strict());

        let local = "a".repeat(64);
        assert!(strict.validate(&local, "example.com").is_ok());

        let local = "a".repeat(65);
        assert_eq!(
            strict.validate(&local, "example.com"),
            Err(EmailAddressError::TooLong {
                part: Part::LocalPart,
                len: 65,
                max: 64
            })
        );

        let domain = format!("{}.com", "a".repeat(252));
        assert!(matches!(
            strict.validate("john", &domain),
            Err(EmailAddressError::TooLong {
                part: Part::Domain,
                len: 256,
                max: 255
            })
        ));

        // no limits by default
        assert!(Validator::new().validate(&"a".repeat(65), &domain).is_ok());
    }

    #[test]
    fn test_validator_length_checked_before_grammar() {
        let validator = Validator::new().with_options(ValidatorOptions {
            max_local_part_len: Some(3),
            ..ValidatorOptions::default()
        });

        assert!(matches!(
            validator.validate("a..b", "example.com"),
            Err(EmailAddressError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validator_parse_tries_each_separator() {
        let validator = Validator::new();

        let email = validator.parse(r#""a@b"@example.com"#).unwrap();
        assert_eq!(email.local_part(), r#""a@b""#);

        let email = validator.parse("john@[a@b]").unwrap();
        assert_eq!(email.local_part(), "john");
        assert_eq!(email.domain(), "[a@b]");
    }

    #[test]
    fn test_validator_parse_failures() {
        let validator = Validator::new();

        assert_eq!(
            validator.parse("example.com"),
            Err(EmailAddressError::MissingSeparator)
        );
        assert_eq!(
            validator.parse("john.doe@"),
            Err(EmailAddressError::Format(Part::Domain))
        );
        assert_eq!(
            validator.parse("a@b@c"),
            Err(EmailAddressError::Format(Part::LocalPart))
        );
    }
}
