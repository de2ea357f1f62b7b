pub mod address;
pub use address::{EmailAddress, EmailAddressError, Part};

pub mod grammar;

pub mod validator;
pub use validator::{Validator, ValidatorOptions};

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod serde_support;
    }
}
