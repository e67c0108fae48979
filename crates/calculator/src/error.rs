use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SipError {
    #[error("Invalid input: '{field}' is not a finite number")]
    InvalidInput { field: &'static str },

    #[error("Calculation overflowed: the projected value exceeds the representable range")]
    Overflow,
}
