use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Barcode must have exactly {expected} digits, got {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Invalid character '{character}' at position {position}; only decimal digits are allowed")]
    InvalidCharacter { position: usize, character: char },
}
