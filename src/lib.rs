// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

//! Checksum validation for payment-card and ISBN identifiers.
//!
//! Every check is a pure function over its input: the raw string is
//! normalized to digits, brand-specific checks classify it against static
//! length/prefix signatures, and the surviving candidate runs through the
//! matching checksum algorithm. Malformed input is an ordinary `false`,
//! never an error.

mod checksum;
mod normalization;

pub use checksum::{
    CardBrand, IdentifierValidator, InvalidIsbnVersion, Isbn10Checksum, Isbn13Checksum,
    IsbnVersion, LuhnChecksum, Validator,
};
pub use normalization::{strip_isbn, strip_non_digits};

/// Apply the Luhn checksum to an already-normalized digit string.
/// Empty input or any non-digit character is invalid.
pub fn is_luhn_valid(digits: &str) -> bool {
    LuhnChecksum.is_valid(digits)
}

/// Check if the string is a credit card number of any brand: normalize,
/// then Luhn. Strictly more permissive than any single-brand check.
pub fn is_credit_card(raw: &str) -> bool {
    LuhnChecksum.is_valid(&strip_non_digits(raw))
}

/// Check if the string is a Visa card number.
pub fn is_visa_card(raw: &str) -> bool {
    CardBrand::Visa.is_valid(raw)
}

/// Check if the string is a MasterCard number.
pub fn is_master_card(raw: &str) -> bool {
    CardBrand::MasterCard.is_valid(raw)
}

/// Check if the string is an American Express card number.
pub fn is_american_express_card(raw: &str) -> bool {
    CardBrand::AmericanExpress.is_valid(raw)
}

/// Check if the string is a Diners Club card number.
pub fn is_diners_club_card(raw: &str) -> bool {
    CardBrand::DinersClub.is_valid(raw)
}

/// Check if the string is a Discover card number.
pub fn is_discover_card(raw: &str) -> bool {
    CardBrand::Discover.is_valid(raw)
}

/// Check if the string is a JCB card number.
pub fn is_jcb_card(raw: &str) -> bool {
    CardBrand::Jcb.is_valid(raw)
}

/// Check if the string is an ISBN version 10.
pub fn is_isbn10(raw: &str) -> bool {
    Isbn10Checksum.is_valid(raw)
}

/// Check if the string is an ISBN version 13.
pub fn is_isbn13(raw: &str) -> bool {
    Isbn13Checksum.is_valid(raw)
}

/// Check if the string is an ISBN. With no explicit version, both variants
/// are tried.
pub fn is_isbn(raw: &str, version: Option<IsbnVersion>) -> bool {
    match version {
        Some(IsbnVersion::Ten) => is_isbn10(raw),
        Some(IsbnVersion::Thirteen) => is_isbn13(raw),
        None => is_isbn10(raw) || is_isbn13(raw),
    }
}
