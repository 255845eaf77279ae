mod card_brand;
mod isbn10;
mod isbn13;
mod luhn;

pub use card_brand::CardBrand;
pub use isbn10::Isbn10Checksum;
pub use isbn13::Isbn13Checksum;
pub use luhn::LuhnChecksum;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// The two ISBN revisions, differing in length and weighting formula.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IsbnVersion {
    Ten,
    Thirteen,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("unsupported ISBN version {0}, expected 10 or 13")]
pub struct InvalidIsbnVersion(pub u8);

impl TryFrom<u8> for IsbnVersion {
    type Error = InvalidIsbnVersion;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(IsbnVersion::Ten),
            13 => Ok(IsbnVersion::Thirteen),
            other => Err(InvalidIsbnVersion(other)),
        }
    }
}

/// Every identifier kind the crate can validate, as configuration data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum IdentifierValidator {
    CreditCard,
    VisaCard,
    MasterCard,
    AmericanExpressCard,
    DinersClubCard,
    DiscoverCard,
    JcbCard,
    Isbn10,
    Isbn13,
    Isbn,
}

impl Validator for IdentifierValidator {
    fn is_valid(&self, input: &str) -> bool {
        match self {
            IdentifierValidator::CreditCard => crate::is_credit_card(input),
            IdentifierValidator::VisaCard => CardBrand::Visa.is_valid(input),
            IdentifierValidator::MasterCard => CardBrand::MasterCard.is_valid(input),
            IdentifierValidator::AmericanExpressCard => {
                CardBrand::AmericanExpress.is_valid(input)
            }
            IdentifierValidator::DinersClubCard => CardBrand::DinersClub.is_valid(input),
            IdentifierValidator::DiscoverCard => CardBrand::Discover.is_valid(input),
            IdentifierValidator::JcbCard => CardBrand::Jcb.is_valid(input),
            IdentifierValidator::Isbn10 => Isbn10Checksum.is_valid(input),
            IdentifierValidator::Isbn13 => Isbn13Checksum.is_valid(input),
            IdentifierValidator::Isbn => crate::is_isbn(input, None),
        }
    }
}
