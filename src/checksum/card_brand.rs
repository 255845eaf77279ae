use crate::checksum::{LuhnChecksum, Validator};
use crate::normalization::strip_non_digits;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The supported payment-card networks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum CardBrand {
    Visa,
    MasterCard,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
}

enum PrefixRule {
    /// The number must start with this exact digit string.
    Exact(&'static str),
    /// The leading `digits` characters, read as an integer, must fall in
    /// `min..=max`.
    Range {
        digits: usize,
        min: u32,
        max: u32,
    },
}

/// One (lengths, prefixes) pairing of a brand signature. A number belongs to
/// the family when its length is listed and any prefix rule matches.
struct PrefixFamily {
    lengths: &'static [usize],
    prefixes: &'static [PrefixRule],
}

struct BrandSignature {
    families: &'static [PrefixFamily],
}

const VISA: BrandSignature = BrandSignature {
    // New cards have 16 digits, old cards 13. All start with a 4.
    families: &[PrefixFamily {
        lengths: &[13, 16],
        prefixes: &[PrefixRule::Exact("4")],
    }],
};

const MASTER_CARD: BrandSignature = BrandSignature {
    // 51-55 and 2221-2720 plus the joint-venture Diners Club numbers
    // beginning with 5, which are processed like a MasterCard.
    families: &[PrefixFamily {
        lengths: &[16],
        prefixes: &[
            PrefixRule::Exact("5"),
            PrefixRule::Range {
                digits: 2,
                min: 51,
                max: 55,
            },
            PrefixRule::Range {
                digits: 4,
                min: 2221,
                max: 2720,
            },
        ],
    }],
};

const AMERICAN_EXPRESS: BrandSignature = BrandSignature {
    families: &[PrefixFamily {
        lengths: &[15],
        prefixes: &[PrefixRule::Exact("34"), PrefixRule::Exact("37")],
    }],
};

const DINERS_CLUB: BrandSignature = BrandSignature {
    families: &[PrefixFamily {
        lengths: &[14],
        prefixes: &[
            PrefixRule::Exact("36"),
            PrefixRule::Exact("38"),
            PrefixRule::Range {
                digits: 3,
                min: 300,
                max: 305,
            },
        ],
    }],
};

const DISCOVER: BrandSignature = BrandSignature {
    families: &[PrefixFamily {
        lengths: &[16],
        prefixes: &[PrefixRule::Exact("65"), PrefixRule::Exact("6011")],
    }],
};

const JCB: BrandSignature = BrandSignature {
    // JCB couples the required length to the prefix family.
    families: &[
        PrefixFamily {
            lengths: &[15],
            prefixes: &[PrefixRule::Exact("2131"), PrefixRule::Exact("1800")],
        },
        PrefixFamily {
            lengths: &[16],
            prefixes: &[PrefixRule::Exact("35")],
        },
    ],
};

impl PrefixRule {
    fn matches(&self, digits: &str) -> bool {
        match self {
            PrefixRule::Exact(prefix) => digits.starts_with(prefix),
            PrefixRule::Range { digits: count, min, max } => match digits.get(..*count) {
                Some(leading) => match leading.parse::<u32>() {
                    Ok(value) => (*min..=*max).contains(&value),
                    // Pre-validated digit substrings always parse; anything
                    // else is a non-match, not a fault.
                    Err(_) => false,
                },
                None => false,
            },
        }
    }
}

impl CardBrand {
    fn signature(&self) -> &'static BrandSignature {
        match self {
            CardBrand::Visa => &VISA,
            CardBrand::MasterCard => &MASTER_CARD,
            CardBrand::AmericanExpress => &AMERICAN_EXPRESS,
            CardBrand::DinersClub => &DINERS_CLUB,
            CardBrand::Discover => &DISCOVER,
            CardBrand::Jcb => &JCB,
        }
    }

    /// Length and prefix classification of an already-normalized digit
    /// string. No checksum is computed.
    pub fn matches(&self, digits: &str) -> bool {
        self.signature().families.iter().any(|family| {
            family.lengths.contains(&digits.len())
                && family.prefixes.iter().any(|rule| rule.matches(digits))
        })
    }
}

impl Validator for CardBrand {
    /// Normalize, classify, then run the Luhn checksum. A number with a
    /// correct checksum but the wrong length or prefix is rejected before
    /// the checksum ever runs.
    fn is_valid(&self, input: &str) -> bool {
        let digits = strip_non_digits(input);
        self.matches(&digits) && LuhnChecksum.is_valid(&digits)
    }
}
