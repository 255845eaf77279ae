use crate::checksum::Validator;

/// Apply the Luhn checksum to a digit string.
///
/// The input must already be normalized: any non-digit character makes the
/// whole string invalid rather than being skipped.
pub struct LuhnChecksum;

impl Validator for LuhnChecksum {
    fn is_valid(&self, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }

        let mut sum: u32 = 0;
        let mut double = false;
        // Doubling starts at the units digit, so traversal is right-to-left.
        for c in input.chars().rev() {
            let mut value = match c.to_digit(10) {
                Some(digit) => digit,
                None => return false,
            };
            if double {
                value *= 2;
                if value > 9 {
                    value = value % 10 + 1;
                }
            }
            double = !double;
            sum += value;
        }

        sum % 10 == 0
    }
}
