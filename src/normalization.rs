use crate::checksum::IsbnVersion;

/// Keep only the ASCII decimal digits of `input`, preserving their order.
///
/// Total over all strings and idempotent: normalizing an already-normalized
/// digit string returns it unchanged.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep only the ASCII decimal digits of `input`, except that for ISBN-10 a
/// trailing `x`/`X` in the original input is preserved as the check symbol
/// `'X'`. An `x`/`X` anywhere else is dropped like any other non-digit.
pub fn strip_isbn(input: &str, version: IsbnVersion) -> String {
    let mut stripped = strip_non_digits(input);
    if version == IsbnVersion::Ten && matches!(input.chars().last(), Some('x' | 'X')) {
        stripped.push('X');
    }
    stripped
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_formatting_characters() {
        assert_eq!(strip_non_digits("4716-2210-5188-5662"), "4716221051885662");
        assert_eq!(strip_non_digits("4929 7226 5379 7141"), "4929722653797141");
        assert_eq!(strip_non_digits("foo"), "");
        assert_eq!(strip_non_digits(""), "");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_non_digits("3 423 21412 0");
        assert_eq!(strip_non_digits(&once), once);
    }

    #[test]
    fn isbn_check_symbol_survives_only_at_the_end() {
        assert_eq!(strip_isbn("1-55404-295-X", IsbnVersion::Ten), "155404295X");
        assert_eq!(strip_isbn("155404295x", IsbnVersion::Ten), "155404295X");
        // An X away from the final position is formatting noise.
        assert_eq!(strip_isbn("X155404295", IsbnVersion::Ten), "155404295");
        // ISBN-13 has a numeric check digit, no X allowance.
        assert_eq!(strip_isbn("978383622119X", IsbnVersion::Thirteen), "978383622119");
    }
}
