use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Indian postal PIN code: six digits, first digit non-zero
    /// - Valid: "403001", "110011"
    /// - Invalid: "040300", "4030", "40300a", "403 001"
    pub static ref PIN_CODE_REGEX: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_code_regex_valid() {
        assert!(PIN_CODE_REGEX.is_match("403001"));
        assert!(PIN_CODE_REGEX.is_match("110011"));
        assert!(PIN_CODE_REGEX.is_match("999999"));
    }

    #[test]
    fn test_pin_code_regex_invalid() {
        assert!(!PIN_CODE_REGEX.is_match("040300")); // leading zero
        assert!(!PIN_CODE_REGEX.is_match("4030")); // too short
        assert!(!PIN_CODE_REGEX.is_match("4030011")); // too long
        assert!(!PIN_CODE_REGEX.is_match("40300a")); // letter
        assert!(!PIN_CODE_REGEX.is_match("403 001")); // space
        assert!(!PIN_CODE_REGEX.is_match(""));
    }
}
