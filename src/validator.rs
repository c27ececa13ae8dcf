use once_cell::sync::Lazy;
use phonenumber::country;
use regex::Regex;

static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Syntactic check only; no DNS or deliverability probing.
pub fn validate_email(value: &str) -> bool {
    EMAIL_FORMAT.is_match(value)
}

/// A number is accepted when it parses under the given numbering-plan region
/// and is structurally valid for that plan. With `region == None` only
/// numbers carrying an explicit country code can pass.
pub fn validate_phone(value: &str, region: Option<country::Id>) -> bool {
    match phonenumber::parse(region, value) {
        Ok(number) => phonenumber::is_valid(&number),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_emails() {
        assert!(validate_email("john.doe@example.com"));
        assert!(validate_email("a_b+c%d@sub.domain.co"));
        assert!(validate_email("UPPER@CASE.ORG"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!validate_email("no-at-sign.example.com"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("trailing@example.com "));
        assert!(!validate_email(""));
    }

    #[test]
    fn accepts_valid_us_numbers() {
        assert!(validate_phone("650-253-0000", Some(country::US)));
        assert!(validate_phone("(650) 253-0000", Some(country::US)));
        assert!(validate_phone("+1 650 253 0000", None));
    }

    #[test]
    fn rejects_garbage_and_short_numbers() {
        assert!(!validate_phone("abc", Some(country::US)));
        assert!(!validate_phone("12345", Some(country::US)));
        assert!(!validate_phone("", Some(country::US)));
    }

    #[test]
    fn national_format_needs_a_region() {
        assert!(!validate_phone("650-253-0000", None));
    }
}
