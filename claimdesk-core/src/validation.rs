//! Input validation for back-office forms.
//!
//! Customer and dealer forms collect Turkish mobile numbers (used for SMS
//! dispatch) and national identity numbers (T.C. Kimlik No). Both are
//! normalised here before they reach the API.
//!
//! # Examples
//!
//! ```rust
//! use claimdesk_core::validation;
//!
//! assert_eq!(validation::normalize_phone("+90 (532) 123-45-67").unwrap(), "5321234567");
//! assert!(validation::validate_national_id("10000000146").is_ok());
//! ```

use crate::error::ValidationError;

type ValidationResult<T> = std::result::Result<T, ValidationError>;

const PHONE_DIGITS: usize = 10;
const NATIONAL_ID_DIGITS: usize = 11;

/// Normalise a Turkish mobile number to its 10-digit form (`5XXXXXXXXX`).
///
/// Spaces, dashes, dots and parentheses are ignored. A leading `+90`, `0090`,
/// `90` or trunk `0` is removed.
///
/// # Errors
///
/// - [`ValidationError::EmptyInput`] when nothing but separators is given
/// - [`ValidationError::UnexpectedCharacter`] for letters or a misplaced `+`
/// - [`ValidationError::InvalidLength`] when the subscriber part is not 10 digits
/// - [`ValidationError::NotMobile`] when the number is not a GSM number
pub fn normalize_phone(input: &str) -> ValidationResult<String> {
    let mut digits = String::with_capacity(input.len());
    for (index, ch) in input.trim().chars().enumerate() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            '+' if index == 0 => {}
            other => return Err(ValidationError::UnexpectedCharacter(other)),
        }
    }

    if digits.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let national = match digits.len() {
        14 if digits.starts_with("0090") => &digits[4..],
        12 if digits.starts_with("90") => &digits[2..],
        11 if digits.starts_with('0') => &digits[1..],
        _ => digits.as_str(),
    };

    if national.len() != PHONE_DIGITS {
        return Err(ValidationError::InvalidLength {
            expected: PHONE_DIGITS,
            actual: national.len(),
        });
    }

    if !national.starts_with('5') {
        return Err(ValidationError::NotMobile(national.to_string()));
    }

    Ok(national.to_string())
}

/// Render a mobile number as `0 (5XX) XXX XX XX`.
pub fn format_phone(input: &str) -> ValidationResult<String> {
    let n = normalize_phone(input)?;
    Ok(format!(
        "0 ({}) {} {} {}",
        &n[0..3],
        &n[3..6],
        &n[6..8],
        &n[8..10]
    ))
}

/// Whether `input` is an acceptable mobile number.
pub fn is_valid_phone(input: &str) -> bool {
    normalize_phone(input).is_ok()
}

/// Validate a Turkish national identity number and return its digits.
///
/// The number has 11 digits and does not start with zero. The tenth digit is
/// `((d1 + d3 + d5 + d7 + d9) * 7 - (d2 + d4 + d6 + d8)) mod 10`; the
/// eleventh is the sum of the first ten digits `mod 10`.
pub fn validate_national_id(input: &str) -> ValidationResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let mut digits = Vec::with_capacity(NATIONAL_ID_DIGITS);
    for ch in trimmed.chars() {
        let digit = ch
            .to_digit(10)
            .ok_or(ValidationError::UnexpectedCharacter(ch))?;
        digits.push(digit as i32);
    }

    if digits.len() != NATIONAL_ID_DIGITS {
        return Err(ValidationError::InvalidLength {
            expected: NATIONAL_ID_DIGITS,
            actual: digits.len(),
        });
    }

    if digits[0] == 0 {
        return Err(ValidationError::LeadingZero);
    }

    let odd: i32 = digits[0..9].iter().step_by(2).sum();
    let even: i32 = digits[1..8].iter().step_by(2).sum();
    let tenth = (odd * 7 - even).rem_euclid(10);
    let eleventh = digits[0..10].iter().sum::<i32>() % 10;

    if digits[9] != tenth || digits[10] != eleventh {
        return Err(ValidationError::ChecksumMismatch);
    }

    Ok(trimmed.to_string())
}

/// Whether `input` is a valid national identity number.
pub fn is_valid_national_id(input: &str) -> bool {
    validate_national_id(input).is_ok()
}

/// Clean free text from a form field.
///
/// Trims the value and collapses whitespace runs into a single space.
/// Control characters other than whitespace, including null bytes, are
/// rejected rather than stripped.
pub fn sanitize_text(input: &str) -> ValidationResult<String> {
    if let Some(ch) = input.chars().find(|c| c.is_control() && !c.is_whitespace()) {
        return Err(ValidationError::ControlCharacter(ch));
    }

    Ok(input.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_prefixes_are_removed() {
        let forms = [
            "5321234567",
            "05321234567",
            "905321234567",
            "+905321234567",
            "00905321234567",
            "0 (532) 123 45 67",
            "+90 532-123.45.67",
        ];
        for form in forms {
            assert_eq!(normalize_phone(form).unwrap(), "5321234567", "input {form}");
        }
    }

    #[test]
    fn phone_rejects_bad_input() {
        assert_eq!(normalize_phone("   "), Err(ValidationError::EmptyInput));
        assert_eq!(
            normalize_phone("532abc4567"),
            Err(ValidationError::UnexpectedCharacter('a'))
        );
        assert_eq!(
            normalize_phone("53212345"),
            Err(ValidationError::InvalidLength {
                expected: 10,
                actual: 8
            })
        );
        assert_eq!(
            normalize_phone("0212 123 45 67"),
            Err(ValidationError::NotMobile("2121234567".to_string()))
        );
        assert!(normalize_phone("53+21234567").is_err());
    }

    #[test]
    fn phone_display_format() {
        assert_eq!(format_phone("5321234567").unwrap(), "0 (532) 123 45 67");
        assert!(is_valid_phone("+90 555 000 11 22"));
        assert!(!is_valid_phone("123"));
    }

    #[test]
    fn national_id_checksums() {
        assert_eq!(validate_national_id(" 10000000146 ").unwrap(), "10000000146");
        assert!(is_valid_national_id("12345678950"));
        assert_eq!(
            validate_national_id("12345678901"),
            Err(ValidationError::ChecksumMismatch)
        );
    }

    #[test]
    fn national_id_shape() {
        assert_eq!(
            validate_national_id("01234567890"),
            Err(ValidationError::LeadingZero)
        );
        assert_eq!(
            validate_national_id("1234567895"),
            Err(ValidationError::InvalidLength {
                expected: 11,
                actual: 10
            })
        );
        assert_eq!(
            validate_national_id("1234567895X"),
            Err(ValidationError::UnexpectedCharacter('X'))
        );
        assert_eq!(validate_national_id(""), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn text_is_collapsed() {
        assert_eq!(
            sanitize_text("  Hasar   dosyası\t açıldı \n").unwrap(),
            "Hasar dosyası açıldı"
        );
    }

    #[test]
    fn text_control_characters_rejected() {
        assert_eq!(
            sanitize_text("abc\0def"),
            Err(ValidationError::ControlCharacter('\0'))
        );
        assert!(sanitize_text("bell\u{7}").is_err());
    }
}
