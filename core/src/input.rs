use crate::{Guess, InputError};

/// Parses what the player typed into a guess.
///
/// Surrounding whitespace is ignored. Only the leading decimal integer is
/// read: an optional sign followed by decimal digits, with anything after the
/// digits dropped, so `"12.7"` reads as 12, `"7abc"` as 7 and `"0x10"` as 0.
pub fn parse_guess(raw: &str) -> Result<Guess, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value = leading_integer(trimmed).ok_or(InputError::NotANumber)?;
    let value = i32::try_from(value).map_err(|_| InputError::OutOfRange)?;
    Guess::new(value)
}

fn leading_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // saturate: anything this long is out of range anyway
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_whole_range() {
        for value in Guess::MIN..=Guess::MAX {
            let raw = alloc::format!("{value}");
            assert_eq!(parse_guess(&raw).map(Guess::value), Ok(value));
        }
    }

    #[test]
    fn empty_input_asks_for_a_number() {
        assert_eq!(parse_guess(""), Err(InputError::Empty));
        assert_eq!(parse_guess("   "), Err(InputError::Empty));
    }

    #[test]
    fn rejects_non_numeric_and_out_of_range() {
        assert_eq!(parse_guess("abc"), Err(InputError::NotANumber));
        assert_eq!(parse_guess("-"), Err(InputError::NotANumber));
        assert_eq!(parse_guess("0"), Err(InputError::OutOfRange));
        assert_eq!(parse_guess("101"), Err(InputError::OutOfRange));
        assert_eq!(parse_guess("-5"), Err(InputError::OutOfRange));
        assert_eq!(
            parse_guess("99999999999999999999999"),
            Err(InputError::OutOfRange)
        );
    }

    #[test]
    fn reads_leading_decimal_digits() {
        assert_eq!(parse_guess(" 42 ").map(Guess::value), Ok(42));
        assert_eq!(parse_guess("12.7").map(Guess::value), Ok(12));
        assert_eq!(parse_guess("7abc").map(Guess::value), Ok(7));
        assert_eq!(parse_guess("+8").map(Guess::value), Ok(8));
    }

    #[test]
    fn hex_prefix_is_not_understood() {
        assert_eq!(parse_guess("0x10"), Err(InputError::OutOfRange));
        assert_eq!(parse_guess("5x10").map(Guess::value), Ok(5));
    }

    #[test]
    fn advisories_match_the_page_text() {
        assert_eq!(
            alloc::string::ToString::to_string(&InputError::Empty),
            "Please enter a number"
        );
        assert_eq!(
            alloc::string::ToString::to_string(&InputError::NotANumber),
            "Please enter a number between 1 and 100"
        );
    }
}
