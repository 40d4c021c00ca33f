use std::fmt;

/// Money is represented as integer pence to keep scenario arithmetic exact.
/// £1 = 100 pence, so £50.00 = 5000 pence.
pub type Pence = i64;

/// Convert whole pounds into pence.
/// Example: pounds(5000) -> 500000
pub fn pounds(units: i64) -> Pence {
    units * 100
}

/// Format pence as a human-readable sterling string.
/// Example: 5000 -> "£50.00", -1234 -> "-£12.34"
pub fn format_pence(pence: Pence) -> String {
    let sign = if pence < 0 { "-" } else { "" };
    let abs_pence = pence.abs();
    let units = abs_pence / 100;
    let remainder = abs_pence % 100;
    format!("{}£{}.{:02}", sign, units, remainder)
}

/// Parse a money token into pence.
///
/// Accepts the literal forms scenario tables carry: a bare decimal ("150",
/// "12.5"), an optional leading currency sign, and thousands separators
/// ("£5,000", "£1,234.56"). More than two decimal places are truncated.
pub fn parse_pence(input: &str) -> Result<Pence, ParsePenceError> {
    let input = input.trim();
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let input = input.strip_prefix('£').unwrap_or(input);
    let input = input.replace(',', "");

    // Only digits and a decimal point may remain; the sign was consumed above
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(ParsePenceError::InvalidFormat);
    }

    let parts: Vec<&str> = input.split('.').collect();
    match parts.len() {
        1 => {
            // No decimal point, treat as whole pounds
            let units: i64 = parts[0]
                .parse()
                .map_err(|_| ParsePenceError::InvalidFormat)?;
            let pence = units * 100;
            Ok(if negative { -pence } else { pence })
        }
        2 => {
            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| ParsePenceError::InvalidFormat)?
            };

            // Decimal part is padded or truncated to 2 digits
            let decimal_str = parts[1];
            let decimal_pence: i64 = match decimal_str.len() {
                0 => 0,
                1 => {
                    // Single digit like "5" means 50 pence
                    decimal_str
                        .parse::<i64>()
                        .map_err(|_| ParsePenceError::InvalidFormat)?
                        * 10
                }
                2 => decimal_str
                    .parse()
                    .map_err(|_| ParsePenceError::InvalidFormat)?,
                _ => decimal_str[..2]
                    .parse()
                    .map_err(|_| ParsePenceError::InvalidFormat)?,
            };

            let pence = units * 100 + decimal_pence;
            Ok(if negative { -pence } else { pence })
        }
        _ => Err(ParsePenceError::InvalidFormat),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePenceError {
    InvalidFormat,
}

impl fmt::Display for ParsePenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePenceError::InvalidFormat => write!(f, "invalid money format"),
        }
    }
}

impl std::error::Error for ParsePenceError {}
