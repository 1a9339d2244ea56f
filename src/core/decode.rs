//! Decoding encoded tokens back into the runs they describe.

use super::error::RleError;

/// Decode each encoded token into its expanded run, in order.
///
/// Three token shapes are recognized, checked in this order:
///
/// - exactly two characters: a single-digit count and the run character;
/// - a trailing `#`: a run of literal `#`, counted by everything before
///   the final two characters;
/// - anything else: a long plain run, counted by everything before the
///   final character.
///
/// # Errors
///
/// Returns [`RleError::MalformedCount`] when a token's count does not
/// parse as a non-negative integer, including empty and one-character
/// tokens.
pub fn decode_tokens(tokens: &[String]) -> Result<Vec<String>, RleError> {
    tokens.iter().map(|token| decode_token(token)).collect()
}

fn decode_token(token: &str) -> Result<String, RleError> {
    let chars: Vec<char> = token.chars().collect();

    if let &[count, ch] = chars.as_slice() {
        let count = count
            .to_digit(10)
            .ok_or_else(|| malformed_count(token))? as usize;
        return Ok(ch.to_string().repeat(count));
    }

    match chars.split_last() {
        Some((&'#', rest)) if !rest.is_empty() => {
            let count = parse_count(&rest[..rest.len() - 1], token)?;
            Ok("#".repeat(count))
        }
        Some((&ch, rest)) => {
            let count = parse_count(rest, token)?;
            Ok(ch.to_string().repeat(count))
        }
        None => Err(malformed_count(token)),
    }
}

fn parse_count(digits: &[char], token: &str) -> Result<usize, RleError> {
    let digits: String = digits.iter().collect();
    digits.parse().map_err(|_| malformed_count(token))
}

fn malformed_count(token: &str) -> RleError {
    RleError::MalformedCount {
        token: token.to_string(),
    }
}
