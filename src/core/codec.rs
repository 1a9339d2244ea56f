//! The two codec pipelines and their shared final stage.
//!
//! Each direction is the same three steps: tokenize, transform each token,
//! concatenate. [`encode`] and [`decode`] compose the steps for callers
//! that only want strings in and strings out.

use super::decode::decode_tokens;
use super::encode::encode_tokens;
use super::error::RleError;
use super::tokenize::{tokenize_encoded, tokenize_unencoded};

/// Join a sequence of token strings into one string, in order, with no
/// separator.
pub fn concatenate(tokens: &[String]) -> String {
    tokens.concat()
}

/// Run-length encode text.
///
/// Total over any input, including text that is already encoded; each
/// call adds exactly one encoding layer.
///
/// # Example
///
/// ```
/// use runlen::encode;
///
/// assert_eq!(encode("aaabbbb"), "3a4b");
/// assert_eq!(encode(""), "");
/// ```
pub fn encode(text: &str) -> String {
    concatenate(&encode_tokens(&tokenize_unencoded(text)))
}

/// Decode run-length encoded text, undoing exactly one encoding layer.
///
/// # Errors
///
/// Returns [`RleError`] when the input cannot be split into encoded
/// tokens or a token's run count is unreadable.
///
/// # Example
///
/// ```
/// use runlen::decode;
///
/// assert_eq!(decode("3a4b").unwrap(), "aaabbbb");
/// assert!(decode("oops").is_err());
/// ```
pub fn decode(text: &str) -> Result<String, RleError> {
    Ok(concatenate(&decode_tokens(&tokenize_encoded(text)?)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenate_joins_in_order() {
        let tokens = vec!["aa".to_string(), "b".to_string(), "".to_string()];
        assert_eq!(concatenate(&tokens), "aab");
        assert_eq!(concatenate(&[]), "");
    }

    #[test]
    fn encode_empty_is_empty() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn decode_empty_is_empty() {
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn pipelines_invert_each_other() {
        let text = "wwwwhat a ssstring";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn reencoding_adds_one_layer_per_pass() {
        let text = "aaa";
        let once = encode(text);
        let twice = encode(&once);
        assert_eq!(decode(&twice).unwrap(), once);
        assert_eq!(decode(&once).unwrap(), text);
    }
}
