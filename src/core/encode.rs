//! Encoding run tokens into their compact form.

/// Encode each run token as `<count><char>`, with `#` markers where the
/// plain form would be ambiguous.
///
/// The count is marked with a `#` prefix when the run is longer than nine
/// characters (a multi-digit count) and when the previous run's character
/// was a digit, so that the digit is never read as part of this token's
/// count. A run of literal `#` characters takes a `#` postfix to
/// distinguish the character from a count marker. A digit run that ends
/// the sequence also takes the `#` postfix, since there is no following
/// token whose prefix would otherwise separate it.
///
/// Total over any token sequence; a run of any length from one character
/// up is encodable.
///
/// # Example
///
/// ```
/// use runlen::{encode_tokens, tokenize_unencoded};
///
/// let tokens = encode_tokens(&tokenize_unencoded("aaa###"));
/// assert_eq!(tokens, vec!["3a", "3##"]);
/// ```
pub fn encode_tokens(tokens: &[String]) -> Vec<String> {
    let mut encoded = Vec::with_capacity(tokens.len());
    let mut prev_was_digit = false;

    for (idx, token) in tokens.iter().enumerate() {
        let Some(ch) = token.chars().next() else {
            continue;
        };
        let count = token.chars().count();
        let mut out = String::with_capacity(4);

        if count > 9 || prev_was_digit {
            out.push('#');
        }
        out.push_str(&count.to_string());
        out.push(ch);
        if ch == '#' {
            out.push('#');
        }
        if ch.is_ascii_digit() && idx == tokens.len() - 1 {
            out.push('#');
        }

        encoded.push(out);
        prev_was_digit = ch.is_ascii_digit();
    }

    encoded
}
