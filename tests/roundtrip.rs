//! Property-based round-trip tests for the codec.
//!
//! Key invariants tested:
//! - encode then decode is the identity on ASCII text, including digit
//!   and `#` runs whose encodings need the disambiguation markers;
//! - tokenize then concatenate is the identity on raw text;
//! - every raw token is a non-empty run of one repeated character.

use proptest::prelude::*;
use runlen::{concatenate, decode, encode, tokenize_unencoded};

proptest! {
    /// Arbitrary ASCII text survives a full encode/decode round trip.
    #[test]
    fn ascii_round_trip(s in "[ -~\\n]{0,120}") {
        let encoded = encode(&s);
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    /// The marker-free subset, where no disambiguation is ever needed.
    #[test]
    fn marker_free_round_trip(s in "[a-zA-Z \\n]{0,200}") {
        let encoded = encode(&s);
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    /// Digit-heavy text exercises every separator placement.
    #[test]
    fn digit_and_hash_round_trip(s in "[0-9#\\n]{0,80}") {
        let encoded = encode(&s);
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    /// A single run of any printable character and length round-trips
    /// through whichever long form applies.
    #[test]
    fn single_run_round_trip(ch in proptest::char::range('!', '~'), n in 1usize..64) {
        let s = ch.to_string().repeat(n);
        prop_assert_eq!(decode(&encode(&s)).unwrap(), s);
    }

    /// Tokenizing raw text and concatenating the tokens is the identity.
    #[test]
    fn tokenize_concatenate_identity(s in "[ -~\\n]{0,200}") {
        prop_assert_eq!(concatenate(&tokenize_unencoded(&s)), s);
    }

    /// Raw tokens are non-empty runs of exactly one repeated character.
    #[test]
    fn raw_tokens_are_uniform_runs(s in "[ -~\\n]{0,200}") {
        for token in tokenize_unencoded(&s) {
            prop_assert!(!token.is_empty(), "empty token from {:?}", s);
            let first = token.chars().next().unwrap();
            prop_assert!(
                token.chars().all(|c| c == first),
                "mixed run {:?} from {:?}",
                token,
                s
            );
        }
    }
}
