//! Runlen - run-length codec for ASCII text
//!
//! Replaces runs of a repeated character with a count-prefixed encoding
//! and reverses the transformation:
//!
//! - `aaa` becomes `3a`
//! - ten `a`s become `#10a` (counts above 9 carry a `#` prefix)
//! - `111` becomes `31#` (a digit run carries a `#` separator so the run
//!   character is not read as part of the next token's count)
//! - `###` becomes `3##` (runs of literal `#` carry a `#` postfix)
//!
//! Each pipeline is tokenize, then transform each token, then
//! concatenate. The composed [`encode`] and [`decode`] cover the common
//! case:
//!
//! ```
//! use runlen::{decode, encode};
//!
//! let encoded = encode("aaabbbb");
//! assert_eq!(encoded, "3a4b");
//! assert_eq!(decode(&encoded).unwrap(), "aaabbbb");
//! ```
//!
//! Encoding is defined on any text, including already-encoded text, but
//! decoding undoes exactly one encoding pass; callers stacking layers
//! must track the count themselves.

pub mod core;

pub use self::core::{
    concatenate, decode, decode_tokens, encode, encode_tokens, tokenize_encoded,
    tokenize_unencoded, RleError,
};
