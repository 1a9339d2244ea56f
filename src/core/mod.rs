//! Core run-length codec.
//!
//! Two pipelines, symmetric in structure:
//!
//! - encode: [`tokenize_unencoded`] → [`encode_tokens`] → [`concatenate`]
//! - decode: [`tokenize_encoded`] → [`decode_tokens`] → [`concatenate`]
//!
//! # Architecture
//!
//! - `tokenize`: splits raw text into maximal runs and encoded text back
//!   into encoded tokens. The encoded-side scanner owns the `#`
//!   disambiguation rules and is the bulk of the codec's logic.
//! - `encode` / `decode`: per-token transforms between runs and their
//!   compact forms.
//! - `codec`: the composed pipelines and the concatenation stage.
//! - `error`: the [`RleError`] taxonomy shared by the scanner and the
//!   decoder.
//!
//! Everything operates on in-memory strings, single-threaded, with no
//! state outside the current call. Malformed encoded input fails fast;
//! nothing is retried or repaired.

mod codec;
mod decode;
mod encode;
mod error;
mod tokenize;

pub use codec::{concatenate, decode, encode};
pub use decode::decode_tokens;
pub use encode::encode_tokens;
pub use error::RleError;
pub use tokenize::{tokenize_encoded, tokenize_unencoded};
