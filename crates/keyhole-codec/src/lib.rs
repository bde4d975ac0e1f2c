//! Reversible ID-obfuscation codec for the Keyhole URL shortener.
//!
//! Maps monotonically increasing integer identifiers to short,
//! non-sequential, URL-safe codes and back. Sequential identifiers do
//! not produce visually sequential codes, codes never fall below a
//! configured minimum length, and any string the codec did not itself
//! produce decodes to an explicit invalid outcome.

mod codec;
pub mod error;
mod settings;
mod shuffle;

pub use codec::Codec;
pub use error::{CodecError, InvalidCode};
pub use settings::{CodecSettings, DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH};
