use crate::error::{CodecError, InvalidCode};
use crate::settings::CodecSettings;
use crate::shuffle::{permutation_seed, shuffled};

/// Symbols reserved as separators when they occur in the source alphabet.
/// Chosen by the hashids algorithm family to avoid accidental curse words
/// in adjacent output characters.
const SEPARATOR_CANDIDATES: &[u8] = b"cfhistuCFHISTU";

/// Target ratio of working-alphabet size to separator-set size.
const SEPARATOR_RATIO: f64 = 3.5;

/// Ratio of working-alphabet size to guard-set size.
const GUARD_RATIO: f64 = 12.0;

/// Smallest alphabet from which non-empty separator and guard sets can
/// still be derived.
const MIN_ALPHABET_LEN: usize = 16;

/// Reversible identifier obfuscation codec.
///
/// Constructed once at process start from a [`CodecSettings`] and shared
/// read-only from then on; both operations are pure functions over the
/// derived state, so any number of calls may run in parallel.
///
/// ```
/// use keyhole_codec::{Codec, CodecSettings};
///
/// let codec = Codec::new(CodecSettings::builder().salt("secret").build()).unwrap();
/// let code = codec.encode(916132832);
/// assert!(code.len() >= 6);
/// assert_eq!(codec.decode(&code), Ok(916132832));
/// ```
#[derive(Debug, Clone)]
pub struct Codec {
    /// Working alphabet: source symbols minus separators and guards,
    /// pre-shuffled with the salt.
    alphabet: Vec<u8>,
    separators: Vec<u8>,
    guards: Vec<u8>,
    salt: Vec<u8>,
    min_length: usize,
}

impl Codec {
    /// Builds a codec, deriving the separator set, guard set, and working
    /// alphabet from the settings.
    ///
    /// Fails if the alphabet is not ASCII, contains duplicate symbols, or
    /// has fewer than 16 symbols.
    pub fn new(settings: CodecSettings) -> Result<Self, CodecError> {
        if !settings.alphabet.is_ascii() {
            return Err(CodecError::NonAsciiAlphabet);
        }

        let source = settings.alphabet.as_bytes();
        let mut seen = [false; 128];
        for &symbol in source {
            if seen[symbol as usize] {
                return Err(CodecError::DuplicateSymbol(symbol as char));
            }
            seen[symbol as usize] = true;
        }

        if source.len() < MIN_ALPHABET_LEN {
            return Err(CodecError::AlphabetTooSmall {
                len: source.len(),
                min: MIN_ALPHABET_LEN,
            });
        }

        let salt = settings.salt.into_bytes();

        // Partition the source alphabet into separators and numerals,
        // then rebalance until the separator set is non-empty and no
        // larger than the ratio allows.
        let mut separators: Vec<u8> = SEPARATOR_CANDIDATES
            .iter()
            .copied()
            .filter(|c| source.contains(c))
            .collect();
        let mut alphabet: Vec<u8> = source
            .iter()
            .copied()
            .filter(|c| !separators.contains(c))
            .collect();

        separators = shuffled(&separators, &salt);

        if separators.is_empty()
            || alphabet.len() as f64 / separators.len() as f64 > SEPARATOR_RATIO
        {
            let mut needed = (alphabet.len() as f64 / SEPARATOR_RATIO).ceil() as usize;
            if needed == 1 {
                needed = 2;
            }
            if needed > separators.len() {
                let diff = needed - separators.len();
                separators.extend_from_slice(&alphabet[..diff]);
                alphabet.drain(..diff);
            }
        }

        alphabet = shuffled(&alphabet, &salt);

        let guard_count = (alphabet.len() as f64 / GUARD_RATIO).ceil() as usize;
        let guards;
        if alphabet.len() < 3 {
            guards = separators[..guard_count].to_vec();
            separators.drain(..guard_count);
        } else {
            guards = alphabet[..guard_count].to_vec();
            alphabet.drain(..guard_count);
        }

        Ok(Self {
            alphabet,
            separators,
            guards,
            salt,
            min_length: settings.min_length,
        })
    }

    /// Encodes an identifier into a short code.
    ///
    /// Total and deterministic: every `u64` yields a code, and the same
    /// identifier always yields byte-identical output.
    pub fn encode(&self, id: u64) -> String {
        // Low-order seed of the identifier; picks the lottery character
        // and offsets the guard choices below.
        let id_hash = (id % 100) as usize;
        let lottery = self.alphabet[id_hash % self.alphabet.len()];

        let mut code: Vec<u8> = Vec::with_capacity(self.min_length.max(8));
        code.push(lottery);

        // Per-call permutation primed by the lottery character, so the
        // digit mapping is not linearly related to the identifier.
        let seed = permutation_seed(lottery, &self.salt, &self.alphabet);
        let mut alphabet = shuffled(&self.alphabet, &seed);
        Self::push_digits(&mut code, id, &alphabet);

        // Guard padding, then halved-alphabet extension for anything the
        // guards alone cannot cover. Mirrored exactly by `decode`.
        if code.len() < self.min_length {
            let guard = self.guards[(id_hash + code[0] as usize) % self.guards.len()];
            code.insert(0, guard);

            if code.len() < self.min_length {
                let guard = self.guards[(id_hash + code[2] as usize) % self.guards.len()];
                code.push(guard);
            }
        }

        let half = alphabet.len() / 2;
        while code.len() < self.min_length {
            let reseed = alphabet.clone();
            alphabet = shuffled(&alphabet, &reseed);

            let mut padded = Vec::with_capacity(alphabet.len() + code.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.append(&mut code);
            padded.extend_from_slice(&alphabet[..half]);
            code = padded;

            // One extension round may still fall short of a long minimum
            // length; only trim once the code is actually over-long and
            // let the loop keep extending otherwise.
            if code.len() > self.min_length {
                let excess = code.len() - self.min_length;
                let start = excess / 2;
                code.truncate(start + self.min_length);
                code.drain(..start);
            }
        }

        // The alphabet is ASCII by construction.
        code.iter().map(|&b| b as char).collect()
    }

    /// Decodes a string back into the identifier it was encoded from.
    ///
    /// Returns [`InvalidCode`] for anything this codec did not produce:
    /// empty input, foreign characters, structurally inconsistent
    /// strings, and strings minted under a different salt all look the
    /// same from the outside.
    pub fn decode(&self, input: &str) -> Result<u64, InvalidCode> {
        if input.is_empty() || !input.is_ascii() {
            return Err(InvalidCode);
        }

        let bytes = input.as_bytes();
        if !bytes.iter().all(|&b| self.is_symbol(b)) {
            return Err(InvalidCode);
        }

        // Guards pad the outside of the code; the numeral run is the
        // whole string, or the middle segment when guards are present.
        let segments: Vec<&[u8]> = bytes
            .split(|b| self.guards.contains(b))
            .collect();
        let core = match segments.len() {
            1 => segments[0],
            2 | 3 => segments[1],
            _ => return Err(InvalidCode),
        };

        let (&lottery, digits) = core.split_first().ok_or(InvalidCode)?;
        if digits.is_empty() {
            return Err(InvalidCode);
        }
        // A single identifier is encoded per code, so separators never
        // appear inside the numeral run.
        if digits.iter().any(|b| self.separators.contains(b)) {
            return Err(InvalidCode);
        }

        let seed = permutation_seed(lottery, &self.salt, &self.alphabet);
        let alphabet = shuffled(&self.alphabet, &seed);

        let base = alphabet.len() as u64;
        let mut id: u64 = 0;
        for &symbol in digits {
            let digit = alphabet
                .iter()
                .position(|&a| a == symbol)
                .ok_or(InvalidCode)? as u64;
            id = id
                .checked_mul(base)
                .and_then(|v| v.checked_add(digit))
                .ok_or(InvalidCode)?;
        }

        // The permutation peeling above happily produces *some* integer
        // for many strings the encoder never minted. Re-encoding the
        // candidate and comparing byte-for-byte is what makes decode the
        // exact inverse of encode and nothing more.
        if self.encode(id) != input {
            return Err(InvalidCode);
        }

        Ok(id)
    }

    /// Minimum length of every code this codec produces.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    fn is_symbol(&self, b: u8) -> bool {
        self.alphabet.contains(&b) || self.separators.contains(&b) || self.guards.contains(&b)
    }

    /// Appends `id` in base `alphabet.len()`, most-significant digit
    /// first. Zero still yields one digit.
    fn push_digits(code: &mut Vec<u8>, mut id: u64, alphabet: &[u8]) {
        let base = alphabet.len() as u64;
        let start = code.len();
        loop {
            code.push(alphabet[(id % base) as usize]);
            id /= base;
            if id == 0 {
                break;
            }
        }
        code[start..].reverse();
    }
}
