/// Returns a salted permutation of `alphabet`.
///
/// Pure function of (alphabet contents, seed): the same inputs always
/// yield the same order, and nearby seeds diverge quickly, which is what
/// keeps codes for sequential identifiers from looking sequential. An
/// empty seed leaves the alphabet unchanged.
pub(crate) fn shuffled(alphabet: &[u8], seed: &[u8]) -> Vec<u8> {
    let mut out = alphabet.to_vec();
    if seed.is_empty() {
        return out;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..out.len()).rev() {
        v %= seed.len();
        let t = seed[v] as usize;
        p += t;
        let j = (t + v + p) % i;
        out.swap(i, j);
        v += 1;
    }
    out
}

/// Builds the per-call permutation seed: the lottery character, then the
/// salt, then the alphabet itself, truncated to the alphabet's length.
/// Encode and decode must derive this identically or they stop being
/// inverses.
pub(crate) fn permutation_seed(lottery: u8, salt: &[u8], alphabet: &[u8]) -> Vec<u8> {
    let mut seed = Vec::with_capacity(alphabet.len());
    seed.push(lottery);
    seed.extend_from_slice(salt);
    seed.extend_from_slice(alphabet);
    seed.truncate(alphabet.len());
    seed
}
