//! Lookup keys for `random_lookup`.

use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::warn;

/// Byte repeated across the key when the random source is unavailable.
pub(crate) const FALLBACK_BYTE: u8 = b'A';

/// Draw `len` bytes from the operating system's random source.
pub(crate) fn random_key(len: usize) -> Vec<u8> {
    fill_key(&mut OsRng, len)
}

/// Fill a key from `rng`, degrading to a fixed pattern instead of failing.
pub(crate) fn fill_key<R: TryRngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    if let Err(err) = rng.try_fill_bytes(&mut key) {
        warn!(error = %err, "random source failed, using fallback lookup key");
        metrics::counter!("hashring_random_fallback_total").increment(1);
        key.fill(FALLBACK_BYTE);
    }
    key
}
