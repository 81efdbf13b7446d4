use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source shared by the engines.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    }
}
