use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::error::Error;




/**
 * Draw `count` distinct keys uniformly from the closed range [0, range], in
 * the order they were first drawn. Fails if the range holds fewer than
 * `count` values.
 */
pub fn random_keys<R: Rng>(range: u32, count: usize, rng: &mut R) -> Result<Vec<u32>, Error<u32>> {
    if count as u64 > range as u64 + 1 {
        return Err(Error::KeyRange { range, count })
    }
    let mut keys = Vec::with_capacity(count);

    while keys.len() < count {
        let key = rng.gen_range(0..=range);

        if !keys.contains(&key) {
            keys.push(key)
        }
    }
    Ok(keys)
}




/**
 * Like `random_keys`, with a reproducible generator seeded from `seed`.
 */
pub fn seeded_keys(range: u32, count: usize, seed: u64) -> Result<Vec<u32>, Error<u32>> {
    random_keys(range, count, &mut StdRng::seed_from_u64(seed))
}
