use byteorder::{ByteOrder, NativeEndian};

/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    let mut seed = [0_u8; 16];

    getrandom::getrandom(&mut seed)?;

    Ok(split_seed(&seed))
}

fn split_seed(seed: &[u8; 16]) -> (u64, u64) {
    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}
