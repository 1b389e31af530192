/// Hashes a seed string into the numeric seed fed to [`crate::rng::Mulberry32`].
///
/// Polynomial rolling hash with multiplier 31 over the UTF-16 code units of
/// `seed`, accumulated in wrapping `i32` arithmetic. The absolute value of the
/// accumulator is returned, so `i32::MIN` maps to `2_147_483_648`.
///
/// Not collision resistant: distinct convocation ids can share a seed.
///
/// ```rust
/// use convoca_engine::seed::hash_seed;
///
/// assert_eq!(hash_seed(""), 0);
/// assert_eq!(hash_seed("a"), 97);
/// assert_eq!(hash_seed("conv-123"), 567_203_815);
/// ```
pub fn hash_seed(seed: &str) -> u32 {
    let acc = seed.encode_utf16().fold(0i32, |acc, unit| {
        // (acc << 5) - acc == 31 * acc
        (acc << 5).wrapping_sub(acc).wrapping_add(i32::from(unit))
    });
    acc.unsigned_abs()
}
