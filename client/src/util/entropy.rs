//! Seed material for the game RNG.
//!
//! In the browser this mixes `Math.random()` with the wall clock. Elsewhere
//! (SSR, native tests) it falls back to the system clock; the server never
//! spins, so the quality of that seed does not matter.

/// Produce a fresh 64-bit seed.
pub fn entropy_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        let low = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        (high << 32) ^ low ^ (js_sys::Date::now() as u64)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    }
}
