use rand::Rng;

/// Bounded integer in `[min, max)`.
///
/// All spawn randomization goes through here so the half-open convention is
/// in one place. Callers must pass `min < max`.
pub fn between(min: i32, max: i32) -> i32 {
    rand::rng().random_range(min..max)
}

/// Fair coin flip, used for initial enemy direction.
pub fn coin_flip() -> bool {
    rand::rng().random_bool(0.5)
}
