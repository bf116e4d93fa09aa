//! Testability ports for injecting randomness.
//!
//! Use cases never reach for `rand` directly; they draw through
//! [`RandomPort`], so production code gets a real generator and tests get a
//! seeded one or a `MockRandomPort`.

// =============================================================================
// Testability Ports
// =============================================================================

/// Uniform random source.
///
/// # Implementations
///
/// - `ThreadRngRandom` (production, uses `rand::thread_rng()`)
/// - `SeededRandom` (reproducible runs and statistical tests)
/// - `MockRandomPort` via mockall (testing)
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Generate an i32 uniformly over the full signed range.
    fn random_i32(&self) -> i32;

    /// Generate an i32 in range [min, max] (inclusive on both ends).
    ///
    /// Callers guarantee `min <= max`.
    fn random_range(&self, min: i32, max: i32) -> i32;
}
