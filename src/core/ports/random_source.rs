//! Random source port

/// Picks indices uniformly at random
///
/// Injected into random selection so tests can script the sequence.
pub trait RandomSource {
    /// Return an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}
