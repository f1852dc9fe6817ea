//! Solution digests and the per-batch dedup registry.

use std::collections::HashSet;
use std::fmt::{self, Display};

use gridpunch_core::{Digit, DigitGrid, Position};
use sha2::{Digest as _, Sha256};

/// A SHA-256 digest identifying a grid by its cell values.
///
/// The digest is computed over the 81 cell values in fixed row-major order
/// (`0` for empty cells), so two grids with identical cells produce identical
/// digests. There is no canonicalization across symmetric variants: rotations
/// and reflections of a grid are distinct.
///
/// # Examples
///
/// ```
/// use gridpunch_core::DigitGrid;
/// use gridpunch_generator::SolutionDigest;
///
/// let a = SolutionDigest::of_grid(&DigitGrid::new());
/// let b = SolutionDigest::of_grid(&DigitGrid::new());
/// assert_eq!(a, b);
/// assert_eq!(a.to_string().len(), 64); // hex
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolutionDigest([u8; 32]);

impl SolutionDigest {
    /// Computes the digest of a grid's row-major cell values.
    #[must_use]
    pub fn of_grid(grid: &DigitGrid) -> Self {
        let mut cells = [0_u8; 81];
        for (byte, pos) in cells.iter_mut().zip(Position::ALL) {
            *byte = grid[pos].map_or(0, Digit::value);
        }
        Self(Sha256::digest(cells).into())
    }
}

impl Display for SolutionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A set of solution digests already produced in one generation batch.
///
/// The registry is passed explicitly to the generator rather than living in
/// ambient global state, keeping generation runs independent of each other.
/// It grows monotonically, is never pruned, and is discarded with the batch.
///
/// # Examples
///
/// ```
/// use gridpunch_core::DigitGrid;
/// use gridpunch_generator::{SolutionDigest, SolutionRegistry};
///
/// let mut registry = SolutionRegistry::new();
/// let digest = SolutionDigest::of_grid(&DigitGrid::new());
///
/// assert!(!registry.contains(&digest));
/// assert!(registry.insert(digest));
/// assert!(registry.contains(&digest));
/// assert!(!registry.insert(digest)); // already present
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolutionRegistry {
    seen: HashSet<SolutionDigest>,
}

impl SolutionRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the digest has already been registered.
    #[must_use]
    pub fn contains(&self, digest: &SolutionDigest) -> bool {
        self.seen.contains(digest)
    }

    /// Registers a digest, returning `true` if it was not present before.
    pub fn insert(&mut self, digest: SolutionDigest) -> bool {
        self.seen.insert(digest)
    }

    /// Returns the number of registered digests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_grids_share_a_digest() {
        let grid: DigitGrid = "123456789".repeat(9).parse().unwrap();
        let copy = grid.clone();
        assert_eq!(SolutionDigest::of_grid(&grid), SolutionDigest::of_grid(&copy));
    }

    #[test]
    fn different_grids_have_different_digests() {
        let mut a = DigitGrid::new();
        let mut b = DigitGrid::new();
        a[Position::new(0, 0)] = Some(Digit::D1);
        b[Position::new(0, 0)] = Some(Digit::D2);
        assert_ne!(SolutionDigest::of_grid(&a), SolutionDigest::of_grid(&b));
    }

    #[test]
    fn cell_order_matters() {
        // Same multiset of values in different cells must not collide.
        let mut a = DigitGrid::new();
        let mut b = DigitGrid::new();
        a[Position::new(0, 0)] = Some(Digit::D1);
        b[Position::new(1, 0)] = Some(Digit::D1);
        assert_ne!(SolutionDigest::of_grid(&a), SolutionDigest::of_grid(&b));
    }

    #[test]
    fn registry_tracks_insertions() {
        let mut registry = SolutionRegistry::new();
        assert!(registry.is_empty());

        let digest = SolutionDigest::of_grid(&DigitGrid::new());
        assert!(!registry.contains(&digest));
        assert!(registry.insert(digest));
        assert!(!registry.insert(digest));
        assert!(registry.contains(&digest));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn digest_displays_as_hex() {
        let digest = SolutionDigest::of_grid(&DigitGrid::new());
        let hex = digest.to_string();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
