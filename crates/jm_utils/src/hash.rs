//! Hash containers, re-exports *hashbrown* and *foldhash*.
//!
//! - [`FixedHashState`]: `foldhash` with a fixed seed, results only depend on the input.
//! - [`NoOpHashState`]: passes a written `u64` straight through, for keys that are
//!   already hashes (such as [`TypeId`](core::any::TypeId)).

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

// -----------------------------------------------------------------------------
// FixedHashState

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x4A4D_5F4A_534F_4E31);

/// A hasher whose output only depends on its input.
pub type FixedHasher = FoldHasher<'static>;

/// Builds [`FixedHasher`]s from a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use jm_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("key"), FixedHashState.hash_one("key"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHashState

/// A hasher that keeps the last written `u64` as the hash.
///
/// Byte writes are folded in reverse order with a rotation, so that
/// `write_u64(n)` and a single `write_u32(n)` agree.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use jm_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Containers

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;
