//! Hash map used for the sparse tick lookup.
//!
//! Tick indices are small signed integers, so the non-cryptographic hashers
//! are a clear win; the backend is picked with the `rustc-hash` (default),
//! `ahash` or `std-hash` cargo features. Any conflicting combination falls
//! back to the standard library map.

#[cfg(all(
    feature = "rustc-hash",
    not(any(feature = "ahash", feature = "std-hash"))
))]
pub type FastMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(all(
    feature = "ahash",
    not(any(feature = "rustc-hash", feature = "std-hash"))
))]
pub type FastMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(any(
    all(
        not(feature = "rustc-hash"),
        not(feature = "ahash"),
        not(feature = "std-hash")
    ),
    feature = "std-hash",
    all(feature = "rustc-hash", feature = "ahash"),
))]
pub type FastMap<K, V> = std::collections::HashMap<K, V>;
