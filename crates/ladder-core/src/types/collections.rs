//! Fx-hashed collections used for word lookups.

pub use rustc_hash::{FxHashMap, FxHashSet};
