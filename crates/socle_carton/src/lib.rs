//! Carton - The shared toolbox for Socle.
//!
//! This crate provides the foundational utilities for the Socle bridge,
//! much like a carton (artist's portfolio case) holds the essential tools
//! and materials the rest of the workspace reaches for.
//!
//! # Modules
//!
//! - **naming**: conversions between camelCase property names and
//!   hyphenated attribute names
//! - **coerce**: lexical coercion of raw attribute strings into typed
//!   values, and the best-effort inverse used when serializing back onto
//!   an attribute
//!
//! # Example
//!
//! ```
//! use socle_carton::{camelize, hyphenate, AttrValue};
//!
//! assert_eq!(camelize("user-name"), "userName");
//! assert_eq!(hyphenate("userName"), "user-name");
//! assert_eq!(AttrValue::coerce("42"), AttrValue::Number(42.0));
//! ```

pub mod coerce;
pub mod naming;

pub use coerce::AttrValue;
pub use naming::{camelize, hyphenate};

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};
