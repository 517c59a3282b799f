//! Well-known priorities.
//!
//! Lower values are dispatched first. Any `i32` is a valid priority; these
//! constants only name the common tiers.

/// Dispatched before everything at the default tier.
pub const HIGH: i32 = 0;

/// The default priority of a registration.
pub const MEDIUM: i32 = 1;

/// Dispatched after the default tier.
pub const LOW: i32 = 2;
