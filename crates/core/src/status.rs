//! Row status values.
//!
//! Generated assets are always `READY` and creatives are always `ACTIVE`;
//! no other transition exists.

/// Status written on every headline and image row.
pub const ASSET_READY: &str = "READY";

/// Status written on every creative row, including re-pairs.
pub const CREATIVE_ACTIVE: &str = "ACTIVE";
