//! Pacing Engine — deterministic story-arc synthesis for campaign games.
//!
//! Places dramatic beats across a fixed-length campaign according to a
//! configurable intensity profile, guaranteeing the structural phases
//! (introduction, rising tension, a single climax, resolution and
//! celebration) at caller-chosen positions. Pure computation: no I/O at
//! generation time, byte-identical output for a given configuration and seed.

pub mod core;
pub mod schema;
