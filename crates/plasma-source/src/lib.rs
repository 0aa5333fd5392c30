//! Fusion neutron source sampling for tokamak, ring and point emitters.
//!
//! Core pipeline: validated parameters → radial profiles → reactivities →
//! normalized per-sample strengths → (R, Z) placement → weighted sources.

pub mod channels;
pub mod distribution;
pub mod fuel;
pub mod geometry;
pub mod params;
pub mod point;
pub mod profiles;
pub mod reactivity;
pub mod ring;
pub mod sampler;
pub mod source;
pub mod spectrum;
pub mod tokamak;
