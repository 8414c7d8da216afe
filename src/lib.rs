//----------------------------------------
// Root lib
//----------------------------------------
//! Density curves and an approximate F ratio for teaching one-way ANOVA.
//!
//! Three normal groups share a within-group spread: a control at zero, a
//! first treatment shifted right by the effect size, and a second treatment
//! shifted left by half of it. Moving them apart (or narrowing them) shrinks
//! their overlap and grows the F value.

/// This module houses the public API for computing curves, overlap and the
/// summary statistic
pub mod compute;
pub mod density;
/// This module contains error types
pub mod error;
pub mod overlap;
pub mod params;
pub mod render;
pub mod statistic;
