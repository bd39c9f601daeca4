//! # Nucleoseek Core Library
//!
//! An educational toy that simulates the *discovery* of nuclear stability: a
//! stochastic "inner physics engine" wanders through (proton count Z, neutron
//! count N) space and periodically claims a configuration is stable, while a
//! judge checks each claim against real element data and an approximate
//! valley-of-stability curve, tracking which elements have been found.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict layered architecture to keep the two
//! cooperating algorithms, the random walker and the stability oracle,
//! independently testable and deliberately out of sync with each other.
//!
//! - **[`core`]: The Foundation.** Stateless value types (`Nucleus`,
//!   `Verdict`), the static element catalog, and the pure stability oracle
//!   (exact isotope table with a parametric valley-curve fallback).
//!
//! - **[`engine`]: The Walker.** The stateful inner engine that owns the
//!   current nucleus, a seeded random source, and the set of already-solved
//!   configurations it must avoid revisiting. Its private belief about where
//!   the valley of stability lies is intentionally *different* from the
//!   oracle's: that divergence is the simulated phenomenon.
//!
//! - **[`judge`]: The Arbiter.** Evaluates each claim the engine makes against
//!   the catalog and the oracle, and records every element whose stable form
//!   has been reached, whether or not the engine knew what it had found.
//!
//! - **[`workflows`]: The Public API.** The highest-level layer: a discovery
//!   session that drives one engine step and one judgement per tick, feeds
//!   confirmed results back into the engine, and accumulates a bounded
//!   submission history for presentation.

pub mod core;
pub mod engine;
pub mod judge;
pub mod workflows;
