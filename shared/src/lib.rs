//! Shared types and core logic for the Route 360 Flood & Weather Alert System
//!
//! This crate holds everything that is independent of how results are shown:
//! the synthetic weather sampler, the flood alert classifier, the five-day
//! forecast projector and the view-state they compose into. It is used by the
//! HTTP shell (backend) and the browser bindings (wasm).
//!
//! Every operation here is synchronous and total. Randomness is always passed
//! in as a `rand::Rng`, so callers decide between a seeded generator (tests,
//! reproducible demos) and an entropy-seeded one.

pub mod classifier;
pub mod models;
pub mod projector;
pub mod report;
pub mod sampler;
pub mod types;
pub mod validation;

pub use classifier::*;
pub use models::*;
pub use projector::*;
pub use report::*;
pub use sampler::*;
pub use types::*;
pub use validation::*;
