//! Pure-Rust simulation core. Nothing under this module tree depends on
//! `pyo3` — the crate is usable, and its own tests run, without Python.

pub mod classify;
pub mod config;
pub mod correlation;
pub mod innovations;
pub mod integrator;
pub mod jumps;
pub mod regime;
pub mod result;
pub mod rng;
mod simulate;
pub mod stats;
pub mod tensor;
pub mod volatility;

pub use config::{AssetClass, AssetParams, PathUpdateMode, SimulationConfig};
pub use result::{Drawdowns, FanPoint, GoalReport, Metrics, Percentiles, SimulationResult};
pub use simulate::{goal_probability, simulate};
