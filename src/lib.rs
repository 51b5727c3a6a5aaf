use pyo3::prelude::*;

pub mod engine;
mod error;
mod facade;

use facade::{
    goal_probability, simulate, AssetInput, Drawdowns, FanPoint, GoalReport, Metrics,
    Percentiles, SimulationConfig, SimulationResult,
};

/// A Python module implemented in Rust for Monte Carlo portfolio simulation.
///
/// - `AssetInput`: one asset's weight/mean/volatility
/// - `SimulationConfig`: model toggles and tunable parameters
/// - `simulate`: run the simulation, returning a `SimulationResult`
/// - `SimulationResult`: final values, metrics, percentiles, drawdowns, fan
///   chart, and sample paths
/// - `goal_probability`: probability of reaching a target value
#[pymodule]
fn portfolio_monte_carlo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<AssetInput>()?;
    m.add_class::<SimulationConfig>()?;
    m.add_class::<SimulationResult>()?;
    m.add_class::<Metrics>()?;
    m.add_class::<Percentiles>()?;
    m.add_class::<Drawdowns>()?;
    m.add_class::<FanPoint>()?;
    m.add_class::<GoalReport>()?;

    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(goal_probability, m)?)?;
    Ok(())
}
