// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Simulation Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simulation driver: folds the decay step over a scenario's timespan.

use decay_types::error::{DecayError, DecayResult};
use decay_types::scenario::Scenario;
use decay_types::state::{DecayHistory, Inventory};
use decay_types::table::IsotopeTable;
use tracing::debug;

use crate::step::decay_step;

/// Sequential decay-chain simulator.
///
/// Holds the current inventory and total elapsed time; the reference table
/// is borrowed and never modified. The entire run is one linear fold over
/// the step count, deterministic for identical inputs.
pub struct SimulationDriver<'a> {
    table: &'a IsotopeTable,
    inventory: Inventory,
    elapsed_s: f64,
}

impl<'a> SimulationDriver<'a> {
    /// Create a driver with an explicit seed inventory.
    pub fn new(table: &'a IsotopeTable, seeds: Inventory) -> Self {
        SimulationDriver {
            table,
            inventory: seeds,
            elapsed_s: 0.0,
        }
    }

    /// Create a driver from a validated scenario.
    pub fn from_scenario(table: &'a IsotopeTable, scenario: &Scenario) -> DecayResult<Self> {
        scenario.validate()?;
        Ok(Self::new(table, scenario.seeds.clone()))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    /// Advance the inventory by one interval of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.inventory = decay_step(&self.inventory, self.table, dt);
        self.elapsed_s += dt;
    }

    /// Fold `divisions` equal steps over `duration_s`, recording the
    /// current inventory at `index * step_size` before each step.
    ///
    /// Every isotope alive at any point gets a series; daughters born
    /// mid-run get one that starts at their first recorded appearance.
    pub fn run(&mut self, duration_s: f64, divisions: usize) -> DecayResult<DecayHistory> {
        if divisions == 0 {
            return Err(DecayError::ConfigError(
                "divisions must be >= 1".to_string(),
            ));
        }
        let step_size_s = duration_s / divisions as f64;
        debug!(duration_s, divisions, step_size_s, "starting decay run");

        let mut history = DecayHistory::new(divisions, step_size_s);
        for index in 0..divisions {
            history.record(index as f64 * step_size_s, &self.inventory);
            self.step(step_size_s);
        }

        debug!(
            elapsed_s = self.elapsed_s,
            species = history.series.len(),
            "decay run complete"
        );
        Ok(history)
    }
}

/// Run one scenario end to end against a reference table.
pub fn run_scenario(table: &IsotopeTable, scenario: &Scenario) -> DecayResult<DecayHistory> {
    let mut driver = SimulationDriver::from_scenario(table, scenario)?;
    driver.run(scenario.duration_seconds()?, scenario.divisions)
}
