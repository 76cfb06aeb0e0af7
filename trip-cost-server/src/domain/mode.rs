//! Transportation modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transportation category with its own fare table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Bus,
    Train,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Mode; 2] = [Mode::Bus, Mode::Train];

    /// Lowercase name used in messages and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Bus => "bus",
            Mode::Train => "train",
        }
    }

    /// Name of the CSV file holding this mode's fares.
    pub fn file_name(&self) -> &'static str {
        match self {
            Mode::Bus => "bus_costs.csv",
            Mode::Train => "train_costs.csv",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
