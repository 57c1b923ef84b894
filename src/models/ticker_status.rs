use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TickerStatus {
    Running,
    Stopped,
}

impl Display for TickerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickerStatus::Running => write!(f, "Running"),
            TickerStatus::Stopped => write!(f, "Stopped"),
        }
    }
}
