//! Tunable practice amounts

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How much proficiency practice each combat event is worth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeConstants {
    /// Seconds of practice for landing a hit
    #[serde(default = "default_hit_seconds")]
    pub hit_seconds: u64,
    /// Seconds of practice for a kill
    #[serde(default = "default_kill_seconds")]
    pub kill_seconds: u64,
    /// Seconds of practice for a dissection
    #[serde(default = "default_dissect_seconds")]
    pub dissect_seconds: u64,
}

impl Default for PracticeConstants {
    fn default() -> Self {
        PracticeConstants {
            hit_seconds: default_hit_seconds(),
            kill_seconds: default_kill_seconds(),
            dissect_seconds: default_dissect_seconds(),
        }
    }
}

fn default_hit_seconds() -> u64 {
    60
}
fn default_kill_seconds() -> u64 {
    5 * 60
}
fn default_dissect_seconds() -> u64 {
    30 * 60
}

impl PracticeConstants {
    pub fn hit(&self) -> Duration {
        Duration::from_secs(self.hit_seconds)
    }

    pub fn kill(&self) -> Duration {
        Duration::from_secs(self.kill_seconds)
    }

    pub fn dissect(&self) -> Duration {
        Duration::from_secs(self.dissect_seconds)
    }
}
