//! Decides when the startup health-check fires.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use super::boot::HealthCheckPolicy;

/// Per-mount record of health-checks already sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthCheckGate {
    policy: HealthCheckPolicy,
    fired: u32,
    last_path: Option<String>,
}

impl HealthCheckGate {
    pub fn new(policy: HealthCheckPolicy) -> Self {
        Self { policy, fired: 0, last_path: None }
    }

    /// Called whenever the root observes `path`. Returns `true` when a request
    /// should be sent now.
    pub fn admit(&mut self, path: &str) -> bool {
        let fire = match self.policy {
            HealthCheckPolicy::OncePerMount => self.fired == 0,
            HealthCheckPolicy::PerNavigation => self.last_path.as_deref() != Some(path),
        };
        self.last_path = Some(path.to_owned());
        if fire {
            self.fired += 1;
        }
        fire
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }
}
