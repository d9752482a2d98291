//! Rolling-window liveness aggregation
//!
//! Components register a probe at startup; observations land in a bounded
//! in-memory ring and reports aggregate the trailing window. A component
//! with no observation inside the window is `unknown`, which counts
//! against overall health the same as `degraded`.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Keep only this many observations in memory
const MAX_OBSERVATIONS: usize = 5000;

/// Liveness status of a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Degraded,
    Unknown,
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentStatus::Ok => write!(f, "ok"),
            ComponentStatus::Degraded => write!(f, "degraded"),
            ComponentStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Aggregated registry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Ok,
    Degraded,
}

/// One liveness observation for one component
#[derive(Debug, Clone)]
struct Observation {
    component: String,
    status: ComponentStatus,
    observed_at: DateTime<Utc>,
}

/// Per-component entry in a health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub id: String,
    pub status: ComponentStatus,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Health report over a trailing window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: OverallStatus,
    pub components: Vec<ComponentHealth>,
    pub window_minutes: i64,
    pub generated_at: DateTime<Utc>,
}

type Probe = Box<dyn Fn() -> ComponentStatus + Send + Sync>;

#[derive(Default)]
struct Inner {
    /// (component name, probe) pairs, registration order
    probes: RwLock<Vec<(String, Probe)>>,
    observations: RwLock<VecDeque<Observation>>,
}

/// Handle to the shared health reporter. Cheap to clone.
#[derive(Clone, Default)]
pub struct HealthReporter {
    inner: Arc<Inner>,
}

impl HealthReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a component and the probe that checks its reachability.
    ///
    /// Probes must be pure in-memory checks: they run inside `report`,
    /// which is expected to complete in bounded time.
    pub fn register_probe(
        &self,
        component: impl Into<String>,
        probe: impl Fn() -> ComponentStatus + Send + Sync + 'static,
    ) {
        let mut probes = self.write_probes();
        probes.push((component.into(), Box::new(probe)));
    }

    /// Record a liveness observation for a component
    pub fn record(&self, component: impl Into<String>, status: ComponentStatus) {
        let mut observations = self.write_observations();
        if observations.len() == MAX_OBSERVATIONS {
            observations.pop_front();
        }
        observations.push_back(Observation {
            component: component.into(),
            status,
            observed_at: Utc::now(),
        });
    }

    /// Aggregate component liveness over the trailing window.
    ///
    /// Never fails. Runs every registered probe (recording the result),
    /// then reports each declared component's most recent in-window
    /// observation. Overall status is `ok` iff every component is `ok`.
    pub fn report(&self, window_minutes: i64) -> HealthReport {
        // Run probes first, then record outside the probes lock.
        let results: Vec<(String, ComponentStatus)> = self
            .read_probes()
            .iter()
            .map(|(component, probe)| (component.clone(), probe()))
            .collect();
        for (component, status) in &results {
            self.record(component.clone(), *status);
        }

        let cutoff = Utc::now() - Duration::minutes(window_minutes);
        let observations = self.read_observations();

        let components: Vec<ComponentHealth> = self
            .read_probes()
            .iter()
            .map(|(component, _)| {
                let latest = observations
                    .iter()
                    .rev()
                    .find(|o| &o.component == component && o.observed_at >= cutoff);
                match latest {
                    Some(o) => ComponentHealth {
                        id: component.clone(),
                        status: o.status,
                        observed_at: Some(o.observed_at),
                    },
                    None => ComponentHealth {
                        id: component.clone(),
                        status: ComponentStatus::Unknown,
                        observed_at: None,
                    },
                }
            })
            .collect();

        let all_ok = components
            .iter()
            .all(|c| c.status == ComponentStatus::Ok);

        HealthReport {
            status: if all_ok {
                OverallStatus::Ok
            } else {
                OverallStatus::Degraded
            },
            components,
            window_minutes,
            generated_at: Utc::now(),
        }
    }

    /// Drop all recorded observations (used by registry reset)
    pub fn clear(&self) {
        self.write_observations().clear();
    }

    fn read_probes(&self) -> std::sync::RwLockReadGuard<'_, Vec<(String, Probe)>> {
        self.inner.probes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_probes(&self) -> std::sync::RwLockWriteGuard<'_, Vec<(String, Probe)>> {
        self.inner.probes.write().unwrap_or_else(|e| e.into_inner())
    }

    fn read_observations(&self) -> std::sync::RwLockReadGuard<'_, VecDeque<Observation>> {
        self.inner
            .observations
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn write_observations(&self) -> std::sync::RwLockWriteGuard<'_, VecDeque<Observation>> {
        self.inner
            .observations
            .write()
            .unwrap_or_else(|e| e.into_inner())
    }
}
