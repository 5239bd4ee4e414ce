//! A simulated compass for demos without orientation hardware.
//!
//! Each [`sample`][SimulatedCompass::sample] emits `base ± jitter`, drawn from
//! a `SmallRng` seeded at construction, so a given seed always produces the
//! same heading sequence.

use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::source::{ListenerSet, lock};
use crate::{HeadingListener, HeadingSource, ListenerId};

struct CompassState {
    base_deg:   f64,
    jitter_deg: f64,
    rng:        SmallRng,
}

/// A deterministic, noisy heading sensor.
pub struct SimulatedCompass {
    state:     Mutex<CompassState>,
    listeners: Mutex<ListenerSet>,
}

impl SimulatedCompass {
    /// `jitter_deg` is the half-width of the uniform noise band; negative or
    /// non-finite values are treated as 0.
    pub fn new(base_deg: f64, jitter_deg: f64, seed: u64) -> Self {
        let jitter_deg = if jitter_deg.is_finite() { jitter_deg.max(0.0) } else { 0.0 };
        Self {
            state: Mutex::new(CompassState {
                base_deg,
                jitter_deg,
                rng: SmallRng::seed_from_u64(seed),
            }),
            listeners: Mutex::new(ListenerSet::default()),
        }
    }

    /// Point the simulated device somewhere else.
    pub fn set_base(&self, base_deg: f64) {
        lock(&self.state).base_deg = base_deg;
    }

    /// Draw one reading, normalized into `[0, 360)`, deliver it to every
    /// listener, and return it.
    pub fn sample(&self) -> f64 {
        let heading = {
            let mut state = lock(&self.state);
            let jitter = state.jitter_deg;
            let noise = if jitter > 0.0 { state.rng.gen_range(-jitter..=jitter) } else { 0.0 };
            (state.base_deg + noise).rem_euclid(360.0)
        };
        lock(&self.listeners).emit(Some(heading));
        heading
    }
}

impl HeadingSource for SimulatedCompass {
    fn attach(&self, listener: HeadingListener) -> ListenerId {
        lock(&self.listeners).insert(listener)
    }

    fn detach(&self, id: ListenerId) -> bool {
        lock(&self.listeners).remove(id)
    }
}
