//! Fluent builder for constructing a [`NavDriver`].

use std::sync::Arc;

use tracing::debug;

use cw_core::NavConfig;
use cw_orientation::{HeadingSource, NullHeadingSource};
use cw_route::WaypointResolver;

use crate::{NavDriver, SimResult};

/// Fluent builder for [`NavDriver<R, S>`].
///
/// # Required inputs
///
/// - `R: WaypointResolver`: the campus (e.g. [`cw_route::CampusLayout`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                         |
/// |------------------------|---------------------------------|
/// | `.config(c)`           | `NavConfig::default()` (30 ms, step 0.15) |
/// | `.heading_source(s)`   | [`NullHeadingSource`], compass stays at 0° |
///
/// # Example
///
/// ```rust,ignore
/// let compass = Arc::new(SimulatedCompass::new(90.0, 4.0, seed));
/// let mut driver = NavBuilder::new(CampusLayout::default())
///     .config(NavConfig { progress_step: 0.5, ..NavConfig::default() })
///     .heading_source(compass)
///     .build()?;
/// ```
pub struct NavBuilder<R: WaypointResolver, S: HeadingSource> {
    config:   NavConfig,
    resolver: R,
    source:   Arc<S>,
}

impl<R: WaypointResolver> NavBuilder<R, NullHeadingSource> {
    pub fn new(resolver: R) -> Self {
        Self {
            config: NavConfig::default(),
            resolver,
            source: Arc::new(NullHeadingSource::default()),
        }
    }
}

impl<R: WaypointResolver, S: HeadingSource + 'static> NavBuilder<R, S> {
    pub fn config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    /// Feed the driver's display compass from `source`.
    pub fn heading_source<S2: HeadingSource + 'static>(self, source: Arc<S2>) -> NavBuilder<R, S2> {
        NavBuilder {
            config:   self.config,
            resolver: self.resolver,
            source,
        }
    }

    /// Validate the timing config and the resolver's geometry, and return an
    /// Idle driver.
    ///
    /// Both checks surface as [`SimError::Config`][crate::SimError::Config].
    pub fn build(self) -> SimResult<NavDriver<R, S>> {
        self.config.validate()?;
        self.resolver.validate()?;
        debug!(
            tick_ms = self.config.tick_interval_ms,
            step = self.config.progress_step,
            ticks_to_arrive = self.config.ticks_to_arrive(),
            "navigation driver built"
        );
        Ok(NavDriver::new(self.config, self.resolver, self.source))
    }
}
