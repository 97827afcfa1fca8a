//! The measure-and-publish operation.

use log::{debug, trace};

use crate::errors::SyncError;
use crate::geometry::{measure, Measurement};
use crate::options::SyncOptions;
use crate::style::{GeometrySource, StyleSink};

/// Why a synchronization ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The page finished loading.
    Load,
    /// The viewport was resized.
    Resize,
    /// Requested directly by the embedding code.
    Manual,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Trigger::Load => "load",
            Trigger::Resize => "resize",
            Trigger::Manual => "manual",
        })
    }
}

/// Result of a synchronization that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Both properties were written with this measurement.
    Updated(Measurement),
    /// The target element is absent; nothing was written.
    TargetMissing,
}

impl SyncOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, SyncOutcome::Updated(_))
    }

    pub fn measurement(&self) -> Option<Measurement> {
        match self {
            SyncOutcome::Updated(m) => Some(*m),
            SyncOutcome::TargetMissing => None,
        }
    }
}

/// Measure the target element and publish width and height to `sink`.
///
/// An absent target is a silent no-op: the sink is untouched and previously
/// published values persist. Each call recomputes from current geometry.
pub fn synchronize<G, S>(
    source: &G,
    sink: &mut S,
    options: &SyncOptions,
) -> Result<SyncOutcome, SyncError>
where
    G: GeometrySource + ?Sized,
    S: StyleSink + ?Sized,
{
    let Some(size) = source.outer_size(&options.element_id) else {
        trace!("#{} not found, leaving properties unchanged", options.element_id);
        return Ok(SyncOutcome::TargetMissing);
    };

    let measurement = measure(size, options);
    for (name, value) in measurement.declarations(options) {
        sink.set_property(name, &value)?;
    }

    debug!(
        "#{} {}x{} -> {}={}px {}={}px",
        options.element_id,
        size.width,
        size.height,
        options.width_property,
        measurement.width,
        options.height_property,
        measurement.height,
    );
    Ok(SyncOutcome::Updated(measurement))
}

/// A geometry source and style sink bound together with fixed options.
#[derive(Debug)]
pub struct Synchronizer<G, S> {
    source: G,
    sink: S,
    options: SyncOptions,
    last: Option<Measurement>,
}

impl<G: GeometrySource, S: StyleSink> Synchronizer<G, S> {
    pub fn new(source: G, sink: S, options: SyncOptions) -> Self {
        Self {
            source,
            sink,
            options,
            last: None,
        }
    }

    /// Run one synchronization.
    pub fn run(&mut self, trigger: Trigger) -> Result<SyncOutcome, SyncError> {
        trace!("sync triggered by {}", trigger);
        let outcome = synchronize(&self.source, &mut self.sink, &self.options)?;
        if let SyncOutcome::Updated(m) = outcome {
            self.last = Some(m);
        }
        Ok(outcome)
    }

    /// The most recently published measurement, if any run has updated.
    pub fn last(&self) -> Option<Measurement> {
        self.last
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn source(&self) -> &G {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut G {
        &mut self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (G, S) {
        (self.source, self.sink)
    }
}
