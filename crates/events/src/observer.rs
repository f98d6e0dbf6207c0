//! Observers: where lifecycle events go once the tracer has stamped them.

use std::io::Write;
use std::sync::{Arc, Mutex};

use lifespan_core::{LifecycleError, LifecycleResult};

use crate::bus::EventBus;
use crate::lifecycle::LifecycleEvent;
use crate::Event;

/// Receives every lifecycle event a [`crate::Tracer`] emits.
///
/// Observation is infallible from the caller's point of view: events are also
/// emitted from `Drop`, where nothing can be propagated. Implementations log
/// their own failures.
pub trait LifecycleObserver: Send + Sync {
    fn observe(&self, event: &LifecycleEvent);
}

impl<O> LifecycleObserver for Arc<O>
where
    O: LifecycleObserver + ?Sized,
{
    fn observe(&self, event: &LifecycleEvent) {
        (**self).observe(event)
    }
}

/// Writes the console line of each event (e.g. `Copy constructor called.`).
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    out: Mutex<W>,
}

impl ConsoleObserver<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the writer, e.g. to inspect a captured `Vec<u8>`.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> LifecycleObserver for ConsoleObserver<W> {
    fn observe(&self, event: &LifecycleEvent) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(out, "{}", event.kind().console_line()) {
            tracing::warn!(error = %err, event_type = event.event_type(), "console write failed");
        }
    }
}

/// Re-emits each event as a structured `info` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl LifecycleObserver for TracingObserver {
    fn observe(&self, event: &LifecycleEvent) {
        tracing::info!(
            instance = %event.instance(),
            sequence = %event.sequence(),
            event_type = event.event_type(),
            "{}",
            event.kind().console_line()
        );
    }
}

/// Publishes each event into an [`EventBus`].
#[derive(Debug)]
pub struct BusObserver<B> {
    bus: B,
}

impl<B> BusObserver<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B> BusObserver<B>
where
    B: EventBus<LifecycleEvent>,
{
    /// Publish `event`, surfacing a bus failure to the caller.
    pub fn try_observe(&self, event: &LifecycleEvent) -> LifecycleResult<()> {
        self.bus
            .publish(event.clone())
            .map_err(|err| LifecycleError::observer_unavailable(format!("{err:?}")))
    }
}

impl<B> LifecycleObserver for BusObserver<B>
where
    B: EventBus<LifecycleEvent>,
{
    fn observe(&self, event: &LifecycleEvent) {
        if let Err(err) = self.try_observe(event) {
            tracing::warn!(
                error = %err,
                sequence = %event.sequence(),
                event_type = event.event_type(),
                "lifecycle event dropped"
            );
        }
    }
}

/// Forwards each event to several observers, in registration order.
#[derive(Default, Clone)]
pub struct FanOut {
    observers: Vec<Arc<dyn LifecycleObserver>>,
}

impl FanOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: impl LifecycleObserver + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    pub fn push(&mut self, observer: Arc<dyn LifecycleObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl core::fmt::Debug for FanOut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FanOut")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl LifecycleObserver for FanOut {
    fn observe(&self, event: &LifecycleEvent) {
        for observer in &self.observers {
            observer.observe(event);
        }
    }
}
