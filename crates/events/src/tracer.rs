//! The tracer: instance numbering + event emission.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use lifespan_core::{EventSequence, InstanceId};

use crate::lifecycle::{LifecycleEvent, LifecycleKind};
use crate::observer::LifecycleObserver;

/// Shared handle every `ValueType` instance carries.
///
/// Cloning a tracer is cheap and yields a handle onto the same counters and
/// observer. Instance ids and event sequence numbers both start at 1.
#[derive(Clone)]
pub struct Tracer {
    inner: Arc<TracerInner>,
}

struct TracerInner {
    observer: Arc<dyn LifecycleObserver>,
    next_instance: AtomicU64,
    next_sequence: AtomicU64,
}

impl Tracer {
    pub fn new(observer: impl LifecycleObserver + 'static) -> Self {
        Self::from_arc(Arc::new(observer))
    }

    pub fn from_arc(observer: Arc<dyn LifecycleObserver>) -> Self {
        Self {
            inner: Arc::new(TracerInner {
                observer,
                next_instance: AtomicU64::new(1),
                next_sequence: AtomicU64::new(1),
            }),
        }
    }

    /// Reserve the id of a new instance.
    pub fn allocate_instance(&self) -> InstanceId {
        InstanceId::new(self.inner.next_instance.fetch_add(1, Ordering::Relaxed))
    }

    /// Stamp and deliver one lifecycle event.
    pub fn emit(&self, instance: InstanceId, kind: LifecycleKind) -> LifecycleEvent {
        let sequence = EventSequence::new(self.inner.next_sequence.fetch_add(1, Ordering::Relaxed));
        let event = LifecycleEvent::new(sequence, instance, kind, Utc::now());

        tracing::trace!(
            instance = %instance,
            sequence = %sequence,
            event_type = kind.event_type(),
            "lifecycle event"
        );
        self.inner.observer.observe(&event);

        event
    }

    /// Number of instances this tracer has numbered so far.
    pub fn instances_allocated(&self) -> u64 {
        self.inner.next_instance.load(Ordering::Relaxed) - 1
    }

    /// Number of events this tracer has emitted so far.
    pub fn events_emitted(&self) -> u64 {
        self.inner.next_sequence.load(Ordering::Relaxed) - 1
    }

    /// True when both handles share counters and observer.
    pub fn same_as(&self, other: &Tracer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("instances_allocated", &self.instances_allocated())
            .field("events_emitted", &self.events_emitted())
            .finish()
    }
}
