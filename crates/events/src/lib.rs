//! Lifecycle events and their delivery.
//!
//! Every special operation on a `ValueType` produces one [`LifecycleEvent`].
//! A [`Tracer`] numbers instances and events and hands each event to an
//! injected [`LifecycleObserver`], so the value type never formats or prints
//! anything itself.

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod lifecycle;
pub mod observer;
pub mod tracer;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use lifecycle::{LifecycleEvent, LifecycleKind};
pub use observer::{BusObserver, ConsoleObserver, FanOut, LifecycleObserver, TracingObserver};
pub use tracer::Tracer;
