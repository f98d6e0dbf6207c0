//! `lifespan-driver` — runs every special operation of `ValueType` once.
//!
//! The sequence, in order:
//!
//! 1. `obj1` = construct(42, "Object1")
//! 2. `obj2` = copy of `obj1`
//! 3. `obj3` = construct(100)
//! 4. `obj3` = `obj1` (copy assignment)
//! 5. `obj4` = move-construct from `obj3`
//! 6. `obj4` = move from `obj2` (move assignment)
//! 7. mutable and immutable address of `obj4`
//! 8. `obj4`, `obj3`, `obj2`, `obj1` destroyed on return

use std::io::{self, Write};

use serde::Serialize;

use lifespan_core::{Entity, InstanceId};
use lifespan_events::Tracer;
use lifespan_value::{ValueState, ValueType};

/// One driver variable as it stood just before teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingReport {
    pub name: &'static str,
    pub instance: InstanceId,
    pub state: ValueState,
}

/// What the driver observed, kept after its instances are gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverReport {
    /// `obj1` through `obj4`, in declaration order.
    pub bindings: Vec<BindingReport>,
    /// Address of `obj4` through a mutable borrow.
    pub address: usize,
    /// Address of `obj4` through a shared borrow.
    pub const_address: usize,
}

impl DriverReport {
    pub fn addresses_match(&self) -> bool {
        self.address == self.const_address
    }

    pub fn binding(&self, name: &str) -> Option<&BindingReport> {
        self.bindings.iter().find(|b| b.name == name)
    }
}

fn snapshot(name: &'static str, value: &ValueType) -> BindingReport {
    BindingReport {
        name,
        instance: *value.id(),
        state: value.state(),
    }
}

/// Run the fixed sequence, reporting the two addresses of `obj4` to `out`.
///
/// Lifecycle trace lines go to whatever observer `tracer` was built with.
pub fn run(tracer: &Tracer, out: &mut impl Write) -> io::Result<DriverReport> {
    let obj1 = ValueType::new(tracer, 42, "Object1");
    let mut obj2 = obj1.clone();
    let mut obj3 = ValueType::with_data(tracer, 100);
    obj3.clone_from(&obj1);

    let mut obj4 = ValueType::take_from(&mut obj3);
    obj4.move_assign(&mut obj2);

    let address = obj4.address_mut() as *const ValueType;
    let const_address = obj4.address();
    writeln!(out, "Address of obj4: {address:p}")?;
    writeln!(out, "Const address of obj4: {const_address:p}")?;

    tracing::debug!(
        address = ?address,
        const_address = ?const_address,
        "obj4 addresses"
    );

    Ok(DriverReport {
        bindings: vec![
            snapshot("obj1", &obj1),
            snapshot("obj2", &obj2),
            snapshot("obj3", &obj3),
            snapshot("obj4", &obj4),
        ],
        address: address as usize,
        const_address: const_address as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifespan_events::TracingObserver;

    #[test]
    fn final_states_follow_the_sequence() {
        let tracer = Tracer::new(TracingObserver);
        let mut out = Vec::new();

        let report = run(&tracer, &mut out).unwrap();

        let state = |name: &str| report.binding(name).unwrap().state.clone();
        assert_eq!(state("obj1"), ValueState::new(42, "Object1"));
        assert_eq!(state("obj2"), ValueState::zeroed());
        assert_eq!(state("obj3"), ValueState::zeroed());
        assert_eq!(state("obj4"), ValueState::new(42, "Object1"));
        assert!(report.addresses_match());
    }

    #[test]
    fn address_lines_are_written_in_order() {
        let tracer = Tracer::new(TracingObserver);
        let mut out = Vec::new();

        let report = run(&tracer, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Address of obj4: 0x"));
        assert!(lines[1].starts_with("Const address of obj4: 0x"));
        assert_eq!(
            lines[0].trim_start_matches("Address of obj4: "),
            lines[1].trim_start_matches("Const address of obj4: ")
        );
        assert_eq!(
            lines[0].trim_start_matches("Address of obj4: "),
            format!("{:p}", report.address as *const ValueType)
        );
    }
}
