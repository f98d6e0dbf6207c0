//! The lifecycle event vocabulary of `ValueType`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lifespan_core::{EventSequence, InstanceId};

use crate::Event;

/// Which special operation ran.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleKind {
    DefaultConstruct,
    Construct,
    Destruct,
    CopyConstruct,
    CopyAssign,
    MoveConstruct,
    MoveAssign,
}

impl LifecycleKind {
    pub const ALL: [LifecycleKind; 7] = [
        LifecycleKind::DefaultConstruct,
        LifecycleKind::Construct,
        LifecycleKind::Destruct,
        LifecycleKind::CopyConstruct,
        LifecycleKind::CopyAssign,
        LifecycleKind::MoveConstruct,
        LifecycleKind::MoveAssign,
    ];

    pub const fn event_type(self) -> &'static str {
        match self {
            LifecycleKind::DefaultConstruct => "value.default_construct",
            LifecycleKind::Construct => "value.construct",
            LifecycleKind::Destruct => "value.destruct",
            LifecycleKind::CopyConstruct => "value.copy_construct",
            LifecycleKind::CopyAssign => "value.copy_assign",
            LifecycleKind::MoveConstruct => "value.move_construct",
            LifecycleKind::MoveAssign => "value.move_assign",
        }
    }

    /// Human-readable console line for this operation.
    pub const fn console_line(self) -> &'static str {
        match self {
            LifecycleKind::DefaultConstruct => "Default constructor called.",
            LifecycleKind::Construct => "Constructor with parameters called.",
            LifecycleKind::Destruct => "Destructor called.",
            LifecycleKind::CopyConstruct => "Copy constructor called.",
            LifecycleKind::CopyAssign => "Copy assignment operator called.",
            LifecycleKind::MoveConstruct => "Move constructor called.",
            LifecycleKind::MoveAssign => "Move assignment operator called.",
        }
    }

    /// True for the operations that bring a new instance into existence.
    pub const fn is_construction(self) -> bool {
        matches!(
            self,
            LifecycleKind::DefaultConstruct
                | LifecycleKind::Construct
                | LifecycleKind::CopyConstruct
                | LifecycleKind::MoveConstruct
        )
    }
}

impl core::fmt::Display for LifecycleKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.event_type())
    }
}

/// One lifecycle operation observed on one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    sequence: EventSequence,
    instance: InstanceId,
    kind: LifecycleKind,
    occurred_at: DateTime<Utc>,
}

impl LifecycleEvent {
    pub fn new(
        sequence: EventSequence,
        instance: InstanceId,
        kind: LifecycleKind,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sequence,
            instance,
            kind,
            occurred_at,
        }
    }

    pub fn sequence(&self) -> EventSequence {
        self.sequence
    }

    /// The instance the operation ran on (the receiver for assignments, the
    /// new instance for constructions).
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn kind(&self) -> LifecycleKind {
        self.kind
    }
}

impl Event for LifecycleEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn event_types_and_console_lines_are_distinct() {
        let types: HashSet<_> = LifecycleKind::ALL.iter().map(|k| k.event_type()).collect();
        let lines: HashSet<_> = LifecycleKind::ALL.iter().map(|k| k.console_line()).collect();
        assert_eq!(types.len(), LifecycleKind::ALL.len());
        assert_eq!(lines.len(), LifecycleKind::ALL.len());
    }

    #[test]
    fn only_constructors_count_as_construction() {
        let constructions: Vec<_> = LifecycleKind::ALL
            .into_iter()
            .filter(|k| k.is_construction())
            .collect();
        assert_eq!(
            constructions,
            vec![
                LifecycleKind::DefaultConstruct,
                LifecycleKind::Construct,
                LifecycleKind::CopyConstruct,
                LifecycleKind::MoveConstruct,
            ]
        );
    }

    #[test]
    fn wire_format_uses_snake_case_kind() {
        let event = LifecycleEvent::new(
            EventSequence::new(3),
            InstanceId::new(2),
            LifecycleKind::MoveAssign,
            Utc::now(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "move_assign");
        assert_eq!(json["instance"], 2);
        assert_eq!(json["sequence"], 3);
        assert_eq!(event.event_type(), "value.move_assign");
    }
}
