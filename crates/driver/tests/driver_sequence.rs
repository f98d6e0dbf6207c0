use std::sync::Arc;

use lifespan_driver::run;
use lifespan_events::{
    BusObserver, ConsoleObserver, EventBus, FanOut, InMemoryEventBus, LifecycleEvent,
    LifecycleKind, Tracer,
};

fn recording_tracer() -> (Tracer, lifespan_events::Subscription<LifecycleEvent>) {
    let bus = Arc::new(InMemoryEventBus::<LifecycleEvent>::new());
    let sub = bus.subscribe();
    (Tracer::new(BusObserver::new(bus)), sub)
}

#[test]
fn driver_emits_the_nine_events_in_order() {
    let (tracer, sub) = recording_tracer();

    run(&tracer, &mut Vec::new()).unwrap();

    let kinds: Vec<LifecycleKind> = sub.drain().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            LifecycleKind::Construct,
            LifecycleKind::CopyConstruct,
            LifecycleKind::Construct,
            LifecycleKind::CopyAssign,
            LifecycleKind::MoveConstruct,
            LifecycleKind::MoveAssign,
            LifecycleKind::Destruct,
            LifecycleKind::Destruct,
            LifecycleKind::Destruct,
            LifecycleKind::Destruct,
        ]
    );
}

#[test]
fn teardown_runs_obj4_to_obj1() {
    let (tracer, sub) = recording_tracer();

    let report = run(&tracer, &mut Vec::new()).unwrap();

    let destroyed: Vec<_> = sub
        .drain()
        .into_iter()
        .filter(|e| e.kind() == LifecycleKind::Destruct)
        .map(|e| e.instance())
        .collect();
    let expected: Vec<_> = ["obj4", "obj3", "obj2", "obj1"]
        .into_iter()
        .map(|name| report.binding(name).unwrap().instance)
        .collect();
    assert_eq!(destroyed, expected);
}

#[test]
fn assignments_are_traced_on_the_receiver() {
    let (tracer, sub) = recording_tracer();

    let report = run(&tracer, &mut Vec::new()).unwrap();
    let events = sub.drain();

    let on = |kind: LifecycleKind| {
        events
            .iter()
            .find(|e| e.kind() == kind)
            .map(|e| e.instance())
            .unwrap()
    };
    assert_eq!(on(LifecycleKind::CopyAssign), report.binding("obj3").unwrap().instance);
    assert_eq!(on(LifecycleKind::MoveConstruct), report.binding("obj4").unwrap().instance);
    assert_eq!(on(LifecycleKind::MoveAssign), report.binding("obj4").unwrap().instance);
}

#[test]
fn one_destruct_per_construction() {
    let (tracer, sub) = recording_tracer();

    run(&tracer, &mut Vec::new()).unwrap();
    let events = sub.drain();

    let mut constructed: Vec<_> = events
        .iter()
        .filter(|e| e.kind().is_construction())
        .map(|e| e.instance())
        .collect();
    let mut destroyed: Vec<_> = events
        .iter()
        .filter(|e| e.kind() == LifecycleKind::Destruct)
        .map(|e| e.instance())
        .collect();
    constructed.sort();
    destroyed.sort();

    assert_eq!(constructed.len(), 4);
    assert_eq!(constructed, destroyed);
    assert_eq!(tracer.instances_allocated(), 4);
    assert_eq!(tracer.events_emitted(), 10);
}

#[test]
fn console_transcript_matches_the_sequence() {
    let console = Arc::new(ConsoleObserver::new(Vec::new()));
    let tracer = Tracer::new(FanOut::new().with(console.clone()));
    let mut addresses = Vec::new();

    let report = run(&tracer, &mut addresses).unwrap();
    drop(tracer);

    let console = Arc::try_unwrap(console).expect("tracer handles released");
    let transcript = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        transcript.lines().collect::<Vec<_>>(),
        vec![
            "Constructor with parameters called.",
            "Copy constructor called.",
            "Constructor with parameters called.",
            "Copy assignment operator called.",
            "Move constructor called.",
            "Move assignment operator called.",
            "Destructor called.",
            "Destructor called.",
            "Destructor called.",
            "Destructor called.",
        ]
    );

    let addresses = String::from_utf8(addresses).unwrap();
    assert_eq!(addresses.lines().count(), 2);
    assert!(report.addresses_match());
}

#[test]
fn report_serializes_bindings_in_declaration_order() {
    let (tracer, _sub) = recording_tracer();

    let report = run(&tracer, &mut Vec::new()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let names: Vec<_> = json["bindings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["obj1", "obj2", "obj3", "obj4"]);
    assert_eq!(json["bindings"][0]["state"]["name"], "Object1");
    assert_eq!(json["bindings"][3]["state"]["data"], 42);
}
