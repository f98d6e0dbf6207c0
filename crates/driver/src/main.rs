use lifespan_events::{ConsoleObserver, FanOut, Tracer, TracingObserver};

fn main() {
    lifespan_observability::init();

    let tracer = Tracer::new(
        FanOut::new()
            .with(ConsoleObserver::stdout())
            .with(TracingObserver),
    );

    match lifespan_driver::run(&tracer, &mut std::io::stdout()) {
        Ok(report) => tracing::info!(
            addresses_match = report.addresses_match(),
            events = tracer.events_emitted(),
            "driver finished"
        ),
        // No error path affects the exit status.
        Err(err) => tracing::error!(error = %err, "failed to write address report"),
    }
}
