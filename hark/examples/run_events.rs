//! Replays the emitter walkthrough with log output on stdout.
//!
//! ```sh
//! cargo run -p hark --example run_events
//! ```

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let lines = hark::demo::run_events();
    tracing::info!(lines = lines.len(), "walkthrough finished");
}
