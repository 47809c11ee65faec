//! Runs one full back-and-forth wave headlessly and prints every reveal event.
//!
//! `RUST_LOG=line_graph_reveal=trace cargo run --features telemetry --example headless_trace`

use line_graph_reveal::animation::RevealEvent;
use line_graph_reveal::api::{LineGraphAnimation, LineGraphConfig};
use line_graph_reveal::core::Viewport;
use line_graph_reveal::render::NullRenderer;
use line_graph_reveal::telemetry::init_default_tracing;

fn main() -> line_graph_reveal::RevealResult<()> {
    let _ = init_default_tracing();

    let config = LineGraphConfig::new(Viewport::new(800, 600));
    let node_count = config.data.len();
    let mut animation = LineGraphAnimation::new(NullRenderer::default(), config)?;
    animation.start();

    let wave_ticks = node_count * 2 * 20;
    for _ in 0..wave_ticks {
        let event = animation.tick()?;
        if event != RevealEvent::Idle {
            let snapshot = animation.snapshot();
            println!(
                "tick {:>4} elapsed {:>5}ms {:?} revealed={}",
                snapshot.tick_count,
                animation.timer().elapsed().as_millis(),
                event,
                snapshot.revealed_count()
            );
        }
    }

    println!("{}", animation.snapshot().to_json_pretty()?);
    Ok(())
}
