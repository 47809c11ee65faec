//! Opens an 800x600 window running the reveal animation.
//!
//! `cargo run --features desktop --example gtk_line_graph_reveal [config.json]`

use line_graph_reveal::api::LineGraphConfig;
use line_graph_reveal::core::Viewport;
use line_graph_reveal::telemetry::init_default_tracing;

fn main() {
    let _ = init_default_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read `{path}`: {err}"))
            .and_then(|json| LineGraphConfig::from_json_str(&json).map_err(|err| err.to_string()))
        {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        None => LineGraphConfig::new(Viewport::new(800, 600)),
    };

    if let Err(err) = line_graph_reveal::platform_gtk::launch(config) {
        eprintln!("failed to launch line graph window: {err}");
        std::process::exit(1);
    }
}
