//! Renders every fifth frame of the forward wave into PNG files.
//!
//! `cargo run --features cairo-backend --example png_frame_sequence -- target/frames`

use std::path::PathBuf;

use line_graph_reveal::api::{LineGraphAnimation, LineGraphConfig};
use line_graph_reveal::core::Viewport;
use line_graph_reveal::render::CairoRenderer;

fn main() -> line_graph_reveal::RevealResult<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/frames"), PathBuf::from);
    std::fs::create_dir_all(&out_dir).map_err(|err| {
        line_graph_reveal::RevealError::Backend(format!(
            "failed to create `{}`: {err}",
            out_dir.display()
        ))
    })?;

    let config = LineGraphConfig::new(Viewport::new(800, 600));
    let renderer = CairoRenderer::new(800, 600)?;
    let mut animation = LineGraphAnimation::new(renderer, config)?;
    animation.start();

    for tick in 1..=160u32 {
        animation.tick()?;
        if tick % 5 == 0 {
            let path = out_dir.join(format!("frame_{tick:04}.png"));
            animation.renderer().write_png(&path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
