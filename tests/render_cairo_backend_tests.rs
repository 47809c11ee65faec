#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use line_graph_reveal::RevealError;
use line_graph_reveal::api::{LineGraphAnimation, LineGraphConfig};
use line_graph_reveal::core::Viewport;
use line_graph_reveal::render::CairoRenderer;

fn animation_after(ticks: usize) -> LineGraphAnimation<CairoRenderer> {
    let renderer = CairoRenderer::new(800, 600).expect("cairo renderer");
    let config = LineGraphConfig::new(Viewport::new(800, 600));
    let mut animation = LineGraphAnimation::new(renderer, config).expect("animation init");
    animation.start();
    for _ in 0..ticks {
        animation.tick().expect("tick");
    }
    animation
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, RevealError::InvalidData(_)));

    let err = CairoRenderer::new(640, -1).expect_err("invalid height must fail");
    assert!(matches!(err, RevealError::InvalidData(_)));
}

#[test]
fn cairo_renderer_counts_fully_revealed_graph() {
    // 8 nodes x 20 ticks: every bar, join and circle is drawn.
    let animation = animation_after(160);
    let stats = animation.into_renderer().last_stats();

    assert_eq!(stats.lines_drawn, 15);
    assert_eq!(stats.circles_drawn, 8);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    // first node fully revealed, second one not started drawing yet
    let mut animation = animation_after(20);

    let surface = ImageSurface::create(Format::ARgb32, 800, 600).expect("surface");
    let context = Context::new(&surface).expect("context");
    animation
        .render_on_cairo_context(&context)
        .expect("render on external context");

    let stats = animation.renderer().last_stats();
    assert_eq!(stats.lines_drawn, 1);
    assert_eq!(stats.circles_drawn, 1);
}

#[test]
fn cairo_renderer_writes_png() {
    let animation = animation_after(40);
    let path = std::env::temp_dir().join(format!(
        "line-graph-reveal-{}-frame.png",
        std::process::id()
    ));

    animation.renderer().write_png(&path).expect("write png");

    let written = std::fs::metadata(&path).expect("png metadata").len();
    std::fs::remove_file(&path).expect("cleanup png");
    assert!(written > 0);
}
