use line_graph_reveal::animation::{RevealEvent, WaveDirection};
use line_graph_reveal::api::{LineGraphAnimation, LineGraphConfig};
use line_graph_reveal::core::Viewport;
use line_graph_reveal::render::NullRenderer;

#[test]
fn animation_smoke_flow() {
    let renderer = NullRenderer::default();
    let config = LineGraphConfig::new(Viewport::new(800, 600));
    let mut animation = LineGraphAnimation::new(renderer, config).expect("animation init");

    assert!(!animation.is_running());
    assert!(animation.start());

    let mut advanced = Vec::new();
    for _ in 0..150 {
        if let RevealEvent::Advanced(index) = animation.tick().expect("tick") {
            advanced.push(index);
        }
    }
    assert_eq!(advanced, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(animation.timer().tick_count(), 150);
    assert_eq!(animation.renderer().frames_rendered, 150);

    animation.tap(120.0, 40.0);
    assert!(animation.stop());

    let snapshot = animation.snapshot();
    assert_eq!(snapshot.tick_count, 150);
    assert!(!snapshot.running);
    assert_eq!(snapshot.direction, WaveDirection::Forward);
    assert_eq!(snapshot.current, 7);
    assert_eq!(snapshot.revealed_count(), 7);

    let renderer = animation.into_renderer();
    assert!(renderer.last_line_count > 0);
}

#[test]
fn ticks_are_ignored_while_stopped() {
    let config = LineGraphConfig::new(Viewport::new(800, 600));
    let mut animation =
        LineGraphAnimation::new(NullRenderer::default(), config).expect("animation init");

    for _ in 0..50 {
        assert_eq!(animation.tick().expect("tick"), RevealEvent::Idle);
    }
    assert_eq!(animation.timer().tick_count(), 0);
    assert_eq!(animation.renderer().frames_rendered, 0);
    assert_eq!(animation.controller().chain().states()[0].scale(), 0.0);
}

#[test]
fn start_and_stop_are_idempotent() {
    let config = LineGraphConfig::new(Viewport::new(800, 600));
    let mut animation =
        LineGraphAnimation::new(NullRenderer::default(), config).expect("animation init");

    assert!(animation.start());
    assert!(!animation.start());
    animation.tick().expect("tick");
    assert!(animation.stop());
    assert!(!animation.stop());
    animation.tick().expect("tick");
    assert!(animation.start());
    animation.tick().expect("tick");

    assert_eq!(animation.timer().tick_count(), 2);
}

#[test]
fn invalid_viewport_is_rejected() {
    let config = LineGraphConfig::new(Viewport::new(0, 600));
    assert!(LineGraphAnimation::new(NullRenderer::default(), config).is_err());
}
