use tracing::{debug, trace};

use crate::animation::{GraphController, NodeStyle, RevealEvent};
use crate::core::GraphGeometry;
use crate::error::RevealResult;
use crate::render::{RenderFrame, Renderer};

use super::{LineGraphConfig, NodeSnapshot, RevealSnapshot, TickTimer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Owns the drawing backend, the reveal controller and the tick timer.
///
/// Every tick runs the controller update to completion before the frame is
/// rebuilt, so each draw observes a consistent post-update state.
pub struct LineGraphAnimation<R: Renderer> {
    renderer: R,
    config: LineGraphConfig,
    geometry: GraphGeometry,
    controller: GraphController,
    timer: TickTimer,
}

impl<R: Renderer> LineGraphAnimation<R> {
    pub fn new(renderer: R, config: LineGraphConfig) -> RevealResult<Self> {
        config.validate()?;
        let geometry =
            GraphGeometry::with_size_factor(&config.data, config.viewport, config.size_factor)?;
        let controller = GraphController::new(config.data.len())?;
        let timer = TickTimer::new(config.tick_interval());
        debug!(
            nodes = config.data.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            tick_ms = config.tick_interval_ms,
            "line graph animation initialized"
        );

        Ok(Self {
            renderer,
            config,
            geometry,
            controller,
            timer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineGraphConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &GraphGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn controller(&self) -> &GraphController {
        &self.controller
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Returns `false` when the animation was already running.
    pub fn start(&mut self) -> bool {
        let started = self.timer.start();
        if started {
            debug!(tick_count = self.timer.tick_count(), "animation started");
        }
        started
    }

    /// Returns `false` when the animation was already stopped.
    pub fn stop(&mut self) -> bool {
        let stopped = self.timer.stop();
        if stopped {
            debug!(tick_count = self.timer.tick_count(), "animation stopped");
        }
        stopped
    }

    /// Timer callback: update then redraw. Does nothing while stopped.
    pub fn tick(&mut self) -> RevealResult<RevealEvent> {
        let Some(event) = self.advance()? else {
            return Ok(RevealEvent::Idle);
        };
        self.render()?;
        Ok(event)
    }

    /// Counts a timer firing and updates the state machine, leaving the draw
    /// to the host. `None` while stopped.
    pub fn advance(&mut self) -> RevealResult<Option<RevealEvent>> {
        if !self.timer.fire() {
            return Ok(None);
        }
        self.update().map(Some)
    }

    /// Advances the reveal state machine by one tick without drawing.
    pub fn update(&mut self) -> RevealResult<RevealEvent> {
        let event = self.controller.update()?;
        if event != RevealEvent::Idle {
            trace!(?event, current = self.controller.current(), "reveal event");
        }
        Ok(event)
    }

    /// Builds the frame for the current state: background clear plus every
    /// node's bar, circle and join.
    pub fn build_frame(&self) -> RevealResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport, self.config.background_color);
        self.controller.draw(&self.geometry, self.node_style(), &mut frame)?;
        Ok(frame)
    }

    pub fn render(&mut self) -> RevealResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the current frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> RevealResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Tap handler. Taps do not affect the animation.
    pub fn tap(&mut self, x: f64, y: f64) {
        trace!(x, y, "tap ignored");
    }

    #[must_use]
    pub fn snapshot(&self) -> RevealSnapshot {
        let nodes = self
            .controller
            .chain()
            .states()
            .iter()
            .zip(self.config.data.values())
            .enumerate()
            .map(|(index, (state, value))| NodeSnapshot {
                index,
                value: *value,
                scale: state.scale(),
                direction: state.direction(),
                committed_scale: state.committed_scale(),
            })
            .collect();

        RevealSnapshot {
            tick_count: self.timer.tick_count(),
            running: self.timer.is_running(),
            current: self.controller.current(),
            direction: self.controller.direction(),
            nodes,
        }
    }

    fn node_style(&self) -> NodeStyle {
        NodeStyle {
            color: self.config.line_color,
            stroke_width: self.config.stroke_width(),
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
