//! GTK4 host for the animation: a `DrawingArea` redrawn from a `glib`
//! timeout on the main loop.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::{error, trace, warn};

use crate::api::{LineGraphAnimation, LineGraphConfig};
use crate::error::RevealResult;
use crate::render::CairoRenderer;

pub const APPLICATION_ID: &str = "rs.line_graph_reveal.app";

type SharedAnimation = Rc<RefCell<LineGraphAnimation<CairoRenderer>>>;

/// Drawing surface sized to the startup viewport plus the timer that drives
/// it. Start and stop are idempotent.
pub struct GtkLineGraphSurface {
    drawing_area: gtk::DrawingArea,
    animation: SharedAnimation,
    timer_source: RefCell<Option<glib::SourceId>>,
}

impl GtkLineGraphSurface {
    pub fn from_config(config: LineGraphConfig) -> RevealResult<Self> {
        let renderer = CairoRenderer::new(
            viewport_dimension(config.viewport.width),
            viewport_dimension(config.viewport.height),
        )?;
        Ok(Self::new(LineGraphAnimation::new(renderer, config)?))
    }

    #[must_use]
    pub fn new(animation: LineGraphAnimation<CairoRenderer>) -> Self {
        let viewport = animation.config().viewport;
        let animation = Rc::new(RefCell::new(animation));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(viewport_dimension(viewport.width));
        drawing_area.set_content_height(viewport_dimension(viewport.height));
        drawing_area.set_draw_func({
            let animation = Rc::clone(&animation);
            move |_widget, context, _width, _height| {
                let Ok(mut animation) = animation.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = animation.render_on_cairo_context(context) {
                    warn!(error = %err, "failed to draw line graph frame");
                }
            }
        });

        let click = gtk::GestureClick::new();
        click.connect_pressed({
            let animation = Rc::clone(&animation);
            move |_gesture, _n_press, x, y| {
                if let Ok(mut animation) = animation.try_borrow_mut() {
                    animation.tap(x, y);
                }
            }
        });
        drawing_area.add_controller(click);

        Self {
            drawing_area,
            animation,
            timer_source: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer_source.borrow().is_some()
    }

    /// Installs the periodic timer; `false` when it is already installed.
    pub fn start(&self) -> bool {
        if self.is_running() {
            return false;
        }

        let interval = {
            let mut animation = self.animation.borrow_mut();
            animation.start();
            animation.timer().interval()
        };

        let source = glib::timeout_add_local(interval, {
            let animation = Rc::clone(&self.animation);
            let drawing_area = self.drawing_area.clone();
            move || {
                match animation.try_borrow_mut() {
                    Ok(mut animation) => {
                        if let Err(err) = animation.advance() {
                            warn!(error = %err, "reveal tick failed");
                        }
                    }
                    Err(_) => trace!("animation busy, skipping tick"),
                }
                drawing_area.queue_draw();
                glib::ControlFlow::Continue
            }
        });
        *self.timer_source.borrow_mut() = Some(source);
        true
    }

    /// Removes the periodic timer; `false` when it was not installed.
    pub fn stop(&self) -> bool {
        let Some(source) = self.timer_source.borrow_mut().take() else {
            return false;
        };
        source.remove();
        self.animation.borrow_mut().stop();
        true
    }
}

/// Creates the window, attaches the drawing surface and starts the
/// animation. Blocks until the application exits.
pub fn launch(config: LineGraphConfig) -> RevealResult<glib::ExitCode> {
    config.validate()?;

    let app = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();

    app.connect_activate(move |app| {
        let surface = match GtkLineGraphSurface::from_config(config.clone()) {
            Ok(surface) => Rc::new(surface),
            Err(err) => {
                error!(error = %err, "failed to initialize line graph surface");
                app.quit();
                return;
            }
        };

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("line-graph-reveal")
            .default_width(viewport_dimension(config.viewport.width))
            .default_height(viewport_dimension(config.viewport.height))
            .resizable(false)
            .build();
        window.set_child(Some(surface.drawing_area()));
        window.connect_close_request({
            let surface = Rc::clone(&surface);
            move |_| {
                surface.stop();
                glib::Propagation::Proceed
            }
        });

        surface.start();
        window.present();
    });

    Ok(app.run_with_args::<&str>(&[]))
}

fn viewport_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
