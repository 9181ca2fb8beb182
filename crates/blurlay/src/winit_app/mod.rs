mod loop_state;

pub use loop_state::{LoopSignal, LoopState};

use gl_renderer::{PixelBuffer, RenderSurface};
use tracing::{info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowId,
};

use crate::{pipeline::Prepared, report_error::AppError};

/// Shows the prepared capture until the window is closed.
pub struct WinitApp {
    prepared: Option<Prepared>,
    surface: Option<RenderSurface>,
    state: LoopState,
    error: Option<AppError>,
}

impl WinitApp {
    pub fn new(prepared: Prepared) -> Self {
        Self {
            prepared: Some(prepared),
            surface: None,
            state: LoopState::default(),
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn finish(self) -> Result<(), AppError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        warn!("Exiting: {error}");
        self.error = Some(error);
        self.close(event_loop);
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.state = LoopState::Closed;
        // Dropping the surface destroys the texture, context and window.
        self.surface.take();
        event_loop.exit();
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The capture is only ever shown once.
        let Some(prepared) = self.prepared.take() else {
            return;
        };

        let [width, height] = prepared.filtered.size();
        let pixels = PixelBuffer::tightly_packed(width, height, prepared.filtered.into_raw());

        match RenderSurface::new(event_loop, pixels, prepared.origin) {
            Ok(surface) => {
                surface.window().request_redraw();
                self.surface = Some(surface);
                self.state = LoopState::Running;
            }

            Err(error) => self.fail(event_loop, error.into()),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if event_loop.exiting() {
            return;
        }

        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        if surface.window().id() != window_id {
            return;
        }

        let signal = LoopSignal::from_window_event(&event);

        if signal == LoopSignal::Redraw {
            if let Err(error) = surface.render() {
                self.fail(event_loop, error.into());
                return;
            }
        }

        self.state = self.state.next(signal);

        if self.state == LoopState::Closed {
            info!("Closing window: {signal:?}");
            self.close(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() {
            return;
        }

        if let Some(surface) = self.surface.as_ref() {
            surface.window().request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.surface.take();
    }
}
