//! # Blurlay
//! Captures the primary display, blurs it, saves it and shows it full screen
//! until Escape is pressed.
//!

use std::process::ExitCode;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use logger::setup_logger;
use pipeline::prepare;
use report_error::{AppError, report_app_error};
use screen_capture::ScreenshotsProvider;
use settings::{SETTINGS_FILE, Settings};
use tracing::{info, info_span, warn};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_app::WinitApp;

mod capture_saver;
mod logger;
mod pipeline;
mod report_error;
mod settings;
mod winit_app;

/// The Cargo package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let (settings, settings_error) = match Settings::try_load() {
        Ok(Some(settings)) => (settings, None),
        Ok(None) => (Settings::default(), None),
        Err(error) => (Settings::default(), Some(error)),
    };

    // Set up logger
    let _logger_guard = match setup_logger(settings.debug) {
        Ok(guard) => Some(guard),
        Err(error) => {
            eprintln!("Could not set up logging: {error}");
            None
        }
    };

    // Log application start
    let _span = info_span!("[Main Thread]").entered();
    info!("Blurlay v{}", VERSION);

    if let Some(error) = settings_error {
        warn!("Your {SETTINGS_FILE} is invalid, using the default settings:\n{error}");
    }

    match run(&settings) {
        Ok(()) => {
            info!("Exiting: window closed");
            ExitCode::SUCCESS
        }

        Err(error) => {
            report_app_error(&error);
            ExitCode::FAILURE
        }
    }
}

/// Everything runs on the main thread, which the windowing system requires
/// for the event loop and which the render surface cannot leave.
fn run(settings: &Settings) -> Result<(), AppError> {
    let prepared = prepare(&ScreenshotsProvider, settings)?;

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Run the app
    let mut app = WinitApp::new(prepared);
    event_loop.run_app(&mut app)?;

    app.finish()
}
