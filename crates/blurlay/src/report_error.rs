use thiserror::Error;
use tracing::error;

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to capture the display:\n{0}")]
    Capture(#[from] screen_capture::Error),

    #[error("Failed to run the event loop:\n{0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to show the capture:\n{0}")]
    Render(#[from] gl_renderer::Error),
}

pub fn report_app_error(error: &AppError) {
    error!("{error}");

    let message = match error {
        AppError::Capture(_) => make_message("while capturing your display"),
        AppError::EventLoop(_) => make_message("while starting the window system"),
        AppError::Render(gl_renderer::Error::UnsupportedStride { .. }) => {
            "The capture has an unsupported pixel layout.".to_string()
        }
        AppError::Render(_) => make_message("while showing the capture"),
    };

    eprintln!("ERROR:\n{message}\n{error}");
}

fn make_message(action: &str) -> String {
    format!("We encountered an error {action}:")
}
