//! # GL Renderer
//! Shows a captured image in an undecorated window using OpenGL 2.1.
//!

mod pixel_buffer;
mod projection;
mod quad;
mod shaders;
mod surface;
mod texture;
mod window;

pub use pixel_buffer::PixelBuffer;
pub use projection::orthographic;
pub use quad::{Vertex, quad_vertices};
pub use surface::RenderSurface;
pub use texture::CaptureTexture;
pub use window::window_attributes;

use thiserror::Error;

/// Errors from creating or drawing to the render surface.
#[derive(Debug, Error)]
pub enum Error {
    /// The pixel buffer has a zero dimension.
    #[error("Pixel buffer must not be empty, got {width}x{height}")]
    EmptyBuffer {
        /// Buffer width.
        width: u32,
        /// Buffer height.
        height: u32,
    },

    /// Rows are not tightly packed RGBA8.
    #[error("Unsupported stride: rows are {stride} bytes apart but must be {expected}")]
    UnsupportedStride {
        /// Stride of the buffer.
        stride: usize,
        /// `width * 4`
        expected: usize,
    },

    /// The buffer does not hold exactly `stride * height` bytes.
    #[error("Pixel buffer should be {expected} bytes but was {actual} bytes")]
    BufferSize {
        /// Bytes the dimensions require.
        expected: usize,
        /// Bytes provided.
        actual: usize,
    },

    /// The window or its GL config could not be created.
    #[error("Failed to create window:\n{0}")]
    CreateWindow(#[source] Box<dyn core::error::Error>),

    /// A GL config was found but no window was created for it.
    #[error("Failed to create window: no window was returned")]
    NoWindow,

    /// The window handle was unavailable.
    #[error("Failed to get the window handle:\n{0}")]
    WindowHandle(#[source] raw_window_handle::HandleError),

    /// The window has a zero sized client area.
    #[error("Window has no drawable area")]
    ZeroSizedWindow,

    /// The GL context could not be created or made current.
    #[error("Failed to create OpenGL context:\n{0}")]
    CreateContext(#[source] glutin::error::Error),

    /// The window surface could not be created.
    #[error("Failed to create window surface:\n{0}")]
    CreateSurface(#[source] glutin::error::Error),

    /// The context does not support what glium needs.
    #[error("Failed to initialise OpenGL:\n{0}")]
    IncompatibleOpenGl(#[source] glium::IncompatibleOpenGl),

    /// The texture upload failed.
    #[error("Failed to create texture:\n{0}")]
    CreateTexture(#[source] glium::texture::TextureCreationError),

    /// The shaders failed to compile or link.
    #[error("Failed to create shader program:\n{0}")]
    CreateProgram(#[source] glium::ProgramCreationError),

    /// The quad's vertex buffer could not be created.
    #[error("Failed to create vertex buffer:\n{0}")]
    CreateVertexBuffer(#[source] glium::vertex::BufferCreationError),

    /// Drawing the quad failed.
    #[error("Failed to draw frame:\n{0}")]
    Draw(#[source] glium::DrawError),

    /// Presenting the frame failed.
    #[error("Failed to swap buffers:\n{0}")]
    SwapBuffers(#[source] glium::SwapBuffersError),
}
