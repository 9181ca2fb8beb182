use glium::{
    Display, DrawParameters, Program, Rect, Surface, VertexBuffer,
    index::{NoIndices, PrimitiveType},
    uniform,
};
use glutin::surface::WindowSurface;
use tracing::info;
use winit::{event_loop::ActiveEventLoop, window::Window};

use crate::{
    CaptureTexture, Error, PixelBuffer,
    projection::orthographic,
    quad::{Vertex, quad_vertices},
    shaders,
    window::{create_window, window_attributes},
};

/// The window showing the capture, with everything needed to draw it.
///
/// Fields drop in declaration order, so GPU resources are released before
/// the context and the context before the window.
pub struct RenderSurface {
    texture: CaptureTexture,
    program: Program,
    quad: VertexBuffer<Vertex>,
    display: Display<WindowSurface>,
    window: Window,
}

impl RenderSurface {
    /// Create a window the size of `pixels` at `origin` and upload `pixels`
    /// as the texture it shows.
    pub fn new(
        event_loop: &ActiveEventLoop,
        pixels: PixelBuffer,
        origin: [i32; 2],
    ) -> Result<Self, Error> {
        let size = pixels.size();

        let (window, display) = create_window(event_loop, window_attributes(size, origin))?;
        let texture = CaptureTexture::upload(&display, pixels)?;

        let program = Program::from_source(&display, shaders::VERTEX, shaders::FRAGMENT, None)
            .map_err(Error::CreateProgram)?;

        let inner_size = window.inner_size();
        let vertices = quad_vertices(inner_size.width as f32, inner_size.height as f32);
        let quad = VertexBuffer::new(&display, &vertices).map_err(Error::CreateVertexBuffer)?;

        info!(
            "Showing {}x{} capture at {},{}",
            size[0], size[1], origin[0], origin[1]
        );

        Ok(Self {
            texture,
            program,
            quad,
            display,
            window,
        })
    }

    /// The window being drawn to.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Draw the capture over the whole window and present the frame.
    pub fn render(&self) -> Result<(), Error> {
        let size = self.window.inner_size();

        let uniforms = uniform! {
            projection: orthographic(size.width as f32, size.height as f32),
            capture: self.texture.sampler(),
        };

        let parameters = DrawParameters {
            viewport: Some(Rect {
                left: 0,
                bottom: 0,
                width: size.width,
                height: size.height,
            }),
            ..DrawParameters::default()
        };

        let mut frame = self.display.draw();
        frame.clear_color_and_depth((0.0, 0.0, 0.0, 0.0), 1.0);

        let draw_result = frame.draw(
            &self.quad,
            NoIndices(PrimitiveType::TriangleStrip),
            &self.program,
            &uniforms,
            &parameters,
        );

        // A frame must always be finished, glium panics when one is dropped.
        let finish_result = frame.finish();

        draw_result.map_err(Error::Draw)?;
        finish_result.map_err(Error::SwapBuffers)?;

        Ok(())
    }
}
