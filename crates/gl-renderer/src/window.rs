use core::num::NonZeroU32;

use glium::Display;
use glutin::{
    config::{Config, ConfigTemplateBuilder},
    context::{ContextApi, ContextAttributesBuilder, Version},
    display::GetGlDisplay,
    prelude::*,
    surface::{SurfaceAttributesBuilder, WindowSurface},
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use tracing::debug;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use crate::Error;

/// OpenGL version the context is created for, `(major, minor)`.
const GL_VERSION: (u8, u8) = (2, 1);

const TITLE: &str = "Blurlay";

/// Attributes for a window exactly `size` physical pixels large, placed at
/// `origin`, with no decorations and no resizing.
pub fn window_attributes(size: [u32; 2], origin: [i32; 2]) -> WindowAttributes {
    Window::default_attributes()
        .with_title(TITLE)
        .with_inner_size(PhysicalSize::new(size[0], size[1]))
        .with_position(PhysicalPosition::new(origin[0], origin[1]))
        .with_resizable(false)
        .with_decorations(false)
}

/// Create the window together with a current OpenGL context drawing to it.
pub(crate) fn create_window(
    event_loop: &ActiveEventLoop,
    attributes: WindowAttributes,
) -> Result<(Window, Display<WindowSurface>), Error> {
    let (window, config) = DisplayBuilder::new()
        .with_window_attributes(Some(attributes))
        .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
        .map_err(Error::CreateWindow)?;
    let window = window.ok_or(Error::NoWindow)?;

    let raw_window_handle = window
        .window_handle()
        .map_err(Error::WindowHandle)?
        .as_raw();

    let gl_display = config.display();

    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(
            GL_VERSION.0,
            GL_VERSION.1,
        ))))
        .build(Some(raw_window_handle));
    let context = unsafe { gl_display.create_context(&config, &context_attributes) }
        .map_err(Error::CreateContext)?;

    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
    else {
        return Err(Error::ZeroSizedWindow);
    };

    let surface_attributes =
        SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window_handle, width, height);
    let surface = unsafe { gl_display.create_window_surface(&config, &surface_attributes) }
        .map_err(Error::CreateSurface)?;

    let context = context
        .make_current(&surface)
        .map_err(Error::CreateContext)?;

    let display =
        Display::from_context_surface(context, surface).map_err(Error::IncompatibleOpenGl)?;

    let version = display.get_opengl_version_string();
    debug!(
        "Created {}x{} window with OpenGL {version}",
        size.width, size.height
    );

    Ok((window, display))
}

/// The quad maps the capture to pixels one to one, so prefer the config with
/// the fewest samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    match configs.reduce(|best, config| {
        if config.num_samples() < best.num_samples() {
            config
        } else {
            best
        }
    }) {
        Some(config) => config,
        None => unreachable!("glutin-winit only picks from a non-empty set of configs"),
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::{PhysicalPosition, PhysicalSize, Position, Size};

    use super::window_attributes;

    #[test]
    fn sized_to_the_capture() {
        let attributes = window_attributes([800, 600], [0, 0]);

        assert_eq!(
            attributes.inner_size,
            Some(Size::Physical(PhysicalSize::new(800, 600)))
        );
        assert_eq!(
            attributes.position,
            Some(Position::Physical(PhysicalPosition::new(0, 0)))
        );
    }

    #[test]
    fn fixed_and_undecorated() {
        let attributes = window_attributes([1, 1], [1920, -40]);

        assert!(!attributes.resizable);
        assert!(!attributes.decorations);
        assert_eq!(
            attributes.position,
            Some(Position::Physical(PhysicalPosition::new(1920, -40)))
        );
    }
}
