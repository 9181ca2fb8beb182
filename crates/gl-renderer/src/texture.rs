use glium::{
    Display,
    texture::{MipmapsOption, RawImage2d, Texture2d},
    uniforms::{MagnifySamplerFilter, MinifySamplerFilter, Sampler, SamplerWrapFunction},
};
use glutin::surface::WindowSurface;
use tracing::debug;

use crate::{Error, PixelBuffer};

/// The capture, uploaded to the GPU. The texture is released on drop.
pub struct CaptureTexture {
    texture: Texture2d,
}

impl CaptureTexture {
    /// Validate `pixels` and upload them as a single level RGBA8 texture.
    pub fn upload(display: &Display<WindowSurface>, pixels: PixelBuffer) -> Result<Self, Error> {
        pixels.validate()?;

        let size = pixels.size();
        let image = RawImage2d::from_raw_rgba(pixels.bytes, (size[0], size[1]));
        let texture = Texture2d::with_mipmaps(display, image, MipmapsOption::NoMipmap)
            .map_err(Error::CreateTexture)?;

        debug!("Uploaded {}x{} texture", size[0], size[1]);

        Ok(Self { texture })
    }

    /// Linear filtering, clamped to the edge on both axes.
    pub fn sampler(&self) -> Sampler<'_, Texture2d> {
        self.texture
            .sampled()
            .minify_filter(MinifySamplerFilter::Linear)
            .magnify_filter(MagnifySamplerFilter::Linear)
            .wrap_function(SamplerWrapFunction::Clamp)
    }
}
