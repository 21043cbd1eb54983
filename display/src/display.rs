use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

use crate::error::DisplayError;
use crate::texture::frame_to_rgb24;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as 0xFF/0x00 respectively
/// in a 2d array of 64x32 bytes.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    width: usize,
    height: usize,
}

fn sdl_error(err: impl ToString) -> DisplayError {
    DisplayError::Sdl(err.to_string())
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(sdl_error)?;

        let pixels = frame_to_rgb24(frame);
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                // rows may be padded past width * 3
                for (row, line) in pixels.chunks(self.width * 3).enumerate() {
                    buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
                }
            })
            .map_err(sdl_error)?;

        self.canvas.copy(&texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}
