use chip8_core::constants::PIXEL_ON;
use chip8_core::FrameBuffer;

/// Formats a Chip-8 FrameBuffer as an RGB24 texture.
///
/// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
///
/// This creates a black and white rendering by:
/// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
/// - Triplicating each element of that 1D array to represent the RGB values of each pixel
///
/// Pixels are already either 0x00 or 0xFF so they're used as intensities directly.
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|row| row.iter())
        .flat_map(|&pixel| std::iter::repeat(pixel).take(3))
        .collect()
}

/// Formats a Chip-8 FrameBuffer as lines of text, one character per pixel.
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    frame
        .iter()
        .map(|row| {
            row.iter()
                .map(|&pixel| if pixel == PIXEL_ON { '█' } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
