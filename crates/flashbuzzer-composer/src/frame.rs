//! Frame buffer
//!
//! Per-pixel color accumulators. Contributions are summed in `f32` so that
//! overlapping dots brighten each other; channels saturate only when the
//! frame is converted for output.

use smart_leds::RGB8;

/// Additive frame of `N` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer<const N: usize> {
    pixels: [[f32; 3]; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [[0.0; 3]; N],
        }
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Reset every accumulator to black
    pub fn clear(&mut self) {
        self.pixels = [[0.0; 3]; N];
    }

    /// Add `color` scaled by `intensity` to a pixel. Out of range pixels are ignored.
    pub fn add(&mut self, pixel: usize, color: [f32; 3], intensity: f32) {
        if let Some(acc) = self.pixels.get_mut(pixel) {
            for (channel, value) in acc.iter_mut().zip(color) {
                *channel += value * intensity;
            }
        }
    }

    /// Get the raw accumulated channels of a pixel
    pub fn pixel(&self, pixel: usize) -> Option<[f32; 3]> {
        self.pixels.get(pixel).copied()
    }

    /// Convert to output colors, saturating each channel to `0..=255`
    pub fn to_rgb(&self) -> [RGB8; N] {
        let mut colors = [RGB8::default(); N];
        for (color, [r, g, b]) in colors.iter_mut().zip(&self.pixels) {
            *color = RGB8::new(saturate(*r), saturate(*g), saturate(*b));
        }
        colors
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturate(value: f32) -> u8 {
    // NaN casts to 0
    libm::roundf(value.clamp(0.0, 255.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_and_saturates() {
        let mut frame = FrameBuffer::<4>::new();
        frame.add(1, [200.0, 10.0, 0.0], 1.0);
        frame.add(1, [200.0, 10.0, 0.0], 0.5);
        frame.add(9, [255.0, 255.0, 255.0], 1.0);

        assert_eq!(frame.pixel(1), Some([300.0, 15.0, 0.0]));
        let colors = frame.to_rgb();
        assert_eq!(colors[1], RGB8::new(255, 15, 0));
        assert_eq!(colors[0], RGB8::new(0, 0, 0));
    }

    #[test]
    fn negative_channels_clamp_to_black() {
        let mut frame = FrameBuffer::<1>::new();
        frame.add(0, [-20.0, 0.4, 0.6], 1.0);
        assert_eq!(frame.to_rgb()[0], RGB8::new(0, 0, 1));
    }

    #[test]
    fn clear_resets_pixels() {
        let mut frame = FrameBuffer::<2>::new();
        frame.add(0, [1.0, 2.0, 3.0], 1.0);
        frame.clear();
        assert_eq!(frame, FrameBuffer::new());
    }
}
