//! Moving dot

/// A dot travelling along the strip.
///
/// Color and width are not stored per dot, every dot is drawn with the
/// engine's current settings. The position accumulates many small steps,
/// so it is kept in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dot {
    position: f64,
}

impl Dot {
    /// Create a dot at the start of the strip
    pub const fn new() -> Self {
        Self { position: 0.0 }
    }

    /// Continuous position in pixels from the strip start
    pub const fn position(&self) -> f64 {
        self.position
    }

    pub(crate) fn advance(&mut self, distance: f64) {
        self.position += distance;
    }

    /// Check if the dot has left a strip of `length` pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn is_expired(&self, length: usize) -> bool {
        self.position >= length as f64
    }

    /// Brightness contribution of this dot at `pixel`, in `0.0..=1.0`.
    ///
    /// Linear falloff `1 - |i - p| / w`, zero at and beyond the half-width.
    /// A half-width of zero or less lights only the pixel the dot sits on
    /// exactly.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::float_cmp
    )]
    pub fn intensity_at(&self, pixel: usize, half_width: f32) -> f32 {
        let distance = libm::fabs(pixel as f64 - self.position) as f32;
        if half_width <= 0.0 {
            return if distance == 0.0 { 1.0 } else { 0.0 };
        }
        if distance >= half_width {
            return 0.0;
        }
        1.0 - distance / half_width
    }
}
