//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the dot engine to be hardware-agnostic.

use smart_leds::RGB8;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The dot engine is generic over this trait.
pub trait LedDriver<const N: usize> {
    /// Write colors to the LED strip.
    ///
    /// `brightness` is the global strip brightness; scaling by it is the
    /// driver's job, the colors are passed unscaled.
    fn write(&mut self, colors: &[RGB8; N], brightness: u8);
}
