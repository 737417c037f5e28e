//! Dot Engine - advances dots and renders frames
//!
//! Each tick:
//! - Advances every dot by `speed × elapsed_seconds`
//! - Clears the frame and additively composites every dot still on the strip
//! - Removes the dots that reached the strip end
//! - Flushes the frame to the driver
//!
//! A tick with a non-positive elapsed time does nothing at all, which guards
//! against a non-monotonic clock and repeated calls within one timer tick.

use alloc::vec::Vec;

use super::{
    dot::Dot, driver::LedDriver, frame::FrameBuffer, settings::AnimationSettings,
};

/// Dot Engine
///
/// Generic over `D: LedDriver` to support different hardware backends.
/// `N` is the strip length in pixels.
pub struct DotEngine<D: LedDriver<N>, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Dots in flight, in trigger order
    dots: Vec<Dot>,
    /// Frame rebuilt on every tick
    frame: FrameBuffer<N>,
}

impl<D: LedDriver<N>, const N: usize> DotEngine<D, N> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            dots: Vec::new(),
            frame: FrameBuffer::new(),
        }
    }

    /// Spawn a new dot at the strip start
    pub fn trigger(&mut self) {
        self.dots.push(Dot::new());
        log::debug!("engine: dot spawned, {} in flight", self.dots.len());
    }

    /// Advance the animation by `elapsed_seconds` and render one frame.
    ///
    /// Returns `true` if a frame was flushed to the driver.
    pub fn tick(&mut self, elapsed_seconds: f32, settings: &AnimationSettings) -> bool {
        if elapsed_seconds.is_nan() || elapsed_seconds <= 0.0 {
            return false;
        }

        let distance = f64::from(settings.speed) * f64::from(elapsed_seconds);
        for dot in &mut self.dots {
            dot.advance(distance);
        }

        self.render(settings);

        let before = self.dots.len();
        self.dots.retain(|dot| !dot.is_expired(N));
        if self.dots.len() != before {
            log::debug!(
                "engine: {} dot(s) expired, {} in flight",
                before - self.dots.len(),
                self.dots.len()
            );
        }

        self.driver.write(&self.frame.to_rgb(), settings.brightness);
        true
    }

    fn render(&mut self, settings: &AnimationSettings) {
        self.frame.clear();
        for dot in self.dots.iter().filter(|dot| !dot.is_expired(N)) {
            for pixel in 0..N {
                let intensity = dot.intensity_at(pixel, settings.half_width);
                if intensity > 0.0 {
                    self.frame.add(pixel, settings.color, intensity);
                }
            }
        }
    }

    /// Dots currently in flight
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// The last rendered frame
    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
