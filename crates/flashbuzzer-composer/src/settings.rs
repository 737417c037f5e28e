//! Animation settings
//!
//! The engine reads its configuration as one snapshot per tick so that an
//! edit from the portal never lands halfway through a frame.

use flashbuzzer_core::{KeyValueStore, ParamError, ParameterRegistry};

/// Red channel intensity, `0..=255`
pub const PARAM_COLOR_RED: &str = "Color_Red";
/// Green channel intensity, `0..=255`
pub const PARAM_COLOR_GREEN: &str = "Color_Green";
/// Blue channel intensity, `0..=255`
pub const PARAM_COLOR_BLUE: &str = "Color_Blue";
/// Dot speed in pixels per second
pub const PARAM_DOT_SPEED: &str = "Dot_Speed";
/// Dot half-width in pixels
pub const PARAM_DOT_WIDTH: &str = "Dot_Width";
/// Global strip brightness, `0..=255`
pub const PARAM_STRIP_BRIGHTNESS: &str = "Strip_Brightness";

const DEFAULT_CHANNEL: f32 = 255.0;
const DEFAULT_SPEED: f32 = 30.0;
const DEFAULT_HALF_WIDTH: f32 = 30.0;
const DEFAULT_BRIGHTNESS: u8 = 200;

/// Configuration inputs of one engine tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Channel intensities (red, green, blue)
    pub color: [f32; 3],
    /// Pixels per second, may be negative
    pub speed: f32,
    /// Global brightness, applied by the LED driver
    pub brightness: u8,
    /// Falloff half-width in pixels
    pub half_width: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            color: [DEFAULT_CHANNEL; 3],
            speed: DEFAULT_SPEED,
            brightness: DEFAULT_BRIGHTNESS,
            half_width: DEFAULT_HALF_WIDTH,
        }
    }
}

impl AnimationSettings {
    /// Read a consistent snapshot from the registry.
    ///
    /// Missing or mistyped parameters keep their default value.
    pub fn from_registry<S: KeyValueStore>(registry: &ParameterRegistry<S>) -> Self {
        let defaults = Self::default();
        let number = |name: &str, default: f32| match registry.get_number(name) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("engine: '{}' unavailable ({}), using {}", name, e, default);
                default
            }
        };

        Self {
            color: [
                number(PARAM_COLOR_RED, defaults.color[0]),
                number(PARAM_COLOR_GREEN, defaults.color[1]),
                number(PARAM_COLOR_BLUE, defaults.color[2]),
            ],
            speed: number(PARAM_DOT_SPEED, defaults.speed),
            brightness: to_brightness(number(
                PARAM_STRIP_BRIGHTNESS,
                f32::from(defaults.brightness),
            )),
            half_width: number(PARAM_DOT_WIDTH, defaults.half_width),
        }
    }

    /// Register every animation parameter with its default value.
    ///
    /// All parameters are registered even if one fails; the first error is
    /// returned.
    pub fn register<S: KeyValueStore>(registry: &mut ParameterRegistry<S>) -> Result<(), ParamError> {
        let defaults = Self::default();
        [
            (PARAM_COLOR_RED, defaults.color[0]),
            (PARAM_COLOR_GREEN, defaults.color[1]),
            (PARAM_COLOR_BLUE, defaults.color[2]),
            (PARAM_DOT_SPEED, defaults.speed),
            (PARAM_DOT_WIDTH, defaults.half_width),
            (PARAM_STRIP_BRIGHTNESS, f32::from(defaults.brightness)),
        ]
        .into_iter()
        .fold(Ok(()), |result, (name, default)| {
            result.and(registry.register_number(name, default))
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_brightness(value: f32) -> u8 {
    libm::roundf(value.clamp(0.0, 255.0)) as u8
}
