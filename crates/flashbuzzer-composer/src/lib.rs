#![no_std]

//! Dot Composer - moving dots over a fixed-length LED strip
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction (`[LedDriver]` trait)
//! - `dot` - A single moving dot and its brightness falloff
//! - `frame` - Additive per-pixel accumulators, flushed as RGB
//! - `settings` - Per-tick configuration snapshot read from the parameter registry
//! - `engine` - Advances dots by elapsed time and renders frames
//! - `trigger` - Debounced trigger input producing rising edges
//!
//! The engine is generic over `LedDriver`, allowing different hardware backends.

extern crate alloc;

pub mod dot;
pub mod driver;
pub mod engine;
pub mod frame;
pub mod settings;
pub mod trigger;

// Driver exports
pub use driver::LedDriver;

// Engine exports
pub use dot::Dot;
pub use engine::DotEngine;
pub use frame::FrameBuffer;

// Settings exports
pub use settings::AnimationSettings;

// Input exports
pub use trigger::TriggerInput;
