use embassy_time::Instant;
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};
use flashbuzzer_composer::TriggerInput;

use crate::config;

/// Trigger button wired between the pin and ground.
pub struct TriggerButton {
    input: Input<'static>,
    debouncer: TriggerInput,
}

impl TriggerButton {
    pub fn new(pin: impl InputPin + 'static) -> Self {
        let input_config = InputConfig::default().with_pull(Pull::Up);
        Self {
            input: Input::new(pin, input_config),
            debouncer: TriggerInput::new(config::TRIGGER.debounce),
        }
    }

    /// Raw level, pressed pulls the pin low
    pub fn is_held(&self) -> bool {
        self.input.is_low()
    }

    /// Take the current level as the settled state.
    ///
    /// A button held through boot then fires only after release and a new press.
    pub fn latch_level(&mut self) -> bool {
        let held = self.is_held();
        self.debouncer = TriggerInput::new_with_level(config::TRIGGER.debounce, held);
        held
    }

    /// Sample the pin. Returns `true` once per debounced press.
    pub fn poll(&mut self, now: Instant) -> bool {
        let pressed = self.is_held();
        self.debouncer.update(pressed, now)
    }
}
