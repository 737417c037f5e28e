//! Driver loop
//!
//! Samples the trigger, takes one settings snapshot from the registry and
//! advances the dot engine by the time elapsed since the previous frame.

use embassy_time::{Instant, Timer};
use flashbuzzer_composer::{AnimationSettings, DotEngine};

use crate::config::{self, STRIP_LENGTH};
use crate::infrastructure::adapters::TriggerButton;
use crate::infrastructure::drivers::EspLedDriver;
use crate::infrastructure::services::SharedRegistry;

#[embassy_executor::task]
pub async fn animation_task(
    registry: &'static SharedRegistry,
    driver: EspLedDriver<'static>,
    mut button: TriggerButton,
) {
    let mut engine = DotEngine::<_, STRIP_LENGTH>::new(driver);
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        if button.poll(now) {
            log::info!("engine: triggered, {} dots running", engine.dots().len() + 1);
            engine.trigger();
        }

        let settings = AnimationSettings::from_registry(&*registry.lock().await);

        let elapsed = now.saturating_duration_since(last_tick);
        last_tick = now;
        #[allow(clippy::cast_precision_loss)]
        let seconds = elapsed.as_micros() as f32 / 1_000_000.0;
        engine.tick(seconds, &settings);

        Timer::after(config::LIGHT.frame_period).await;
    }
}
