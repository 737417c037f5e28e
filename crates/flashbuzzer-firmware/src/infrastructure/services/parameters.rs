use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use esp_storage::FlashStorage;
use flashbuzzer_composer::AnimationSettings;
use flashbuzzer_core::{NorFlashDriver, ParameterRegistry, RecordStore};
use flashbuzzer_portal::TITLE_PARAM;

use crate::{config, mk_static};

/// Parameter records on the internal flash
pub type ParameterStore = RecordStore<NorFlashDriver<FlashStorage<'static>>>;

/// Registry shared between the portal and the driver loop
pub type SharedRegistry = Mutex<CriticalSectionRawMutex, ParameterRegistry<ParameterStore>>;

/// Open the parameter block and register every device parameter.
///
/// With `factory_reset` set the block is erased first, so all parameters
/// start from their defaults.
pub fn init_parameter_registry(
    flash: FlashStorage<'static>,
    factory_reset: bool,
) -> &'static SharedRegistry {
    let driver = NorFlashDriver::new(flash, config::STORAGE.offset);
    let mut store = RecordStore::new(driver, config::STORAGE.namespace);
    if factory_reset {
        if let Err(e) = store.clear() {
            log::error!("params: factory reset failed: {}", e);
        }
    }

    let mut registry = ParameterRegistry::new(store);
    if let Err(e) = registry.register_text(TITLE_PARAM, config::DEFAULT_TITLE) {
        log::warn!("params: failed to register '{}': {}", TITLE_PARAM, e);
    }
    if let Err(e) = AnimationSettings::register(&mut registry) {
        log::warn!("params: failed to register animation parameters: {}", e);
    }
    log::info!("params: {} parameters registered", registry.len());

    mk_static!(SharedRegistry, Mutex::new(registry))
}
