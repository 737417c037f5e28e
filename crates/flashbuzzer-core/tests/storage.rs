mod support;

use flashbuzzer_core::{
    KeyValueStore, NorFlashDriver, PARTITION_SIZE, ParamKind, RecordStore, StorageError,
    TypedValue,
};
use support::{ERASE_SIZE, RamFlash};

const OFFSET: u32 = ERASE_SIZE as u32;

fn store_on(flash: &RamFlash, namespace: &'static str) -> RecordStore<NorFlashDriver<RamFlash>> {
    RecordStore::new(NorFlashDriver::new(flash.clone(), OFFSET), namespace)
}

#[test]
fn test_blank_partition_has_no_records() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");

    assert_eq!(store.load("Color_Red", ParamKind::Number), Ok(None));
    assert_eq!(store.load("Title", ParamKind::Text), Ok(None));
}

#[test]
fn test_store_then_load() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");

    store.store("Color_Red", &TypedValue::Number(12.5)).unwrap();
    store.store("Title", &TypedValue::from("Hallway")).unwrap();

    assert_eq!(
        store.load("Color_Red", ParamKind::Number),
        Ok(Some(TypedValue::Number(12.5)))
    );
    assert_eq!(
        store.load("Title", ParamKind::Text),
        Ok(Some(TypedValue::from("Hallway")))
    );
}

#[test]
fn test_load_with_other_kind_is_absent() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");

    store.store("Color_Red", &TypedValue::Number(1.0)).unwrap();

    assert_eq!(store.load("Color_Red", ParamKind::Text), Ok(None));
}

#[test]
fn test_overwrite_keeps_other_records() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");

    store.store("Color_Red", &TypedValue::Number(1.0)).unwrap();
    store.store("Color_Green", &TypedValue::Number(2.0)).unwrap();
    store.store("Color_Red", &TypedValue::Number(3.0)).unwrap();

    assert_eq!(
        store.load("Color_Red", ParamKind::Number),
        Ok(Some(TypedValue::Number(3.0)))
    );
    assert_eq!(
        store.load("Color_Green", ParamKind::Number),
        Ok(Some(TypedValue::Number(2.0)))
    );
}

#[test]
fn test_records_survive_reopen() {
    let flash = RamFlash::new(2);
    {
        let mut store = store_on(&flash, "webconfig");
        store.store("Dot_Speed", &TypedValue::Number(-0.25)).unwrap();
    }

    let mut reopened = store_on(&flash, "webconfig");
    assert_eq!(
        reopened.load("Dot_Speed", ParamKind::Number),
        Ok(Some(TypedValue::Number(-0.25)))
    );
}

#[test]
fn test_namespaces_are_isolated() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");
    store.store("Color_Red", &TypedValue::Number(7.0)).unwrap();

    let mut other = store_on(&flash, "other");
    assert_eq!(other.load("Color_Red", ParamKind::Number), Ok(None));
}

#[test]
fn test_writes_stay_inside_partition() {
    let flash = RamFlash::new(3);
    let mut store = store_on(&flash, "webconfig");

    store.store("Title", &TypedValue::from("Hallway")).unwrap();

    let data = flash.snapshot();
    let start = OFFSET as usize;
    assert!(data[..start].iter().all(|&b| b == 0xFF));
    assert!(data[start + PARTITION_SIZE..].iter().all(|&b| b == 0xFF));
    assert!(data[start..start + PARTITION_SIZE].iter().any(|&b| b != 0xFF));
}

#[test]
fn test_clear_erases_records() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");
    store.store("Color_Red", &TypedValue::Number(7.0)).unwrap();

    store.clear().unwrap();

    assert_eq!(store.load("Color_Red", ParamKind::Number), Ok(None));
}

#[test]
fn test_oversized_value_reports_partition_full() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");
    store.store("Color_Red", &TypedValue::Number(7.0)).unwrap();

    let huge = "x".repeat(PARTITION_SIZE);
    assert_eq!(
        store.store("Title", &TypedValue::from(huge.as_str())),
        Err(StorageError::PartitionFull)
    );
    assert_eq!(
        store.load("Color_Red", ParamKind::Number),
        Ok(Some(TypedValue::Number(7.0)))
    );
}

#[test]
fn test_long_name_is_rejected() {
    let flash = RamFlash::new(2);
    let mut store = store_on(&flash, "webconfig");

    let name = "n".repeat(300);
    assert_eq!(
        store.store(&name, &TypedValue::Number(1.0)),
        Err(StorageError::KeyTooLong)
    );
}

#[test]
fn test_driver_failures_surface() {
    let flash = RamFlash::new(2);
    let faults = flash.faults();
    let mut store = store_on(&flash, "webconfig");

    faults.fail_writes.set(true);
    assert_eq!(
        store.store("Color_Red", &TypedValue::Number(1.0)),
        Err(StorageError::DriverError)
    );

    faults.fail_reads.set(true);
    assert_eq!(
        store.load("Color_Red", ParamKind::Number),
        Err(StorageError::DriverError)
    );
}

#[test]
fn test_corrupted_partition_is_rewritten() {
    let flash = RamFlash::new(2);
    let mut driver = NorFlashDriver::new(flash.clone(), OFFSET);
    // valid magic and namespace followed by a record with an unknown tag
    let mut image = vec![0xEF, 0xBE, 9];
    image.extend_from_slice(b"webconfig");
    image.extend_from_slice(&[0x07, 0x01, 0x00, 0x00]);
    image.resize(PARTITION_SIZE, 0xFF);
    flashbuzzer_core::StorageDriver::write(&mut driver, &image).unwrap();

    let mut store = store_on(&flash, "webconfig");
    assert_eq!(
        store.load("Color_Red", ParamKind::Number),
        Err(StorageError::InvalidData)
    );

    store.store("Color_Red", &TypedValue::Number(4.0)).unwrap();
    assert_eq!(
        store.load("Color_Red", ParamKind::Number),
        Ok(Some(TypedValue::Number(4.0)))
    );
}
