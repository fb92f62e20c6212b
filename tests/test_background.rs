// tests/test_background.rs — Background file store: saved frames come back
// with the same depth, dimensions and samples.

use std::fs;

use darkframe::background::{load_background, save_background};
use darkframe::types::Frame;

#[test]
fn saved_8bit_background_loads_back_identically() {
    let dir = std::env::temp_dir().join("darkframe-test-bg8");
    fs::create_dir_all(&dir).unwrap();

    let frame = Frame::gray8(4, 3, vec![0, 1, 2, 3, 250, 251, 252, 253, 254, 255, 128, 64])
        .unwrap();
    let path = save_background(&frame, &dir).unwrap();
    let loaded = load_background(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, frame);
}

#[test]
fn saved_16bit_background_loads_back_identically() {
    let dir = std::env::temp_dir().join("darkframe-test-bg16");
    fs::create_dir_all(&dir).unwrap();

    let frame = Frame::gray16(2, 2, vec![0, 1000, 40000, 65535]).unwrap();
    let path = save_background(&frame, &dir).unwrap();
    let loaded = load_background(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, frame);
}

#[test]
fn loading_missing_file_fails() {
    let missing = std::env::temp_dir().join("darkframe-does-not-exist.tiff");
    assert!(load_background(&missing).is_err());
}
