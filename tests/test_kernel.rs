// tests/test_kernel.rs — Integration tests for the subtraction kernel:
// per-pixel formula, saturation, depth dispatch, and offset scaling.

use darkframe::error::Error;
use darkframe::kernel::{offset_value, subtract_with_offset};
use darkframe::types::{Frame, PixelDepth, Rect, Samples};

fn gray8(width: usize, height: usize, samples: Vec<u8>) -> Frame {
    Frame::gray8(width, height, samples).unwrap()
}

fn gray16(width: usize, height: usize, samples: Vec<u16>) -> Frame {
    Frame::gray16(width, height, samples).unwrap()
}

fn samples8(frame: &Frame) -> &[u8] {
    match frame.samples() {
        Samples::Gray8(s) => s,
        other => panic!("expected 8-bit samples, got {:?}", other.depth()),
    }
}

fn samples16(frame: &Frame) -> &[u16] {
    match frame.samples() {
        Samples::Gray16(s) => s,
        other => panic!("expected 16-bit samples, got {:?}", other.depth()),
    }
}

// ===== 8-bit formula =====

#[test]
fn subtract_8bit_matches_clamped_formula() {
    let a: Vec<u8> = vec![0, 1, 2, 50, 100, 128, 200, 254, 255];
    let b: Vec<u8> = vec![255, 0, 2, 25, 150, 128, 1, 254, 0];
    let offset = 7;

    let live = gray8(3, 3, a.clone());
    let background = gray8(3, 3, b.clone());
    let result = subtract_with_offset(&live, &background, offset).unwrap();

    assert_eq!(result.depth(), PixelDepth::Gray8);
    for (i, &got) in samples8(&result).iter().enumerate() {
        let raw = i32::from(a[i]) - i32::from(b[i]) + offset;
        assert_eq!(i32::from(got), raw.clamp(0, 255), "pixel {i}");
    }
}

#[test]
fn subtract_8bit_saturates_at_both_ends() {
    // 0 - 255 + 0 underflows to 0
    let r = subtract_with_offset(&gray8(1, 1, vec![0]), &gray8(1, 1, vec![255]), 0).unwrap();
    assert_eq!(samples8(&r), &[0]);

    // 255 - 0 + 0 stays at 255
    let r = subtract_with_offset(&gray8(1, 1, vec![255]), &gray8(1, 1, vec![0]), 0).unwrap();
    assert_eq!(samples8(&r), &[255]);

    // 10 - 0 + 250 = 260 clamps to 255
    let r = subtract_with_offset(&gray8(1, 1, vec![10]), &gray8(1, 1, vec![0]), 250).unwrap();
    assert_eq!(samples8(&r), &[255]);
}

#[test]
fn subtract_zero_background_zero_offset_is_identity() {
    let a: Vec<u8> = (0..=255).map(|v| v as u8).collect();
    let live = gray8(16, 16, a.clone());
    let background = gray8(16, 16, vec![0; 256]);
    let result = subtract_with_offset(&live, &background, 0).unwrap();
    assert_eq!(samples8(&result), &a[..]);
}

// ===== 16-bit formula =====

#[test]
fn subtract_16bit_matches_clamped_formula() {
    let a: Vec<u16> = vec![0, 300, 40000, 65535, 32768, 65535];
    let b: Vec<u16> = vec![65535, 300, 100, 0, 40000, 65535];
    let offset = 1000;

    let live = gray16(3, 2, a.clone());
    let background = gray16(3, 2, b.clone());
    let result = subtract_with_offset(&live, &background, offset).unwrap();

    assert_eq!(result.depth(), PixelDepth::Gray16);
    for (i, &got) in samples16(&result).iter().enumerate() {
        let raw = i32::from(a[i]) - i32::from(b[i]) + offset;
        assert_eq!(i32::from(got), raw.clamp(0, 65535), "pixel {i}");
    }
}

#[test]
fn subtract_16bit_values_above_signed_half_range_stay_unsigned() {
    // 40000 and 50000 are negative when misread as i16; the kernel must treat
    // them as unsigned, so 50000 - 40000 = 10000 exactly.
    let r = subtract_with_offset(&gray16(1, 1, vec![50000]), &gray16(1, 1, vec![40000]), 0)
        .unwrap();
    assert_eq!(samples16(&r), &[10000]);
}

// ===== Mixed 16/8 =====

#[test]
fn subtract_16bit_live_8bit_background_widens_background() {
    let live = gray16(2, 1, vec![1000, 100]);
    let background = gray8(2, 1, vec![255, 200]);
    let result = subtract_with_offset(&live, &background, 0).unwrap();

    assert_eq!(result.depth(), PixelDepth::Gray16);
    // 1000 - 255 = 745; 100 - 200 clamps to 0
    assert_eq!(samples16(&result), &[745, 0]);
}

// ===== Error cases =====

#[test]
fn dimension_mismatch_is_rejected() {
    let live = gray8(100, 100, vec![0; 100 * 100]);
    let background = gray8(100, 50, vec![0; 100 * 50]);
    match subtract_with_offset(&live, &background, 0) {
        Err(Error::DimensionMismatch {
            live_width,
            background_width,
            live_roi,
            background_roi,
        }) => {
            assert_eq!(live_width, 100);
            assert_eq!(background_width, 100);
            assert_eq!(live_roi, Rect { x: 0, y: 0, width: 100, height: 100 });
            assert_eq!(background_roi, Rect { x: 0, y: 0, width: 100, height: 50 });
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn dimension_mismatch_reports_selected_roi() {
    let mut live = gray8(4, 4, vec![0; 16]);
    live.set_roi(Rect { x: 1, y: 1, width: 2, height: 2 });
    let background = gray8(4, 2, vec![0; 8]);
    match subtract_with_offset(&live, &background, 0) {
        Err(Error::DimensionMismatch { live_roi, .. }) => {
            assert_eq!(live_roi, Rect { x: 1, y: 1, width: 2, height: 2 });
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn narrow_live_with_wide_background_is_incompatible() {
    let live = gray8(2, 2, vec![0; 4]);
    let background = gray16(2, 2, vec![0; 4]);
    match subtract_with_offset(&live, &background, 0) {
        Err(Error::IncompatibleType { live, background }) => {
            assert_eq!(live, PixelDepth::Gray8);
            assert_eq!(background, PixelDepth::Gray16);
        }
        other => panic!("expected IncompatibleType, got {other:?}"),
    }
}

// ===== Offset scaling =====

#[test]
fn offset_value_uses_per_depth_scale_factors() {
    // floor(100 * 655.35) = 65535, floor(50 * 2.56) = 128
    assert_eq!(offset_value(PixelDepth::Gray16, 100.0), 65535);
    assert_eq!(
        offset_value(PixelDepth::Gray16, 100.0),
        PixelDepth::Gray16.max_value() as i32
    );
    assert_eq!(offset_value(PixelDepth::Gray8, 50.0), 128);
    assert_eq!(offset_value(PixelDepth::Gray16, 0.0), 0);
    assert_eq!(offset_value(PixelDepth::Gray8, 0.0), 0);
    // the 8-bit factor intentionally overshoots at 100%; the clamp absorbs it
    assert_eq!(offset_value(PixelDepth::Gray8, 100.0), 256);
}

#[test]
fn offset_value_truncates_toward_zero() {
    // 1.5 * 2.56 = 3.84 -> 3
    assert_eq!(offset_value(PixelDepth::Gray8, 1.5), 3);
    // 0.5 * 655.35 = 327.675 -> 327
    assert_eq!(offset_value(PixelDepth::Gray16, 0.5), 327);
}

// ===== Frame invariant =====

#[test]
fn frame_constructor_rejects_wrong_buffer_length() {
    assert!(matches!(Frame::gray8(4, 4, vec![0; 15]), Err(Error::BadFrame(_))));
    assert!(matches!(Frame::gray16(4, 4, vec![0; 17]), Err(Error::BadFrame(_))));
    assert!(Frame::gray8(4, 4, vec![0; 16]).is_ok());
}
