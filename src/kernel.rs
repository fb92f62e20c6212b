// The subtraction kernel: compatibility check, per-pixel subtract with offset,
// saturating clamp to the output depth. This is the only algorithmic part of
// the crate; everything else is glue around it.

use crate::error::Error;
use crate::types::{Frame, PixelDepth, Samples};

// Per-depth scale from an offset percentage to sample counts. The constants
// are the original acquisition plugin's literal roundings of max_value/100;
// kept as-is because the clamp downstream makes the difference unobservable.
const OFFSET_SCALE_GRAY16: f64 = 655.35;
const OFFSET_SCALE_GRAY8: f64 = 2.56;

/// Convert an offset percentage (0..=100) into the additive integer term for
/// the given output depth. Truncates toward zero, so `Gray16` at 100% gives
/// exactly 65535.
pub fn offset_value(depth: PixelDepth, percent: f64) -> i32 {
    match depth {
        PixelDepth::Gray16 => (percent * OFFSET_SCALE_GRAY16) as i32,
        PixelDepth::Gray8 => (percent * OFFSET_SCALE_GRAY8) as i32,
    }
}

/// Subtract `background` from `live` pixel by pixel, add `offset`, clamp to
/// the live frame's depth. Returns a newly allocated frame with the live
/// frame's dimensions and depth.
///
/// Supported depth pairs (live, background): 8/8 -> 8, 16/16 -> 16, and the
/// mixed 16/8 -> 16 where background samples are widened to 0..=255. The
/// remaining pair 8/16 fails with `IncompatibleType`.
pub fn subtract_with_offset(
    live: &Frame,
    background: &Frame,
    offset: i32,
) -> Result<Frame, Error> {
    if live.width() != background.width() || live.height() != background.height() {
        return Err(Error::DimensionMismatch {
            live_width: live.width(),
            background_width: background.width(),
            live_roi: live.roi(),
            background_roi: background.roi(),
        });
    }
    match (live.samples(), background.samples()) {
        (Samples::Gray8(a), Samples::Gray8(b)) => {
            Frame::gray8(live.width(), live.height(), subtract_u8(a, b, offset))
        }
        (Samples::Gray16(a), Samples::Gray16(b)) => {
            Frame::gray16(live.width(), live.height(), subtract_u16(a, b, offset))
        }
        (Samples::Gray16(a), Samples::Gray8(b)) => {
            Frame::gray16(live.width(), live.height(), subtract_u16_u8(a, b, offset))
        }
        (Samples::Gray8(_), Samples::Gray16(_)) => Err(Error::IncompatibleType {
            live: live.depth(),
            background: background.depth(),
        }),
    }
}

// Samples widen to i32 as unsigned counts; u8/u16 zero-extend, so no sign bit
// ever leaks into the arithmetic.

fn subtract_u8(a: &[u8], b: &[u8], offset: i32) -> Vec<u8> {
    a.iter()
        .zip(b)
        .map(|(&a, &b)| clamp_u8(i32::from(a) - i32::from(b) + offset))
        .collect()
}

fn subtract_u16(a: &[u16], b: &[u16], offset: i32) -> Vec<u16> {
    a.iter()
        .zip(b)
        .map(|(&a, &b)| clamp_u16(i32::from(a) - i32::from(b) + offset))
        .collect()
}

fn subtract_u16_u8(a: &[u16], b: &[u8], offset: i32) -> Vec<u16> {
    a.iter()
        .zip(b)
        .map(|(&a, &b)| clamp_u16(i32::from(a) - i32::from(b) + offset))
        .collect()
}

#[inline]
fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[inline]
fn clamp_u16(value: i32) -> u16 {
    value.clamp(0, 65535) as u16
}
