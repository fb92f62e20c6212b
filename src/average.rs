// Background averaging: fold N captured frames into one background frame.
// N=1 degenerates to a plain snapshot.

use crate::error::Error;
use crate::types::{Frame, PixelDepth, Samples};

/// Average the given frames per pixel (integer truncation) into a single
/// background frame of the same dimensions and depth.
///
/// All frames must share dimensions and depth; any mismatch aborts the whole
/// operation so no partial background is ever committed. An empty slice is
/// an error.
pub fn average_background(frames: &[Frame]) -> Result<Frame, Error> {
    let first = frames
        .first()
        .ok_or_else(|| Error::BadFrame("average_background: no frames".into()))?;
    let width = first.width();
    let height = first.height();
    let depth = first.depth();

    for frame in frames {
        if frame.width() != width || frame.height() != height {
            return Err(Error::DimensionMismatch {
                live_width: frame.width(),
                background_width: width,
                live_roi: frame.roi(),
                background_roi: first.roi(),
            });
        }
        if frame.depth() != depth {
            return Err(Error::IncompatibleType {
                live: frame.depth(),
                background: depth,
            });
        }
    }

    // Accumulate in u64: even 65535 * a few million frames stays far from
    // overflow, so the sum is exact.
    let mut acc = vec![0u64; width * height];
    for frame in frames {
        match frame.samples() {
            Samples::Gray8(samples) => {
                for (sum, &s) in acc.iter_mut().zip(samples) {
                    *sum += u64::from(s);
                }
            }
            Samples::Gray16(samples) => {
                for (sum, &s) in acc.iter_mut().zip(samples) {
                    *sum += u64::from(s);
                }
            }
        }
    }

    let n = frames.len() as u64;
    match depth {
        PixelDepth::Gray8 => {
            Frame::gray8(width, height, acc.iter().map(|&s| (s / n) as u8).collect())
        }
        PixelDepth::Gray16 => {
            Frame::gray16(width, height, acc.iter().map(|&s| (s / n) as u16).collect())
        }
    }
}
