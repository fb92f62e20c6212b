// Background file store: load a previously saved background image, and save
// a freshly snapped one as a timestamped TIFF next to the working directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, ImageBuffer, Luma};
use log::debug;

use crate::error::Error;
use crate::types::{Frame, Samples};

/// Load a background frame from an image file (tif/tiff/png/jpg).
///
/// 8-bit and 16-bit grayscale files map directly onto `Frame` depths; any
/// other layout (color, alpha) is flattened to 8-bit grayscale here so only
/// legal depths ever reach the kernel.
pub fn load_background(path: &Path) -> Result<Frame, Error> {
    let img = image::open(path)
        .map_err(|e| Error::BackgroundFile(format!("open {}: {e}", path.display())))?;
    let frame = match img {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            Frame::gray8(w as usize, h as usize, buf.into_raw())?
        }
        DynamicImage::ImageLuma16(buf) => {
            let (w, h) = buf.dimensions();
            Frame::gray16(w as usize, h as usize, buf.into_raw())?
        }
        other => {
            debug!("background {} is not grayscale, flattening to 8 bit", path.display());
            let buf = other.to_luma8();
            let (w, h) = buf.dimensions();
            Frame::gray8(w as usize, h as usize, buf.into_raw())?
        }
    };
    Ok(frame)
}

/// Save `frame` into `dir` as `<unix-seconds>-bg.tiff` and return the path.
pub fn save_background(frame: &Frame, dir: &Path) -> Result<PathBuf, Error> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::BackgroundFile(format!("clock before epoch: {e}")))?
        .as_secs();
    let path = dir.join(format!("{stamp}-bg.tiff"));

    let w = frame.width() as u32;
    let h = frame.height() as u32;
    match frame.samples() {
        Samples::Gray8(samples) => {
            let buf: ImageBuffer<Luma<u8>, _> =
                ImageBuffer::from_raw(w, h, samples.clone())
                    .ok_or_else(|| Error::BadFrame("frame buffer shorter than geometry".into()))?;
            buf.save(&path)
                .map_err(|e| Error::BackgroundFile(format!("save {}: {e}", path.display())))?;
        }
        Samples::Gray16(samples) => {
            let buf: ImageBuffer<Luma<u16>, _> =
                ImageBuffer::from_raw(w, h, samples.clone())
                    .ok_or_else(|| Error::BadFrame("frame buffer shorter than geometry".into()))?;
            buf.save(&path)
                .map_err(|e| Error::BackgroundFile(format!("save {}: {e}", path.display())))?;
        }
    }
    Ok(path)
}
