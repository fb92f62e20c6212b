// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

use crate::types::{PixelDepth, Rect};

#[derive(Debug)]
pub enum Error {
    /// Live and background frames differ in width or height. Carries both
    /// widths plus each frame's selected sub-region for diagnostics.
    DimensionMismatch {
        live_width: usize,
        background_width: usize,
        live_roi: Rect,
        background_roi: Rect,
    },
    /// The (live, background) depth pair is not one of the supported
    /// combinations: 8/8, 16/16, 16/8.
    IncompatibleType {
        live: PixelDepth,
        background: PixelDepth,
    },
    BadFrame(String),       // Sample buffer does not match the stated geometry
    BackgroundFile(String), // Reading or writing a background image file failed
    WindowInit(String),     // Creating the window failed
    WindowUpdate(String),   // Updating the window buffer failed
    CameraInit(String),     // Opening/starting the camera failed
    CameraFrame(String),    // Grabbing/decoding a frame failed
}

impl Display for Error {
    // This decides how the error is printed to the console and to the HUD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch {
                live_width,
                background_width,
                live_roi,
                background_roi,
            } => write!(
                f,
                "Images are of unequal size, {live_width},{background_width}, \
                 ROI: {live_roi},{background_roi}"
            ),
            Error::IncompatibleType { live, background } => write!(
                f,
                "Types of images to be subtracted were not compatible \
                 (live {live}, background {background})"
            ),
            Error::BadFrame(s) => write!(f, "Bad frame: {s}"),
            Error::BackgroundFile(s) => write!(f, "Background file error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::CameraInit(s) => write!(f, "Camera init error: {s}"),
            Error::CameraFrame(s) => write!(f, "Camera frame error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
