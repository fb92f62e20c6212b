// Core types shared by the kernel, the averager and the processor.

use std::fmt::{self, Display};

use crate::error::Error;

/// Sample width of a grayscale frame. These are the two depths the acquisition
/// side produces; anything else is rejected before a `Frame` ever exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelDepth {
    Gray8,
    Gray16,
}

impl PixelDepth {
    /// Largest representable sample value at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Gray8 => 255,
            PixelDepth::Gray16 => 65535,
        }
    }
}

impl Display for PixelDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelDepth::Gray8 => write!(f, "GRAY8"),
            PixelDepth::Gray16 => write!(f, "GRAY16"),
        }
    }
}

/// Rectangular selection inside a frame, reported in mismatch diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x={},y={},{}x{}]", self.x, self.y, self.width, self.height)
    }
}

/// Pixel storage for one frame, row-major, one sample per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Samples {
    Gray8(Vec<u8>),
    Gray16(Vec<u16>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Gray8(s) => s.len(),
            Samples::Gray16(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn depth(&self) -> PixelDepth {
        match self {
            Samples::Gray8(_) => PixelDepth::Gray8,
            Samples::Gray16(_) => PixelDepth::Gray16,
        }
    }
}

/// A grayscale frame: width x height unsigned samples, 8 or 16 bit.
/// Invariant: `samples.len() == width * height` (checked by the constructors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    samples: Samples,
    // Selected sub-region, if any. The kernel always operates on the full
    // buffer; this only shows up in diagnostics.
    roi: Option<Rect>,
}

impl Frame {
    /// Wrap an 8-bit sample buffer. Fails when the length does not match.
    pub fn gray8(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, Error> {
        Self::checked(width, height, Samples::Gray8(samples))
    }

    /// Wrap a 16-bit sample buffer. Fails when the length does not match.
    pub fn gray16(width: usize, height: usize, samples: Vec<u16>) -> Result<Self, Error> {
        Self::checked(width, height, Samples::Gray16(samples))
    }

    fn checked(width: usize, height: usize, samples: Samples) -> Result<Self, Error> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(Error::BadFrame(format!(
                "expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                samples.len()
            )));
        }
        Ok(Self { width, height, samples, roi: None })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn depth(&self) -> PixelDepth {
        self.samples.depth()
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Select a sub-region (diagnostics only).
    pub fn set_roi(&mut self, roi: Rect) {
        self.roi = Some(roi);
    }

    /// The selected sub-region, or the full frame bounds when none is set.
    pub fn roi(&self) -> Rect {
        self.roi.unwrap_or(Rect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        })
    }
}
