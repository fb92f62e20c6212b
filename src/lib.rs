// darkframe: subtract a stored background frame from live grayscale frames,
// with a percentage-based black-level offset and optional frame averaging.
//
// The kernel (src/kernel.rs) is the core; the processor wraps it with the
// pass-through policy an acquisition pipeline expects, and the rest is
// background bookkeeping. src/main.rs holds a live camera demo.

pub mod average;
pub mod background;
pub mod error;
pub mod kernel;
pub mod processor;
pub mod types;

pub use crate::average::average_background;
pub use crate::background::{load_background, save_background};
pub use crate::error::Error;
pub use crate::kernel::{offset_value, subtract_with_offset};
pub use crate::processor::Processor;
pub use crate::types::{Frame, PixelDepth, Rect, Samples};
