// The frame processor: holds the configured background and offset, runs the
// kernel on every live frame, and turns hard errors into pass-through plus a
// status message so the surrounding pipeline never stalls.

use log::{debug, error};

use crate::kernel::{offset_value, subtract_with_offset};
use crate::types::Frame;

const MSG_DONE: &str = "Subtracted.";
const ERR_NO_BG_IMAGE: &str = "No background image specified.";

/// Background-subtraction stage for a live acquisition pipeline.
///
/// The background reference and the offset percentage are each replaced by a
/// single assignment and read once per `process` call, so a configuration
/// change between frames is seen consistently by the next invocation.
pub struct Processor {
    background: Option<Frame>,
    offset_percent: f64,
    status: String,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self {
            background: None,
            offset_percent: 0.0,
            status: String::new(),
        }
    }

    /// Replace the background reference wholesale. `None` turns subtraction
    /// into a pass-through.
    pub fn set_background(&mut self, background: Option<Frame>) {
        self.background = background;
    }

    pub fn background(&self) -> Option<&Frame> {
        self.background.as_ref()
    }

    /// Set the black-level offset as a percentage of the output depth's
    /// maximum value. Clamped to 0..=100.
    pub fn set_offset_percent(&mut self, percent: f64) {
        self.offset_percent = percent.clamp(0.0, 100.0);
    }

    pub fn offset_percent(&self) -> f64 {
        self.offset_percent
    }

    /// Subtract the configured background from `frame`.
    ///
    /// With no background configured the frame passes through unchanged; a
    /// kernel error (dimension or type mismatch) is logged, recorded as the
    /// status text, and also yields the original frame unchanged. The offset
    /// is scaled from the *live* frame's depth, not the background's.
    pub fn process(&mut self, frame: Frame) -> Frame {
        let Some(background) = &self.background else {
            debug!("{ERR_NO_BG_IMAGE}");
            self.status = ERR_NO_BG_IMAGE.to_string();
            return frame;
        };
        let offset = offset_value(frame.depth(), self.offset_percent);
        match subtract_with_offset(&frame, background, offset) {
            Ok(result) => {
                self.status = MSG_DONE.to_string();
                result
            }
            Err(e) => {
                error!("background subtraction failed: {e}");
                self.status = e.to_string();
                frame
            }
        }
    }

    /// Last status text, the message a host GUI would show next to the stage.
    pub fn last_status(&self) -> &str {
        &self.status
    }
}
