// Opens the default camera and converts frames into 8-bit grayscale `Frame`s.
// This stands in for the acquisition side of a real deployment: the kernel
// only ever sees frames that already passed the grayscale/depth gate here.

use darkframe::error::Error;
use darkframe::types::Frame;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::LumaFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// A small wrapper around nokhwa::Camera so the main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Try to open camera `index` at a target resolution (falls back if not
    /// exact). On success we just hold an open stream; nothing is shown yet.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        // 1) Choose the device (0 = default webcam)
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to grayscale
            30,                // target FPS
        );

        // 2) Ask for grayscale frames near the requested format.
        let req = RequestedFormat::new::<LumaFormat>(RequestedFormatType::Closest(fmt));

        // 3) Create the camera (this might fail if no device exists).
        let mut cam =
            Camera::new(idx, req).map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        // 4) Start streaming frames from the camera.
        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // 5) The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Grab one frame and return it as an 8-bit grayscale `Frame`.
    pub fn next_frame(&mut self) -> Result<Frame, Error> {
        // 1) Pull a frame (blocks until a new frame is ready).
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        // 2) Decode to ImageBuffer<Luma<u8>, Vec<u8>>; nokhwa handles the
        //    raw-format-to-luma conversion for us.
        let gray = frame
            .decode_image::<LumaFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode luma: {e}")))?;

        // 3) Wrap in a Frame. The length check in the constructor also guards
        //    against a short decode.
        let (w, h) = gray.dimensions();
        Frame::gray8(w as usize, h as usize, gray.into_raw())
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
