// Live demo of background subtraction:
// • Live camera is shown with the stored background subtracted (when enabled).
// • B snaps a new background, averaged over several consecutive frames.
// • C clears the background. E toggles subtraction. S saves the background.
// • Up/Down adjust the black-level offset in 0.5% steps. ESC quits.
// • Pass an image file path as the first argument to start with a saved
//   background.

mod camera;
mod draw;

use std::path::Path;
use std::time::{Duration, Instant};

use camera::CameraCapture;
use darkframe::{Error, Processor, average_background, load_background, save_background};
use draw::{Drawer, draw_text_5x7, expand_gray};

// Frames folded into one background on snap. 1 would be a plain snapshot.
const BG_AVERAGE_COUNT: usize = 8;

const OFFSET_STEP_PERCENT: f64 = 0.5;

fn main() -> Result<(), Error> {
    /* --- Camera + window setup --- */
    let mut cam = CameraCapture::new(0, 640, 480)?;
    let (w, h) = cam.resolution();
    let (w, h) = (w as usize, h as usize);
    let mut drawer = Drawer::new("Darkframe - Background Subtraction", w, h)?;

    /* --- Processor state --- */
    let mut processor = Processor::new();
    let mut enabled = true;

    // Optionally restore a background from a file given on the command line.
    if let Some(path) = std::env::args().nth(1) {
        let bg = load_background(Path::new(&path))?;
        println!("Loaded background {path} ({}x{}, {})", bg.width(), bg.height(), bg.depth());
        processor.set_background(Some(bg));
    }

    /* --- Reusable screen buffer (the image you actually see) --- */
    let mut screen = vec![0u32; w * h];

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Grab a fresh live frame. */
        let live = cam.next_frame()?;

        /* 2) Inputs */
        if drawer.e_pressed_once() {
            enabled = !enabled;
        }
        if drawer.c_pressed_once() {
            processor.set_background(None);
            println!("Background cleared");
        }
        if drawer.up_pressed() {
            processor.set_offset_percent(processor.offset_percent() + OFFSET_STEP_PERCENT);
        }
        if drawer.down_pressed() {
            processor.set_offset_percent(processor.offset_percent() - OFFSET_STEP_PERCENT);
        }
        if drawer.s_pressed_once() {
            match processor.background() {
                Some(bg) => match save_background(bg, Path::new(".")) {
                    Ok(path) => println!("Saved background to {}", path.display()),
                    Err(e) => eprintln!("{e}"),
                },
                None => println!("No background to save"),
            }
        }

        /* 3) Snap a new background: capture the next frames back-to-back and
           average them. The loop (and so the whole UI) blocks until the
           sequence is complete; a mismatch mid-sequence aborts the snap and
           keeps the previous background. */
        if drawer.b_pressed_once() {
            let mut captures = Vec::with_capacity(BG_AVERAGE_COUNT);
            captures.push(live.clone());
            while captures.len() < BG_AVERAGE_COUNT {
                captures.push(cam.next_frame()?);
            }
            match average_background(&captures) {
                Ok(bg) => {
                    println!("Background set (average of {} frames)", captures.len());
                    processor.set_background(Some(bg));
                }
                Err(e) => eprintln!("Background snap failed: {e}"),
            }
        }

        /* 4) Run the processor (or pass the raw frame through when off). */
        let shown = if enabled { processor.process(live) } else { live };

        /* 5) Expand grayscale to the window's RGB buffer and draw the HUD. */
        expand_gray(&shown, &mut screen);

        let mode = if enabled { "SUB ON " } else { "SUB OFF" };
        let hud = format!(
            "{} | OFFSET: {:.1}% | {} | {}",
            mode,
            processor.offset_percent(),
            hud_fps_text,
            processor.last_status(),
        );
        draw_text_5x7(&mut screen, w, h, 8, 8, &hud, 0x00FFFFFF);

        /* 6) Present to the window. */
        drawer.present(&screen, w, h)?;

        /* 7) FPS counter (updates the HUD once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
