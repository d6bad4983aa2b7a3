//! Progress indicator for the simulated analysis pause.
//!
//! Interactive terminals get an animated line that is cleared on completion;
//! piped output gets a single static line so logs stay readable.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

fn render(frame: &str, message: &str) {
    print!(
        "\r{} {} {}",
        "[medimate]".bright_cyan(),
        frame.bright_yellow(),
        message.dimmed()
    );
    let _ = io::stdout().flush();
}

/// Animated progress line while an engine "works".
pub struct Spinner {
    active: Option<(Arc<AtomicBool>, std::thread::JoinHandle<()>)>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        if !io::stdout().is_terminal() {
            println!("[medimate] ... {}", message);
            return Self { active: None };
        }

        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let message = message.to_string();

        render(FRAMES[0], &message);
        let handle = std::thread::spawn(move || {
            for frame in FRAMES.iter().cycle().skip(1) {
                std::thread::sleep(FRAME_INTERVAL);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                render(frame, &message);
            }
        });

        Self {
            active: Some((stop, handle)),
        }
    }

    /// Stop the animation and clear its line.
    pub fn stop(mut self) {
        if let Some((stop, handle)) = self.active.take() {
            stop.store(true, Ordering::Relaxed);
            let _ = handle.join();
            print!("\r{}\r", " ".repeat(80));
            let _ = io::stdout().flush();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some((stop, _)) = &self.active {
            stop.store(true, Ordering::Relaxed);
        }
    }
}

/// Show the spinner for the canned analysis pause. `--no-wait` skips the
/// sleep but keeps the message so output stays recognizable in scripts.
pub async fn think(message: &str, secs: u64, no_wait: bool) {
    let spinner = Spinner::start(message);
    if !no_wait {
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }
    spinner.stop();
}
