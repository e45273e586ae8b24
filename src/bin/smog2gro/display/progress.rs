use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Step narration on stderr. A spinner runs while a step is in flight and is
/// replaced by a `✓` line plus sub-steps once it completes. A disabled
/// `Progress` prints nothing.
pub struct Progress {
    live: Option<Narration>,
}

struct Narration {
    spinner: Option<ProgressBar>,
    run_start: Instant,
    current: String,
    step_start: Instant,
    index: u8,
    total: u8,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            live: interactive.then(|| Narration {
                spinner: None,
                run_start: now,
                current: String::new(),
                step_start: now,
                index: 0,
                total: total_steps,
            }),
        }
    }

    pub fn step(&mut self, description: &str) {
        let Some(n) = self.live.as_mut() else {
            return;
        };
        n.clear_spinner();

        n.index += 1;
        n.current = description.to_string();
        n.step_start = Instant::now();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style.tick_chars(TICKS));
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(format!("[{}/{}] {}...", n.index, n.total, description));
        n.spinner = Some(spinner);
    }

    /// Closes the step opened by the last [`Progress::step`].
    pub fn complete_step(&mut self, substeps: &[String]) {
        let Some(n) = self.live.as_mut() else {
            return;
        };
        n.clear_spinner();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            n.current,
            n.step_start.elapsed().as_secs_f64()
        );
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {substep}");
        }
    }

    pub fn finish(self, files_written: usize) {
        let Some(mut n) = self.live else {
            return;
        };
        n.clear_spinner();

        let total = format!("Total: {:.2}s", n.run_start.elapsed().as_secs_f64());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "  \x1b[2m╺{}╸\x1b[0m", "━".repeat(54));
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<36} {:>14}",
            format!("Conversion complete, {files_written} files written"),
            total
        );
        let _ = writeln!(stderr);
    }
}

impl Narration {
    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_progress_accepts_every_call() {
        let mut progress = Progress::new(false, 2);
        progress.step("Reading listings");
        progress.complete_step(&["fibril_atoms.top: 5 atoms".to_string()]);
        assert!(progress.live.is_none());
        progress.finish(0);
    }
}
