//! Terminal progress rendering for a running session.
//!
//! One carriage-return line per tick: phase label, remaining time, a block
//! bar that fills as the phase elapses, and the percent elapsed.

const BAR_WIDTH: usize = 20;

/// Format seconds as mm:ss.
pub fn mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// A `BAR_WIDTH`-cell bar filled in proportion to `progress` (0.0..=1.0).
pub fn bar(progress: f64) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// The per-tick progress line for the active phase.
pub fn progress_line(label: &str, remaining_secs: u64, progress: f64) -> String {
    let pct = (progress.clamp(0.0, 1.0) * 100.0).round() as u8;
    format!(
        "{label:>7} {} remaining [{}] {pct:3}%",
        mmss(remaining_secs),
        bar(progress)
    )
}
