//! Phase-transition alert sound.
//!
//! Plays the configured sound file, or the first stock system sound that a
//! platform audio player accepts, falling back to the terminal bell.

use std::io::Write;
use std::process::Command;

#[cfg(target_os = "macos")]
const PLAYERS: &[&str] = &["afplay"];
#[cfg(all(unix, not(target_os = "macos")))]
const PLAYERS: &[&str] = &["paplay", "aplay"];
#[cfg(not(unix))]
const PLAYERS: &[&str] = &[];

#[cfg(target_os = "macos")]
const STOCK_SOUNDS: &[&str] = &[
    "/System/Library/Sounds/Glass.aiff",
    "/System/Library/Sounds/Ping.aiff",
];
#[cfg(all(unix, not(target_os = "macos")))]
const STOCK_SOUNDS: &[&str] = &[
    "/usr/share/sounds/freedesktop/stereo/complete.oga",
    "/usr/share/sounds/alsa/Front_Left.wav",
    "/usr/share/sounds/sound-icons/bell.wav",
];
#[cfg(not(unix))]
const STOCK_SOUNDS: &[&str] = &[];

/// Play the notification sound, preferring `custom_sound` when set.
///
/// Never fails: if no audio player works, rings the terminal bell.
pub fn play(custom_sound: Option<&str>) {
    if let Some(path) = custom_sound {
        if try_play(path) {
            return;
        }
        tracing::warn!(path, "could not play custom sound, trying stock sounds");
    }
    for path in STOCK_SOUNDS {
        if try_play(path) {
            return;
        }
    }
    terminal_bell();
}

fn try_play(path: &str) -> bool {
    for player in PLAYERS {
        let played = Command::new(player)
            .arg(path)
            .spawn()
            .and_then(|mut child| child.wait())
            .map(|status| status.success())
            .unwrap_or(false);
        if played {
            return true;
        }
    }
    false
}

fn terminal_bell() {
    print!("\x07");
    let _ = std::io::stdout().flush();
}
