//! Utility functions for common operations.

use std::io;
use std::process::{Command, Stdio};
use std::thread;

/// Hand a URL to the platform opener. The browser's fate is its own;
/// only the spawn result is reported.
pub fn open_link(url: &str) -> io::Result<()> {
    let program = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    };
    spawn_detached(program, url)
}

fn spawn_detached(program: &str, arg: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .arg(arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // Reap the child off-thread so it does not sit around as a zombie.
    thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

/// Truncate to a maximum character count, marking the cut with an ellipsis.
/// Operates on char boundaries so multi-byte text stays valid.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    let take_chars = max_chars.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}
