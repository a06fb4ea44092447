//! Startup banner helpers: 80-column bars and centered stage lines with
//! per-stage timing, printed through tracing so the output mode decides
//! what survives.

use std::time::Instant;
use tracing::info;

const WIDTH: usize = 80;

pub fn bar() -> String {
    "=".repeat(WIDTH)
}

/// Centers a line on an 80-character terminal. Longer lines are returned
/// unpadded rather than cut off.
pub fn centered(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return text.to_string();
    }
    let padding = (WIDTH - len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// One timed startup stage: prints the heading up front and the elapsed
/// time when dropped via `finish`.
pub struct Stage {
    title: &'static str,
    started: Instant,
}

impl Stage {
    pub fn begin(title: &'static str) -> Self {
        info!("{}", bar());
        info!("{}", centered(title));
        Self {
            title,
            started: Instant::now(),
        }
    }

    pub fn finish(self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        info!(
            "{}",
            centered(&format!("{} Complete : {:.9} seconds", self.title, elapsed))
        );
        info!("{}", bar());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_eighty_columns() {
        assert_eq!(bar().len(), 80);
    }

    #[test]
    fn short_lines_are_centered() {
        let line = centered("Starting Up");
        assert_eq!(line.trim_start(), "Starting Up");
        assert_eq!(line.chars().count(), (80 - 11) / 2 + 11);
    }

    #[test]
    fn long_lines_pass_through() {
        let long = "x".repeat(100);
        assert_eq!(centered(&long), long);
    }
}
