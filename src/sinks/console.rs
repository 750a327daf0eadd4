//! Console sink implementation

use crate::core::Sink;
use colored::{Color, Colorize};

/// Echoes every written record to the terminal
///
/// Records tagged `E` or `*` (error, warning, fatal) go to stderr, the rest to
/// stdout. The severity letter is coloured unless colours are disabled.
///
/// # Example
///
/// ```no_run
/// use rust_stream_logger::prelude::*;
///
/// let logger = Logger::builder().sink(ConsoleSink::new()).build();
/// logger.info("visible on stdout and in the log file");
/// ```
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render one console line from the record prefix and body.
    fn format_line(&self, prefix: &str, body: &str) -> String {
        if !self.use_colors {
            return format!("{}{}", prefix, body);
        }

        let mut chars = prefix.chars();
        match chars.next() {
            Some(letter) => format!(
                "{}{}{}",
                letter.to_string().color(letter_color(letter)).bold(),
                chars.as_str(),
                body
            ),
            None => body.to_string(),
        }
    }
}

fn letter_color(letter: char) -> Color {
    match letter {
        'T' => Color::BrightBlack,
        'D' => Color::Blue,
        'I' => Color::Green,
        'E' => Color::Red,
        _ => Color::Yellow,
    }
}

fn is_alert(prefix: &str) -> bool {
    matches!(prefix.chars().next(), Some('E') | Some('*'))
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn on_record(&self, prefix: &str, body: &str) {
        let line = self.format_line(prefix, body);
        if is_alert(prefix) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
