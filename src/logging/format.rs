//! Per-sink choice of rendered fields

use super::message::Message;

/// Which fields a sink renders
///
/// Fields always appear in the order timestamp, level, text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    show_timestamp: bool,
    show_level: bool,
    show_message: bool,
}

impl Format {
    pub fn new(show_timestamp: bool, show_level: bool, show_message: bool) -> Self {
        Self {
            show_timestamp,
            show_level,
            show_message,
        }
    }

    /// Show every field
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn with_timestamp(self, show: bool) -> Self {
        Self {
            show_timestamp: show,
            ..self
        }
    }

    pub fn with_level(self, show: bool) -> Self {
        Self {
            show_level: show,
            ..self
        }
    }

    pub fn with_message(self, show: bool) -> Self {
        Self {
            show_message: show,
            ..self
        }
    }

    pub fn shows_timestamp(&self) -> bool {
        self.show_timestamp
    }

    pub fn shows_level(&self) -> bool {
        self.show_level
    }

    pub fn shows_message(&self) -> bool {
        self.show_message
    }

    /// Render the enabled fields separated by single spaces
    ///
    /// Returns an empty string when every flag is off. Callers treat a blank
    /// result as "write nothing".
    pub fn render(&self, message: &Message) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if self.show_timestamp {
            parts.push(message.timestamp());
        }
        if self.show_level {
            parts.push(message.level().as_str());
        }
        if self.show_message {
            parts.push(message.text());
        }
        parts.join(" ")
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Level;

    fn sample() -> Message {
        Message::new(1, Level::Warning, "low disk", Vec::new())
    }

    #[test]
    fn test_render_all_fields() {
        let message = sample();
        assert_eq!(
            Format::all().render(&message),
            format!("{} WARNING low disk", message.timestamp())
        );
    }

    #[test]
    fn test_render_subset_has_no_stray_separators() {
        let message = sample();
        assert_eq!(
            Format::new(false, true, true).render(&message),
            "WARNING low disk"
        );
        assert_eq!(Format::new(false, false, true).render(&message), "low disk");
        assert_eq!(
            Format::new(true, false, false).render(&message),
            message.timestamp()
        );
    }

    #[test]
    fn test_render_nothing_is_empty() {
        assert_eq!(Format::new(false, false, false).render(&sample()), "");
    }

    #[test]
    fn test_setters_touch_one_field() {
        let format = Format::all().with_level(false);
        assert!(format.shows_timestamp());
        assert!(!format.shows_level());
        assert!(format.shows_message());

        let format = format.with_timestamp(false).with_message(false);
        assert_eq!(format, Format::new(false, false, false));
    }
}
