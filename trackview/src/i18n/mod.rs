//! Message catalog for localized display strings.
//!
//! [`Messages`] resolves a message key to a display string, optionally
//! substituting positional `{0}`-style arguments. The built-in catalog is
//! English; callers can override or extend entries for other locales.

use std::collections::HashMap;

/// Localized message lookup.
#[derive(Debug, Clone)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

impl Messages {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create the built-in English catalog.
    pub fn english() -> Self {
        let mut messages = Self::empty();
        messages.insert("track.tooltip.trackpoint", "Trackpoint");
        messages.insert("track.tooltip.time", "Time");
        messages.insert("track.tooltip.distance", "Distance");
        messages.insert("track.tooltip.altitude", "Altitude");
        messages.insert("track.tooltip.heartrate", "Heartrate");
        messages.insert("track.tooltip.speed", "Speed");
        messages.insert("track.tooltip.temperature", "Temperature");
        messages.insert("track.maptooltip.start", "Start");
        messages.insert("track.maptooltip.end", "End");
        messages.insert("track.maptooltip.lap", "Lap {0}");
        messages
    }

    /// Add or replace a catalog entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Resolve a message key.
    ///
    /// Unknown keys resolve to the key itself, so missing catalog entries
    /// are visible in the UI instead of panicking.
    pub fn get(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve a message key and substitute positional arguments.
    ///
    /// `{0}` is replaced by the first argument, `{1}` by the second, and so
    /// on. Placeholders without a matching argument are left in place.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let mut message = self.get(key);
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), arg);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_key() {
        let messages = Messages::english();
        assert_eq!(messages.get("track.tooltip.speed"), "Speed");
    }

    #[test]
    fn test_get_unknown_key_falls_back_to_key() {
        let messages = Messages::english();
        assert_eq!(messages.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_format_positional_args() {
        let messages = Messages::english();
        assert_eq!(messages.format("track.maptooltip.lap", &["3"]), "Lap 3");
    }

    #[test]
    fn test_format_without_args_keeps_placeholder() {
        let messages = Messages::english();
        assert_eq!(messages.format("track.maptooltip.lap", &[]), "Lap {0}");
    }

    #[test]
    fn test_insert_overrides() {
        let mut messages = Messages::english();
        messages.insert("track.maptooltip.start", "Startpunkt");
        assert_eq!(messages.get("track.maptooltip.start"), "Startpunkt");
    }

    #[test]
    fn test_format_multiple_args() {
        let mut messages = Messages::empty();
        messages.insert("range", "{0} of {1}");
        assert_eq!(messages.format("range", &["2", "5"]), "2 of 5");
    }
}
