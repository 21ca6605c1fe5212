//! Input model for the viewer: keys and background click targets.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn command(&self) -> Option<KeyCommand> {
        match self.0.as_str() {
            "Escape" => Some(KeyCommand::Close),
            "ArrowLeft" => Some(KeyCommand::Prev),
            "ArrowRight" => Some(KeyCommand::Next),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Viewer command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Prev,
    Next,
}

/// Where a click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop itself.
    Overlay,
    /// The content area around the media, not the media element.
    Content,
    /// Media, controls, or anything else inside the overlay.
    Inner,
}

impl ClickTarget {
    /// Whether a click here dismisses the viewer.
    #[must_use]
    pub fn dismisses(self) -> bool {
        matches!(self, Self::Overlay | Self::Content)
    }
}
