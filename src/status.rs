use std::fmt::Display;
use std::sync::mpsc::Sender;

use crate::image::PixelSample;

pub const HOVER_PROMPT: &str = "Hover over the image to see pixel values.";
pub const LOAD_FAILED_PLACEHOLDER: &str = "Failed to load image.";

/// What the status bar shows after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Sample(PixelSample),
    /// Nothing under the pointer. Shown initially, on leave and in the letterbox margin.
    Prompt,
    LoadFailed(String),
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sample(sample) => write!(f, "{}", sample),
            Self::Prompt => write!(f, "{}", HOVER_PROMPT),
            Self::LoadFailed(_) => write!(f, "{}", LOAD_FAILED_PLACEHOLDER),
        }
    }
}

pub trait StatusSink {
    fn show(&mut self, message: StatusMessage);
}

impl StatusSink for Vec<StatusMessage> {
    fn show(&mut self, message: StatusMessage) {
        self.push(message);
    }
}

impl StatusSink for Sender<StatusMessage> {
    fn show(&mut self, message: StatusMessage) {
        if self.send(message).is_err() {
            log::warn!("status receiver is gone, message dropped");
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::mpsc;

    use super::{StatusMessage, StatusSink};
    use crate::color::Rgba;
    use crate::geometry::PixelCoordinate;
    use crate::image::PixelSample;

    #[test]
    fn format_messages() {
        let sample = StatusMessage::Sample(PixelSample {
            coordinate: PixelCoordinate::new(3, 4),
            color: Rgba::new(1, 2, 3, 4),
        });
        assert_eq!(sample.to_string(), "Pos: (3, 4) | RGB: (1, 2, 3)");
        assert_eq!(
            StatusMessage::Prompt.to_string(),
            "Hover over the image to see pixel values."
        );
        assert_eq!(
            StatusMessage::LoadFailed(String::from("broken.png")).to_string(),
            "Failed to load image."
        );
    }

    #[test]
    fn channel_sink_forwards_messages() {
        let (mut sender, receiver) = mpsc::channel::<StatusMessage>();
        sender.show(StatusMessage::Prompt);
        assert_eq!(receiver.try_recv(), Ok(StatusMessage::Prompt));
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (mut sender, receiver) = mpsc::channel::<StatusMessage>();
        drop(receiver);
        sender.show(StatusMessage::Prompt);
    }
}
