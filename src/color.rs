use std::fmt::Display;

use clap::builder::PossibleValue;
use clap::ValueEnum;

const OPAQUE: u8 = u8::MAX;

/// A single 8 bit per component pixel, straight alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// A fully opaque gray where every color component carries `intensity`.
    pub const fn opaque_gray(intensity: u8) -> Self {
        Rgba::new(intensity, intensity, intensity, OPAQUE)
    }

    pub fn component(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Projects one color channel onto an opaque gray, discarding alpha.
    pub fn grayscale(&self, channel: Channel) -> Self {
        Rgba::opaque_gray(self.component(channel))
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Rgba::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        [value.red, value.green, value.blue, value.alpha]
    }
}

impl From<&::image::Rgba<u8>> for Rgba {
    fn from(value: &::image::Rgba<u8>) -> Self {
        Rgba::from(value.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ValueEnum for Channel {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}
