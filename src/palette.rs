use serde::{Serialize, Serializer};

/// Named chart colors. Serialized as their hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Red,
    Orange,
    Green,
    Purple,
    Cyan,
    Indigo,
    Mint,
    Teal,
    Pink,
    Yellow,
    Gray,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Indigo => "indigo",
            Self::Mint => "mint",
            Self::Teal => "teal",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#007aff",
            Self::Red => "#ff3b30",
            Self::Orange => "#ff9500",
            Self::Green => "#34c759",
            Self::Purple => "#af52de",
            Self::Cyan => "#32ade6",
            Self::Indigo => "#5856d6",
            Self::Mint => "#00c7be",
            Self::Teal => "#30b0c7",
            Self::Pink => "#ff2d55",
            Self::Yellow => "#ffcc00",
            Self::Gray => "#6b7280",
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

pub const AGENCY: &[Color] = &[
    Color::Blue,
    Color::Red,
    Color::Orange,
    Color::Green,
    Color::Purple,
    Color::Cyan,
    Color::Indigo,
    Color::Mint,
];

pub const PSC: &[Color] = &[
    Color::Cyan,
    Color::Indigo,
    Color::Purple,
    Color::Teal,
    Color::Pink,
    Color::Orange,
    Color::Green,
    Color::Red,
];

pub const RECIPIENT: &[Color] = &[
    Color::Green,
    Color::Mint,
    Color::Yellow,
    Color::Pink,
    Color::Blue,
    Color::Red,
    Color::Orange,
    Color::Purple,
];

pub const COVID_RECIPIENT: &[Color] = &[
    Color::Pink,
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Mint,
    Color::Teal,
    Color::Blue,
    Color::Indigo,
    Color::Purple,
    Color::Cyan,
];

/// Palette slot for the entry at `position` in a sorted list, if it gets one.
///
/// Only the first `min(top_n, palette.len())` positions are colored.
pub fn slot(palette: &[Color], position: usize, top_n: usize) -> Option<(usize, Color)> {
    if position < top_n.min(palette.len()) {
        Some((position, palette[position]))
    } else {
        None
    }
}
