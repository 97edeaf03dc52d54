//! Primitive color values: 16-color codes, layers, text modes and RGB.

/// All the 16 color codes, in both foreground and background flavors.
///
/// The discriminant is the SGR parameter emitted for the code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color16 {
    Reset = 0,

    FgBlack = 30,
    FgRed = 31,
    FgGreen = 32,
    FgYellow = 33,
    FgBlue = 34,
    FgMagenta = 35,
    FgCyan = 36,
    FgWhite = 37,
    FgDefault = 39,

    BgBlack = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgWhite = 47,
    BgDefault = 49,

    FgBrightBlack = 90,
    FgBrightRed = 91,
    FgBrightGreen = 92,
    FgBrightYellow = 93,
    FgBrightBlue = 94,
    FgBrightMagenta = 95,
    FgBrightCyan = 96,
    FgBrightWhite = 97,

    BgBrightBlack = 100,
    BgBrightRed = 101,
    BgBrightGreen = 102,
    BgBrightYellow = 103,
    BgBrightBlue = 104,
    BgBrightMagenta = 105,
    BgBrightCyan = 106,
    BgBrightWhite = 107,
}

impl Color16 {
    /// The SGR parameter for this code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The layer a color applies to.
///
/// The discriminant is the SGR parameter that introduces an extended
/// (8-bit or RGB) color on that layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorLayer {
    #[default]
    Foreground = 38,
    Background = 48,
}

impl ColorLayer {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The prefix used by the color name table (`"fg"` or `"bg"`).
    pub fn prefix(self) -> &'static str {
        match self {
            ColorLayer::Foreground => "fg",
            ColorLayer::Background => "bg",
        }
    }
}

/// Text rendering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TextMode {
    Normal = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blinking = 5,
    Inverse = 7,
    Hidden = 8,
    Strike = 9,
}

impl TextMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// An RGB triple whose channels may individually be unset.
///
/// A color with every channel unset means "no color". When at least one
/// channel is set, the unset ones render as `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
}

impl Rgb {
    /// Create a color with every channel set.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
        }
    }

    /// Create a color from optional channels.
    pub fn from_channels(red: Option<u8>, green: Option<u8>, blue: Option<u8>) -> Self {
        Self { red, green, blue }
    }

    /// Create a color with the same value on every channel.
    pub fn uniform(value: Option<u8>) -> Self {
        Self::from_channels(value, value, value)
    }

    pub fn are_all_channels_none(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }

    /// Set every unset channel to `value`.
    pub fn fill_none_channels(&mut self, value: u8) {
        self.red.get_or_insert(value);
        self.green.get_or_insert(value);
        self.blue.get_or_insert(value);
    }

    /// The channels as a triple, with unset channels padded to `0`.
    ///
    /// Returns `None` when every channel is unset.
    pub fn padded(&self) -> Option<(u8, u8, u8)> {
        if self.are_all_channels_none() {
            return None;
        }

        let mut filled = *self;
        filled.fill_none_channels(0);

        Some((
            filled.red.unwrap_or_default(),
            filled.green.unwrap_or_default(),
            filled.blue.unwrap_or_default(),
        ))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_sgr_parameters() {
        assert_eq!(Color16::FgRed.code(), 31);
        assert_eq!(Color16::BgBrightWhite.code(), 107);
        assert_eq!(Color16::Reset.code(), 0);
        assert_eq!(TextMode::Inverse.code(), 7);
        assert_eq!(ColorLayer::Background.code(), 48);
    }

    #[test]
    fn padded_rgb() {
        assert_eq!(Rgb::default().padded(), None);
        assert_eq!(
            Rgb::from_channels(Some(10), None, None).padded(),
            Some((10, 0, 0))
        );
        assert_eq!(Rgb::new(1, 2, 3).padded(), Some((1, 2, 3)));
    }

    #[test]
    fn fill_leaves_set_channels() {
        let mut rgb = Rgb::from_channels(None, Some(7), None);
        rgb.fill_none_channels(255);
        assert_eq!(rgb, Rgb::new(255, 7, 255));
    }

    #[test]
    fn uniform_channels() {
        assert_eq!(Rgb::uniform(Some(9)), Rgb::new(9, 9, 9));
        assert!(Rgb::uniform(None).are_all_channels_none());
    }
}
