//! Single color elements of an SGR sequence.
//!
//! In `"\x1b[0;31;45m"` the parameters `31` and `45` each come from one
//! element. Every element can be present-but-empty (for example a 16-color
//! element without a code); such an element is not [valid](ColorElement::is_valid)
//! and contributes nothing to the sequence.

use crate::color::{Color16, ColorLayer, Rgb};
use crate::escape::{COLOR_256_TYPE_CODE, COLOR_RGB_TYPE_CODE, join_params};

/// A foreground or background color element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorElement {
    /// A 16-color code. The code carries its own layer.
    Code16(Option<Color16>),
    /// An 8-bit (0-255) palette index.
    Code256 { code: Option<u8>, layer: ColorLayer },
    /// A 24-bit color.
    Rgb { color: Rgb, layer: ColorLayer },
}

impl ColorElement {
    pub fn code16(code: Color16) -> Self {
        ColorElement::Code16(Some(code))
    }

    pub fn code256(code: u8, layer: ColorLayer) -> Self {
        ColorElement::Code256 {
            code: Some(code),
            layer,
        }
    }

    pub fn rgb(color: impl Into<Rgb>, layer: ColorLayer) -> Self {
        ColorElement::Rgb {
            color: color.into(),
            layer,
        }
    }

    /// Returns true if the element carries color data.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorElement::Code16(code) => code.is_some(),
            ColorElement::Code256 { code, .. } => code.is_some(),
            ColorElement::Rgb { color, .. } => !color.are_all_channels_none(),
        }
    }

    /// The `;`-joined parameters of this element, or `None` if it is not valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ansi::{ColorElement, ColorLayer};
    ///
    /// let element = ColorElement::code256(116, ColorLayer::Background);
    /// assert_eq!(element.params().as_deref(), Some("48;5;116"));
    ///
    /// let element = ColorElement::rgb((255, 0, 10), ColorLayer::Foreground);
    /// assert_eq!(element.params().as_deref(), Some("38;2;255;0;10"));
    /// ```
    pub fn params(&self) -> Option<String> {
        match self {
            ColorElement::Code16(code) => code.map(|code| code.code().to_string()),
            ColorElement::Code256 { code, layer } => {
                let code = (*code)?.to_string();
                let layer = layer.code().to_string();
                Some(join_params([
                    Some(layer.as_str()),
                    Some(COLOR_256_TYPE_CODE),
                    Some(code.as_str()),
                ]))
            }
            ColorElement::Rgb { color, layer } => {
                let (red, green, blue) = color.padded()?;
                let channels = [layer.code(), red, green, blue].map(|value| value.to_string());
                Some(join_params([
                    Some(channels[0].as_str()),
                    Some(COLOR_RGB_TYPE_CODE),
                    Some(channels[1].as_str()),
                    Some(channels[2].as_str()),
                    Some(channels[3].as_str()),
                ]))
            }
        }
    }
}

impl From<Color16> for ColorElement {
    fn from(code: Color16) -> Self {
        ColorElement::code16(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code16_params() {
        assert_eq!(
            ColorElement::code16(Color16::BgBrightBlue).params().as_deref(),
            Some("104")
        );
        assert_eq!(ColorElement::Code16(None).params(), None);
    }

    #[test]
    fn partial_rgb_is_padded() {
        let element = ColorElement::rgb(
            Rgb::from_channels(None, Some(128), None),
            ColorLayer::Background,
        );
        assert_eq!(element.params().as_deref(), Some("48;2;0;128;0"));
    }

    #[test]
    fn empty_rgb_is_invalid() {
        let element = ColorElement::rgb(Rgb::default(), ColorLayer::Foreground);
        assert!(!element.is_valid());
        assert_eq!(element.params(), None);
    }

    #[test]
    fn validity() {
        assert!(ColorElement::code256(0, ColorLayer::Foreground).is_valid());
        assert!(
            !ColorElement::Code256 {
                code: None,
                layer: ColorLayer::Foreground
            }
            .is_valid()
        );
    }
}
