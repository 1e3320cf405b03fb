use crate::error::ColorParseError;

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Lenient parse for in-source literals: malformed input yields opaque
    /// black rather than failing. Use [`try_from_hex`](Color::try_from_hex)
    /// for input you do not control.
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or(Color::BLACK)
    }

    /// Strict parse of `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
    pub fn try_from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let s = hex.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(ColorParseError::BadDigit(hex.to_string()));
        }
        let byte = |range: &str| {
            u8::from_str_radix(range, 16)
                .map_err(|_| ColorParseError::BadDigit(hex.to_string()))
        };
        match s.len() {
            6 => Ok(Color(byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?, 255)),
            8 => Ok(Color(
                byte(&s[0..2])?,
                byte(&s[2..4])?,
                byte(&s[4..6])?,
                byte(&s[6..8])?,
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
}
