// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or parsed from CSS hex notation (#rgb, #rrggbb, #rrggbbaa)

use crate::error::PageError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Red the site ships with
    pub const SITE_RED: Color = Color {
        r: 0xd8,
        g: 0x00,
        b: 0x00,
        a: 0xff,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn parse_hex(text: &str) -> Result<Color, PageError> {
        let invalid = || PageError::InvalidColor(text.to_owned());
        let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            // #rgb, each nibble doubled
            3 => {
                let expand = |nibble: u32| ((nibble & 0xf) * 0x11) as u8;
                Ok(Color {
                    r: expand(value >> 8),
                    g: expand(value >> 4),
                    b: expand(value),
                    a: 0xff,
                })
            }
            6 => Ok(Color::from_u32((value << 8) | 0xff)),
            8 => Ok(Color::from_u32(value)),
            _ => Err(invalid()),
        }
    }

    // Canvas fill style, alpha is applied separately through globalAlpha
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::SITE_RED
    }
}
