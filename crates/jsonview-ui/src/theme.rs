/// Fallback flash color used when the theme does not provide one.
pub const DEFAULT_UPDATE_COLOR: Color = Color::rgb(0xEB, 0xCB, 0x8B);

/// Host-agnostic RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        let byte = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        match hex.len() {
            6 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 0xFF,
            }),
            8 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }

    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        let a = (f32::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

/// The single theme token this widget consumes: the update flash color.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub update_color: Option<Color>,
}

impl Theme {
    pub fn flash_color(&self) -> Color {
        self.update_color.unwrap_or(DEFAULT_UPDATE_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#ebcb8b"), Some(DEFAULT_UPDATE_COLOR));
        assert_eq!(
            Color::parse_hex("#10203040"),
            Some(Color {
                r: 0x10,
                g: 0x20,
                b: 0x30,
                a: 0x40
            })
        );
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(Color::parse_hex("ebcb8b"), None);
        assert_eq!(Color::parse_hex("#ebc"), None);
        assert_eq!(Color::parse_hex("#zzzzzz"), None);
        assert_eq!(Color::parse_hex("#"), None);
    }

    #[test]
    fn test_theme_fallback() {
        assert_eq!(Theme::default().flash_color(), DEFAULT_UPDATE_COLOR);

        let themed = Theme {
            update_color: Color::parse_hex("#ff0000"),
        };
        assert_eq!(themed.flash_color(), Color::rgb(0xFF, 0, 0));
    }

    #[test]
    fn test_alpha_scaling_clamps() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.with_alpha_scaled(0.5).a, 128);
        assert_eq!(c.with_alpha_scaled(2.0).a, 0xFF);
        assert_eq!(c.with_alpha_scaled(-1.0).a, 0);
    }
}
