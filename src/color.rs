// Simple color struct, created from an unsigned 32 representing 0x00RRGGBB.
// Opacity is kept separately by whoever uses the color, and only folded in
// when a CSS color string is built for the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const INDIGO: Color = Color::from_u32(0x1E0D73);
    pub const ORANGE: Color = Color::from_u32(0xFF9800);
    pub const SAGE: Color = Color::from_u32(0xB7BDB7);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    /// `#RRGGBB`, upper-case like the palette is written in the page styles.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `#RRGGBBaa`, the hex color followed by the opacity as a two digit
    /// lower-case hex alpha suffix.
    pub fn to_hex_with_opacity(&self, opacity: f64) -> String {
        format!("{}{:02x}", self.to_hex(), alpha_byte(opacity))
    }

    /// `rgba(r, g, b, a)` with the alpha written as a plain decimal.
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

// Opacity in [0, 1] mapped to a rounded alpha byte. Out of range values clamp.
pub fn alpha_byte(opacity: f64) -> u8 {
    (opacity.max(0.0).min(1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_hex() {
        assert_eq!(Color::INDIGO.to_hex(), "#1E0D73");
        assert_eq!(Color::ORANGE.to_hex(), "#FF9800");
        assert_eq!(Color::SAGE.to_hex(), "#B7BDB7");
    }

    #[test]
    fn opacity_suffix_is_rounded_and_padded() {
        // 0.1 * 255 = 25.5 rounds up to 26 (0x1a)
        assert_eq!(Color::INDIGO.to_hex_with_opacity(0.1), "#1E0D731a");
        // 0.02 * 255 = 5.1 -> 0x05, needs the leading zero
        assert_eq!(Color::ORANGE.to_hex_with_opacity(0.02), "#FF980005");
        assert_eq!(Color::SAGE.to_hex_with_opacity(0.6), "#B7BDB799");
    }

    #[test]
    fn alpha_byte_clamps() {
        assert_eq!(alpha_byte(-1.0), 0);
        assert_eq!(alpha_byte(2.0), 255);
        assert_eq!(alpha_byte(0.5), 128);
    }

    #[test]
    fn rgba_string() {
        let line = Color::from_u32(0xB7BDB7);
        assert_eq!(line.to_rgba(0.05), "rgba(183, 189, 183, 0.05)");
    }
}
