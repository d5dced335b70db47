//! RGB colors, HSV conversion and the ANSI escapes used to render them

use std::fmt;

pub const RESET: &str = "\x1b[0m";

/// An 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Six uppercase hex digits, `RRGGBB`
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parse `RRGGBB` (case-insensitive, optional leading `#`).
    /// Returns None for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// 24-bit foreground escape sequence
    pub fn ansi_foreground(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Scale a unit channel to 0..=255. Truncates toward zero, then clamps.
pub fn clamp_channel(unit: f64) -> u8 {
    // `as i32` saturates and maps NaN to 0
    let scaled = (unit * 255.0) as i32;
    scaled.clamp(0, 255) as u8
}

/// Convert hue (degrees), saturation and value (both 0..=1) to RGB.
///
/// Any finite hue is accepted and wrapped into `[0, 360)`, so -30, 330 and
/// 690 all land in the same sector. A non-finite hue is treated as 0.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    if value <= 0.0 {
        return Rgb::BLACK;
    }

    if saturation <= 0.0 {
        let gray = clamp_channel(value);
        return Rgb::new(gray, gray, gray);
    }

    let hue = if hue.is_finite() { hue.rem_euclid(360.0) } else { 0.0 };
    let sector_position = hue / 60.0;
    let sector_floor = sector_position.floor();
    let f = sector_position - sector_floor;

    let v = value;
    let p = v * (1.0 - saturation);
    let q = v * (1.0 - saturation * f);
    let t = v * (1.0 - saturation * (1.0 - f));

    // rem_euclid may round up to exactly 360.0, which is sector 6 == sector 0
    let (r, g, b) = match (sector_floor as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
}
