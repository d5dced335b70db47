//! Deterministic color selection from a type's display name

use crate::colors::{hsv_to_rgb, Rgb};
use crate::rng::Xorshift128;

/// Produces the color assigned to a type the first time it logs
pub trait ColorGenerator {
    fn generate(&self, type_name: &str) -> String;
}

/// Hash the name, seed the generator, draw hue and saturation at full value
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedHue;

impl ColorGenerator for HashedHue {
    fn generate(&self, type_name: &str) -> String {
        generate_hex_color(type_name)
    }
}

impl<F> ColorGenerator for F
where
    F: Fn(&str) -> String,
{
    fn generate(&self, type_name: &str) -> String {
        self(type_name)
    }
}

/// Sum of the UTF-16 code units of `name`. Anagrams collide, which is fine
/// for picking display colors.
pub fn name_seed(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |seed, unit| seed.wrapping_add(i32::from(unit)))
}

pub fn generate_rgb(type_name: &str) -> Rgb {
    let mut rng = Xorshift128::init_state(name_seed(type_name));
    let hue = f64::from(rng.range(0.0, 360.0));
    let saturation = f64::from(rng.range(0.0, 1.0));
    // full value keeps every color readable on a dark console
    hsv_to_rgb(hue, saturation, 1.0)
}

/// `RRGGBB` color for a type name; a pure function of the name
pub fn generate_hex_color(type_name: &str) -> String {
    let color = generate_rgb(type_name);
    tracing::debug!(type_name, color = %color, "generated type color");
    color.to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_seed_sums_code_units() {
        assert_eq!(name_seed("Foo"), 70 + 111 + 111);
        assert_eq!(name_seed("Foo"), 292);
        assert_eq!(name_seed(""), 0);
    }

    #[test]
    fn test_name_seed_uses_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D + 0xDE00
        assert_eq!(name_seed("\u{1F600}"), 0xD83D + 0xDE00);
        assert_eq!(name_seed("é"), 0xE9);
    }

    #[test]
    fn test_anagrams_share_a_color() {
        assert_eq!(name_seed("Foo"), name_seed("oFo"));
        assert_eq!(generate_hex_color("Foo"), generate_hex_color("oFo"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_hex_color("Foo");
        let second = generate_hex_color("Foo");
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert!(first.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_lowercase()));
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(generate_hex_color("Foo"), "FFF025");
        assert_eq!(generate_hex_color("Bar"), "FFC0E4");
        assert_eq!(generate_hex_color("PlayerController"), "FFDC6A");
    }

    #[test]
    fn test_full_value_means_one_channel_saturated() {
        for name in ["Foo", "PlayerController", "EnemySpawner", "UIManager", "A"] {
            let rgb = generate_rgb(name);
            let max = rgb.red.max(rgb.green).max(rgb.blue);
            assert!(max >= 254, "{} -> {} has no bright channel", name, rgb);
        }
    }

    #[test]
    fn test_closure_generator() {
        let fixed = |_: &str| "010203".to_string();
        assert_eq!(fixed.generate("Anything"), "010203");
        assert_eq!(HashedHue.generate("Foo"), generate_hex_color("Foo"));
    }
}
