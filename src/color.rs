use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// `#rrggbb` form used in JSON figures.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

// ---------------------------------------------------------------------------
// Color mapping: type → Color32
// ---------------------------------------------------------------------------

/// Maps every offered type to a distinct colour, so a type keeps its colour
/// whatever the current filter leaves on screen.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Assign palette colours to `types` in the order given.
    pub fn new<S: AsRef<str>>(types: &[S]) -> Self {
        let palette = generate_palette(types.len());
        let mapping = types
            .iter()
            .zip(palette)
            .map(|(t, c)| (t.as_ref().to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Colour for `kind`; types outside the map fall back to grey.
    pub fn color_for(&self, kind: &str) -> Color32 {
        self.mapping.get(kind).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let p = generate_palette(7);
        assert_eq!(p.len(), 7);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_type_is_grey() {
        let cm = ColorMap::new(&["city", "state"][..]);
        assert_ne!(cm.color_for("city"), cm.color_for("state"));
        assert_eq!(cm.color_for("moon"), Color32::GRAY);
    }

    #[test]
    fn hex_format() {
        assert_eq!(to_hex(Color32::from_rgb(255, 0, 16)), "#ff0010");
    }
}
