use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// City colours
// ---------------------------------------------------------------------------

/// Assigns every city in the dataset a fixed colour, so a city keeps its
/// colour in the ranking chart whatever the current filters are.
#[derive(Debug, Clone, Default)]
pub struct CityColors {
    mapping: BTreeMap<String, Color32>,
}

impl CityColors {
    pub const DEFAULT_COLOR: Color32 = Color32::GRAY;

    pub fn new(cities: &BTreeSet<String>) -> Self {
        let mapping = cities
            .iter()
            .cloned()
            .zip(generate_palette(cities.len()))
            .collect();
        CityColors { mapping }
    }

    pub fn color_for(&self, city: &str) -> Color32 {
        self.mapping.get(city).copied().unwrap_or(Self::DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_and_distinct() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        let distinct: BTreeSet<[u8; 4]> = colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_city_colors() {
        let cities: BTreeSet<String> = ["Delhi", "Mumbai"].iter().map(|s| s.to_string()).collect();
        let colors = CityColors::new(&cities);
        assert_ne!(colors.color_for("Delhi"), colors.color_for("Mumbai"));
        assert_eq!(colors.color_for("Goa"), CityColors::DEFAULT_COLOR);
    }
}
