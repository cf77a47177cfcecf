use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// City colours
// ---------------------------------------------------------------------------

/// Assigns each city of the working set a fixed colour, so a city looks the
/// same in every chart regardless of the active cost range.
#[derive(Debug, Clone, Default)]
pub struct CityColors {
    mapping: BTreeMap<String, Color32>,
}

impl CityColors {
    /// Hues are spread evenly around the wheel in the order the cities are
    /// given.
    pub fn new<'a>(cities: impl IntoIterator<Item = &'a str>) -> Self {
        let cities: Vec<&str> = cities.into_iter().collect();
        let step = 360.0 / cities.len().max(1) as f32;
        let mapping = cities
            .into_iter()
            .enumerate()
            .map(|(i, city)| (city.to_string(), hue_color(i as f32 * step)))
            .collect();
        CityColors { mapping }
    }

    pub fn color_for(&self, city: &str) -> Color32 {
        self.mapping.get(city).copied().unwrap_or(Color32::GRAY)
    }
}

fn hue_color(hue: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, 0.65, 0.55).into_color();
    let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c * 255.0) as u8);
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cities::GERMAN_CITIES;

    #[test]
    fn test_every_city_gets_a_distinct_color() {
        let colors = CityColors::new(GERMAN_CITIES);
        let all: Vec<Color32> = GERMAN_CITIES.iter().map(|c| colors.color_for(c)).collect();
        for (i, a) in all.iter().enumerate() {
            assert_ne!(*a, Color32::GRAY);
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_city_colors_stable_and_unknown_is_gray() {
        let colors = CityColors::new(["Berlin", "Munich"]);
        assert_eq!(colors.color_for("Berlin"), hue_color(0.0));
        assert_eq!(colors.color_for("Munich"), hue_color(180.0));
        assert_eq!(colors.color_for("Vienna"), Color32::GRAY);
    }
}
