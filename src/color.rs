use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Gender;

// ---------------------------------------------------------------------------
// Display colors
// ---------------------------------------------------------------------------

/// Convert an HSL triple to an egui color.
fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Marker color for a gender. Each record's color is derived from this once
/// at load time and never recomputed.
pub fn gender_color(gender: Gender) -> Color32 {
    match gender {
        Gender::Male => hsl_color(215.0, 0.70, 0.55),
        Gender::Female => hsl_color(330.0, 0.65, 0.65),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_colors_are_distinct_and_opaque() {
        let male = gender_color(Gender::Male);
        let female = gender_color(Gender::Female);
        assert_ne!(male, female);
        assert_eq!(male.a(), 255);
        assert_eq!(female.a(), 255);
    }

    #[test]
    fn hsl_conversion_hits_the_expected_hue_family() {
        // Hue 215° leans blue, hue 330° leans red/pink.
        let male = gender_color(Gender::Male);
        assert!(male.b() > male.r());
        let female = gender_color(Gender::Female);
        assert!(female.r() > female.g());
    }
}
