use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rgb – renderer-neutral colour
// ---------------------------------------------------------------------------

/// 8-bit sRGB colour. Serialised as `#rrggbb` so chart specs can be handed
/// straight to a browser renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const GRAY: Rgb = Rgb([160, 160, 160]);

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        let [r, g, b] = c.0;
        Color32::from_rgb(r, g, b)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb([
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            ])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Rgb
// ---------------------------------------------------------------------------

/// Maps the categories of one column (sites, booster versions) to distinct
/// colours. Categories keep the order they were given in.
#[derive(Debug, Clone)]
pub struct ColorMap {
    order: Vec<String>,
    mapping: BTreeMap<String, Rgb>,
    default_color: Rgb,
}

impl ColorMap {
    /// Build a colour map from the categories in display order.
    pub fn new<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut order: Vec<String> = Vec::new();
        for c in categories {
            if !order.contains(c) {
                order.push(c.clone());
            }
        }
        let palette = generate_palette(order.len());
        let mapping = order.iter().cloned().zip(palette).collect();

        ColorMap {
            order,
            mapping,
            default_color: Rgb::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Rgb {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (label → colour) in display order.
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.order
            .iter()
            .map(|label| (label.clone(), self.color_for(label)))
            .collect()
    }
}
