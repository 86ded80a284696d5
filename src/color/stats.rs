//! Descriptive statistics for a single hex color and the per-app main color.

use super::Color;
use crate::error::Result;
use serde::Serialize;

/// Main colors lighter than this are darkened before use as an accent.
pub const MAX_MAIN_LUMINANCE: f64 = 0.5;
/// Luminance a too-light main color is forced to.
pub const MAIN_LUMINANCE_TARGET: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStat {
    /// The color as written in the catalog (not normalized).
    pub hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub value: f64,
    pub luminance: f64,
    pub distance_from_white: i64,
    pub contrast_to_white: i64,
    #[serde(skip)]
    color: Color,
}

impl ColorStat {
    fn new(hex: String, color: Color) -> Self {
        let (hue, saturation, lightness) = color.hsl();
        Self {
            hex,
            hue: round2(hue),
            saturation: round2(saturation),
            lightness: round2(lightness),
            value: round2(color.value()),
            luminance: round2(color.luminance()),
            distance_from_white: Color::white().distance(color).trunc() as i64,
            contrast_to_white: Color::white().contrast(color).trunc() as i64,
            color,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn stats_for(hex: &str) -> Result<ColorStat> {
    let color = Color::parse(hex)?;
    Ok(ColorStat::new(hex.to_string(), color))
}

/// Stats for every icon color, most saturated first. Ties keep catalog order.
pub fn app_colors(icon_colors: &[String]) -> Result<Vec<ColorStat>> {
    let mut colors = icon_colors
        .iter()
        .map(|hex| stats_for(hex))
        .collect::<Result<Vec<_>>>()?;
    colors.sort_by(|a, b| b.saturation.total_cmp(&a.saturation));
    Ok(colors)
}

/// Pick the most saturated color (first wins on ties) and darken it to
/// [`MAIN_LUMINANCE_TARGET`] if it is lighter than [`MAX_MAIN_LUMINANCE`].
///
/// Returns `None` for an empty slice.
pub fn main_color_for(colors: &[ColorStat]) -> Option<ColorStat> {
    let top = colors
        .iter()
        .reduce(|best, c| if c.saturation > best.saturation { c } else { best })?;

    if top.color.luminance() <= MAX_MAIN_LUMINANCE {
        return Some(top.clone());
    }

    let adjusted = top.color.with_luminance(MAIN_LUMINANCE_TARGET).rounded();
    Some(ColorStat::new(adjusted.to_hex(), adjusted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn hexes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stats_for_white() {
        let s = stats_for("#ffffff").unwrap();
        assert_eq!(s.distance_from_white, 0);
        assert_eq!(s.contrast_to_white, 1);
        assert_eq!(s.luminance, 1.0);
        assert_eq!(s.value, 1.0);
        assert_eq!(s.saturation, 0.0);
    }

    #[test]
    fn test_stats_for_black() {
        let s = stats_for("#000").unwrap();
        assert_eq!(s.hex, "#000");
        assert_eq!(s.luminance, 0.0);
        assert_eq!(s.lightness, 0.0);
        // Truncated, so float noise around 100 / 21 may land one below.
        assert!((99..=100).contains(&s.distance_from_white));
        assert!((20..=21).contains(&s.contrast_to_white));
    }

    #[test]
    fn test_stats_rounding() {
        // #336699: hsl(210, 0.5, 0.4), value 0.6
        let s = stats_for("#336699").unwrap();
        assert_eq!(s.hue, 210.0);
        assert_eq!(s.saturation, 0.5);
        assert_eq!(s.lightness, 0.4);
        assert_eq!(s.value, 0.6);
        assert_eq!(s.luminance, 0.13);
    }

    #[test]
    fn test_stats_deterministic() {
        for hex in ["#47848f", "#f0f", "#123456"] {
            assert_eq!(stats_for(hex).unwrap(), stats_for(hex).unwrap());
        }
    }

    #[test]
    fn test_stats_invalid() {
        assert!(stats_for("nope").is_err());
    }

    #[test]
    fn test_stats_rejects_padded_hex() {
        assert_eq!(
            stats_for(" #FFF "),
            Err(CatalogError::InvalidColorFormat(" #FFF ".to_string()))
        );
    }

    #[test]
    fn test_app_colors_sorted_by_saturation_stable() {
        // #808080 and #000 both have zero saturation; catalog order wins.
        let colors = app_colors(&hexes(&["#808080", "#ff0000", "#000", "#336699"])).unwrap();
        let order: Vec<&str> = colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(order, vec!["#ff0000", "#336699", "#808080", "#000"]);
    }

    #[test]
    fn test_main_color_keeps_dark_color() {
        let colors = app_colors(&hexes(&["#000"])).unwrap();
        let main = main_color_for(&colors).unwrap();
        assert_eq!(main.hex, "#000");
    }

    #[test]
    fn test_main_color_darkens_light_top() {
        let colors = app_colors(&hexes(&["#ffff00", "#336699"])).unwrap();
        assert_eq!(colors[0].hex, "#ffff00");
        assert!(colors[0].luminance > MAX_MAIN_LUMINANCE);

        let main = main_color_for(&colors).unwrap();
        let expected = Color::parse("#ffff00")
            .unwrap()
            .with_luminance(MAIN_LUMINANCE_TARGET)
            .to_hex();
        assert_ne!(main.hex, "#ffff00");
        assert_eq!(main.hex, expected);
        assert_eq!(main, stats_for(&expected).unwrap());
        assert!((main.luminance - MAIN_LUMINANCE_TARGET).abs() <= 0.01);
    }

    #[test]
    fn test_main_color_first_on_tie() {
        let colors = app_colors(&hexes(&["#ff0000", "#00ff00"])).unwrap();
        assert_eq!(main_color_for(&colors).unwrap().hex, "#ff0000");
    }

    #[test]
    fn test_main_color_empty() {
        assert!(main_color_for(&[]).is_none());
    }
}
