//! Color palettes for panels

use egui::Color32;

/// Palette attached to a chart spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Categorical,
    Diverging,
}

impl Palette {
    /// Color for the `index`-th series or slice.
    pub fn series_color(self, index: usize) -> Color32 {
        categorical_color(index)
    }

    /// Color for a normalized scale position `t` in [0, 1].
    pub fn scale_color(self, t: f32) -> Color32 {
        match self {
            Palette::Categorical => categorical_color((t * 7.0) as usize),
            Palette::Diverging => diverging_color(t),
        }
    }
}

/// Get a categorical color from a fixed palette.
pub fn categorical_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(100, 150, 250), // Blue
        Color32::from_rgb(250, 150, 100), // Orange
        Color32::from_rgb(150, 250, 100), // Green
        Color32::from_rgb(250, 100, 150), // Pink
        Color32::from_rgb(150, 100, 250), // Purple
        Color32::from_rgb(250, 250, 100), // Yellow
        Color32::from_rgb(100, 250, 250), // Cyan
        Color32::from_rgb(250, 100, 100), // Red
    ];
    PALETTE[index % PALETTE.len()]
}

/// Diverging color map (blue-white-red).
pub fn diverging_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);

    if t < 0.5 {
        let s = t * 2.0;
        Color32::from_rgb(
            (50.0 + 205.0 * s) as u8,
            (50.0 + 205.0 * s) as u8,
            (200.0 + 55.0 * s) as u8,
        )
    } else {
        let s = (t - 0.5) * 2.0;
        Color32::from_rgb(
            255,
            (255.0 - 205.0 * s) as u8,
            (255.0 - 205.0 * s) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_palette_wraps_around() {
        assert_eq!(categorical_color(0), categorical_color(8));
        assert_ne!(categorical_color(0), categorical_color(1));
    }

    #[test]
    fn diverging_endpoints_are_blue_and_red() {
        let low = diverging_color(0.0);
        let high = diverging_color(1.0);
        assert!(low.b() > low.r());
        assert!(high.r() > high.b());
    }
}
