//! Theme colors as egui colors.

use egui::Color32;
use sortdrop_core::{Rgba, Theme, ZoneVisual};

/// Convert a theme color to an egui color.
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Fill, border and scale of a zone in a given visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePaint {
    pub fill: Color32,
    pub border: Color32,
    pub scale: f32,
    /// Neutral zones use a dashed border, hovered ones a solid one.
    pub dashed: bool,
}

impl ZonePaint {
    pub fn for_state(theme: &Theme, visual: ZoneVisual, hover_scale: f32) -> Self {
        match visual {
            ZoneVisual::Neutral => Self {
                fill: to_color32(theme.zone_background),
                border: to_color32(theme.zone_border),
                scale: 1.0,
                dashed: true,
            },
            ZoneVisual::Hover => Self {
                fill: to_color32(theme.zone_hover_background),
                border: to_color32(theme.zone_hover_border),
                scale: hover_scale,
                dashed: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(Rgba::rgb(251, 191, 36)), Color32::from_rgb(251, 191, 36));
    }

    #[test]
    fn test_hover_and_neutral_are_distinguishable() {
        let theme = Theme::default();
        let neutral = ZonePaint::for_state(&theme, ZoneVisual::Neutral, 1.05);
        let hover = ZonePaint::for_state(&theme, ZoneVisual::Hover, 1.05);

        assert_ne!(neutral.fill, hover.fill);
        assert_ne!(neutral.border, hover.border);
        assert!(hover.scale > neutral.scale);
        assert!(neutral.dashed && !hover.dashed);
    }
}
