//! Widget configuration and theme.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid widget config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Opacity must be within 0..=1, got {0}")]
    Opacity(f32),
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// CSS color value. Opaque colors use hex notation.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = f32::from(self.a) / 255.0;
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha)
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colors for the neutral, hover and placed states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub zone_background: Rgba,
    pub zone_border: Rgba,
    pub zone_hover_background: Rgba,
    pub zone_hover_border: Rgba,
    pub label: Rgba,
    pub item_background: Rgba,
    pub item_shadow: Rgba,
    pub tray_background: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            zone_background: Rgba::white(),
            // Slate 300
            zone_border: Rgba::rgb(203, 213, 225),
            // Amber 100 / Amber 400
            zone_hover_background: Rgba::rgb(254, 243, 199),
            zone_hover_border: Rgba::rgb(251, 191, 36),
            // Gray 600
            label: Rgba::rgb(75, 85, 99),
            item_background: Rgba::white(),
            item_shadow: Rgba::new(0, 0, 0, 26),
            tray_background: Rgba::new(255, 255, 255, 128),
        }
    }
}

/// Tunables for one widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Delay between the final placement and the success callback.
    pub success_delay_ms: u64,
    /// Opacity of an item being dragged with a pointer.
    pub drag_opacity: f32,
    /// Opacity of an item being dragged by touch.
    pub touch_drag_opacity: f32,
    /// Scale applied to a hovered zone.
    pub hover_scale: f32,
    /// Ask the host to play a click on every placement.
    pub click_sound: bool,
    pub theme: Theme,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: 500,
            drag_opacity: 0.4,
            touch_drag_opacity: 0.5,
            hover_scale: 1.05,
            click_sound: true,
            theme: Theme::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for opacity in [self.drag_opacity, self.touch_drag_opacity] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigError::Opacity(opacity));
            }
        }
        Ok(())
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}
