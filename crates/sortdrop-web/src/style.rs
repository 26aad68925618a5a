//! Class names, data attributes and inline styles of the widget's DOM tree.
//!
//! Kept free of `web-sys` so the styling rules can be checked natively.

use sortdrop_core::{ItemVisual, Theme, WidgetConfig, ZoneVisual};

/// Class of the zones row.
pub const ZONES_CLASS: &str = "sorting-zones";
/// Class of the tray row.
pub const ITEMS_CLASS: &str = "sorting-items";
/// Classes of a drop zone.
pub const ZONE_CLASS: &str = "glass-panel drop-zone";
/// Classes of a tray item.
pub const ITEM_CLASS: &str = "glass-button draggable-item pop-in";
/// Class of a placed clone.
pub const PLACED_CLASS: &str = "pop-in";

/// Zone identifier from the content descriptor.
pub const DATA_ID: &str = "data-id";
/// Accepted types of a zone, as a JSON array.
pub const DATA_ACCEPT: &str = "data-accept";
/// Positional zone index.
pub const DATA_ZONE: &str = "data-zone";
/// Item type.
pub const DATA_TYPE: &str = "data-type";
/// Positional item index.
pub const DATA_ITEM: &str = "data-item";
/// Widget instance that owns the element.
pub const DATA_WIDGET: &str = "data-widget";

/// Drag transfer format carrying the item type.
pub const TRANSFER_FORMAT: &str = "text/plain";

/// Inline CSS declarations, applied in order.
pub type Declarations = Vec<(&'static str, String)>;

fn decl(property: &'static str, value: impl Into<String>) -> (&'static str, String) {
    (property, value.into())
}

/// Full-size column container.
pub fn container() -> Declarations {
    vec![
        decl("width", "100%"),
        decl("height", "100%"),
        decl("display", "flex"),
        decl("flex-direction", "column"),
        decl("justify-content", "space-between"),
        decl("box-sizing", "border-box"),
    ]
}

pub fn zones_row() -> Declarations {
    vec![
        decl("display", "flex"),
        decl("justify-content", "center"),
        decl("gap", "60px"),
        decl("width", "100%"),
        decl("margin-top", "40px"),
    ]
}

/// Layout of a zone that never changes.
pub fn zone_base(theme: &Theme) -> Declarations {
    let mut decls = vec![
        decl("width", "180px"),
        decl("height", "240px"),
        decl("display", "flex"),
        decl("flex-direction", "column"),
        decl("align-items", "center"),
        decl("justify-content", "center"),
        decl("transition", "transform 0.2s, border 0.2s"),
        decl("border", format!("2px dashed {}", theme.zone_border.to_css())),
        decl("border-radius", "20px"),
    ];
    decls.extend(zone_state(theme, ZoneVisual::Neutral, 1.0));
    decls
}

/// Properties that change between neutral and hover.
pub fn zone_state(theme: &Theme, visual: ZoneVisual, hover_scale: f32) -> Declarations {
    let (scale, border, background) = match visual {
        ZoneVisual::Neutral => (1.0, theme.zone_border, theme.zone_background),
        ZoneVisual::Hover => (hover_scale, theme.zone_hover_border, theme.zone_hover_background),
    };
    vec![
        decl("transform", format!("scale({})", scale)),
        decl("border-color", border.to_css()),
        decl("background", background.to_css()),
    ]
}

/// Shorthand for [`zone_state`] with the config's theme and scale.
pub fn zone_visual(config: &WidgetConfig, visual: ZoneVisual) -> Declarations {
    zone_state(&config.theme, visual, config.hover_scale)
}

pub fn zone_icon() -> Declarations {
    vec![decl("font-size", "5rem"), decl("margin-bottom", "24px")]
}

pub fn zone_label(theme: &Theme) -> Declarations {
    vec![
        decl("font-weight", "800"),
        decl("font-size", "1.5rem"),
        decl("color", theme.label.to_css()),
    ]
}

pub fn items_row(theme: &Theme) -> Declarations {
    vec![
        decl("display", "flex"),
        decl("gap", "40px"),
        decl("justify-content", "center"),
        decl("padding", "40px"),
        decl("background", theme.tray_background.to_css()),
        decl("border-radius", "30px"),
        decl("align-self", "center"),
    ]
}

pub fn item(theme: &Theme) -> Declarations {
    vec![
        decl("font-size", "4rem"),
        decl("padding", "20px"),
        decl("width", "100px"),
        decl("height", "100px"),
        decl("display", "flex"),
        decl("justify-content", "center"),
        decl("align-items", "center"),
        decl("cursor", "grab"),
        decl("background", theme.item_background.to_css()),
        decl("box-shadow", format!("0 10px 20px {}", theme.item_shadow.to_css())),
        decl("border-radius", "24px"),
        // Touch drags must not scroll the page
        decl("touch-action", "none"),
    ]
}

pub fn item_visual(visual: ItemVisual) -> Declarations {
    vec![decl("opacity", format_opacity(visual.opacity()))]
}

/// Placed clone, sized to fit inside a zone.
pub fn placed_clone() -> Declarations {
    vec![decl("font-size", "clamp(1.5rem, 5vw, 3rem)")]
}

fn format_opacity(opacity: f32) -> String {
    if opacity >= 1.0 {
        "1".to_string()
    } else {
        format!("{}", (opacity * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(decls: &'a Declarations, property: &str) -> Option<&'a str> {
        decls
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_hover_is_distinguishable() {
        let config = WidgetConfig::default();
        let neutral = zone_visual(&config, ZoneVisual::Neutral);
        let hover = zone_visual(&config, ZoneVisual::Hover);

        assert_eq!(value(&neutral, "transform"), Some("scale(1)"));
        assert_eq!(value(&hover, "transform"), Some("scale(1.05)"));
        assert_eq!(value(&neutral, "border-color"), Some("#cbd5e1"));
        assert_eq!(value(&hover, "border-color"), Some("#fbbf24"));
        assert_eq!(value(&hover, "background"), Some("#fef3c7"));
        assert_eq!(value(&neutral, "background"), Some("#ffffff"));
    }

    #[test]
    fn test_zone_base_starts_neutral() {
        let theme = Theme::default();
        let base = zone_base(&theme);

        assert_eq!(value(&base, "border"), Some("2px dashed #cbd5e1"));
        assert_eq!(value(&base, "transform"), Some("scale(1)"));
    }

    #[test]
    fn test_item_opacity() {
        assert_eq!(value(&item_visual(ItemVisual::Idle), "opacity"), Some("1"));
        assert_eq!(
            value(&item_visual(ItemVisual::Dragging { opacity: 0.4 }), "opacity"),
            Some("0.4")
        );
        assert_eq!(
            value(&item_visual(ItemVisual::Dragging { opacity: 0.5 }), "opacity"),
            Some("0.5")
        );
    }

    #[test]
    fn test_tray_background_is_translucent() {
        let row = items_row(&Theme::default());
        assert_eq!(value(&row, "background"), Some("rgba(255, 255, 255, 0.50)"));
    }
}
