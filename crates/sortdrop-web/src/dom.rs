//! DOM construction and mutation.

use crate::style::{self, Declarations};
use sortdrop_core::{SortingExercise, ZoneId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Elements of one rendered widget.
pub struct DomTree {
    pub document: Document,
    /// Zone elements indexed by `ZoneId`.
    pub zones: Vec<HtmlElement>,
    /// Item elements indexed by `ItemId`.
    pub items: Vec<HtmlElement>,
}

impl DomTree {
    /// Render zones and items into the container.
    pub fn build(
        document: Document,
        container: &HtmlElement,
        exercise: &SortingExercise,
    ) -> Result<Self, JsValue> {
        let config = exercise.config();
        let theme = &config.theme;
        let widget_id = exercise.id().to_string();
        apply_styles(container, &style::container())?;

        let zones_row = create_div(&document, style::ZONES_CLASS)?;
        apply_styles(&zones_row, &style::zones_row())?;
        let mut zones = Vec::with_capacity(exercise.board().zones().len());
        for zone in exercise.board().zones() {
            let el = create_div(&document, style::ZONE_CLASS)?;
            el.set_attribute(style::DATA_ID, &zone.name)?;
            el.set_attribute(style::DATA_ACCEPT, &zone.accept_json())?;
            el.set_attribute(style::DATA_ZONE, &zone.id.0.to_string())?;
            el.set_attribute(style::DATA_WIDGET, &widget_id)?;

            let icon = create_div(&document, "")?;
            icon.set_inner_html(&zone.icon);
            apply_styles(&icon, &style::zone_icon())?;
            let label = create_div(&document, "")?;
            label.set_text_content(Some(&zone.label));
            apply_styles(&label, &style::zone_label(theme))?;
            el.append_child(&icon)?;
            el.append_child(&label)?;

            apply_styles(&el, &style::zone_base(theme))?;
            zones_row.append_child(&el)?;
            zones.push(el);
        }

        let items_row = create_div(&document, style::ITEMS_CLASS)?;
        apply_styles(&items_row, &style::items_row(theme))?;
        let mut items = Vec::with_capacity(exercise.item_count());
        for item in exercise.board().items() {
            let el = create_div(&document, style::ITEM_CLASS)?;
            el.set_draggable(true);
            el.set_attribute(style::DATA_TYPE, &item.kind)?;
            el.set_attribute(style::DATA_ITEM, &item.id.0.to_string())?;
            el.set_attribute(style::DATA_WIDGET, &widget_id)?;
            el.set_inner_html(&item.content);
            apply_styles(&el, &style::item(theme))?;
            items_row.append_child(&el)?;
            items.push(el);
        }

        container.append_child(&zones_row)?;
        container.append_child(&items_row)?;

        Ok(Self {
            document,
            zones,
            items,
        })
    }

    /// Zone of this widget containing an element, if any.
    pub fn zone_containing(&self, target: &Element) -> Option<ZoneId> {
        self.zones
            .iter()
            .position(|zone| zone.contains(Some(target.as_ref())))
            .map(ZoneId)
    }

    /// Zone under a viewport point.
    pub fn zone_at(&self, x: f32, y: f32) -> Option<ZoneId> {
        self.document
            .element_from_point(x, y)
            .and_then(|target| self.zone_containing(&target))
    }

    /// Remove an item from the tray and append a plain clone of its content to a zone.
    pub fn place(&self, item: usize, zone: usize) -> Result<(), JsValue> {
        let (Some(item_el), Some(zone_el)) = (self.items.get(item), self.zones.get(zone)) else {
            return Ok(());
        };
        item_el.remove();

        let clone = create_div(&self.document, style::PLACED_CLASS)?;
        clone.set_inner_html(&item_el.inner_html());
        apply_styles(&clone, &style::placed_clone())?;
        zone_el.append_child(&clone)?;
        Ok(())
    }
}

/// Create a `div` with the given classes.
pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Set inline style properties in order.
pub fn apply_styles(el: &HtmlElement, decls: &Declarations) -> Result<(), JsValue> {
    let style = el.style();
    for (property, value) in decls {
        style.set_property(property, value)?;
    }
    Ok(())
}
