//! The sorting board: a row of drop zones above a tray of draggable items.

use crate::colors::{to_color32, ZonePaint};
use crate::interaction::{FrameObservation, PointerTranslator};
use crate::{fonts, sizing};
use egui::{
    vec2, Align2, Color32, Context, CornerRadius, CursorIcon, FontId, Id, LayerId, Order, Painter,
    Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Ui,
};
use sortdrop_core::{
    ContentDescriptor, DragInput, Effect, ItemId, SortingExercise, SuccessTimer, WidgetConfig, Zone,
    ZoneLayout,
};

type Callback = Box<dyn FnMut()>;

/// Padding between the tray border and its items.
const TRAY_PADDING: f32 = 40.0;

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(rect.min.x),
        f64::from(rect.min.y),
        f64::from(rect.max.x),
        f64::from(rect.max.y),
    )
}

/// egui widget running one sorting exercise.
///
/// Item content is shown as plain text.
pub struct SortingBoard {
    exercise: SortingExercise,
    translator: PointerTranslator,
    layout: ZoneLayout,
    timer: SuccessTimer,
    on_success: Option<Callback>,
    on_fail: Option<Callback>,
    on_click: Option<Callback>,
}

impl SortingBoard {
    /// Create a board with every item in the tray.
    pub fn new(content: &ContentDescriptor, config: WidgetConfig) -> Self {
        Self {
            exercise: SortingExercise::new(content, config),
            translator: PointerTranslator::new(),
            layout: ZoneLayout::new(),
            timer: SuccessTimer::new(),
            on_success: None,
            on_fail: None,
            on_click: None,
        }
    }

    /// Called once, after the last item is placed and the delay elapsed.
    pub fn on_success(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called once per rejected drop.
    pub fn on_fail(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_fail = Some(Box::new(callback));
        self
    }

    /// Called on every placement when click sounds are enabled.
    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn exercise(&self) -> &SortingExercise {
        &self.exercise
    }

    /// Zone rectangles from the last frame.
    pub fn zone_layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Show the board and process this frame's input.
    pub fn show(&mut self, ui: &mut Ui) {
        let mut frame = FrameObservation::default();
        ui.vertical_centered(|ui| {
            self.show_zones(ui);
            ui.add_space(sizing::ZONE_GAP);
            frame.drag_started = self.show_tray(ui);
        });

        let (pointer, released, touch, cancelled) = ui.input(|i| {
            let cancelled = i.events.iter().any(|e| {
                matches!(e, egui::Event::Touch { phase: egui::TouchPhase::Cancel, .. })
            });
            (
                i.pointer.latest_pos(),
                i.pointer.any_released(),
                i.any_touches(),
                cancelled,
            )
        });
        frame.pointer = pointer.map(to_point);
        frame.over = frame.pointer.and_then(|p| self.layout.zone_at(p));
        frame.released = released;
        frame.touch = touch;
        frame.cancelled = cancelled;

        self.paint_dragged(ui.ctx(), pointer);

        for input in self.translator.observe(frame) {
            self.dispatch(ui.ctx(), input);
        }
        self.poll_success(ui.ctx());
    }

    /// Feed one input event to the exercise and apply its effects.
    pub fn dispatch(&mut self, ctx: &Context, input: DragInput) {
        let effects = self.exercise.handle(input);
        if !effects.is_empty() {
            ctx.request_repaint();
        }
        for effect in effects {
            match effect {
                Effect::Failed => {
                    if let Some(callback) = self.on_fail.as_mut() {
                        callback();
                    }
                }
                Effect::PlayClick => {
                    if let Some(callback) = self.on_click.as_mut() {
                        callback();
                    }
                }
                Effect::ScheduleSuccess { delay } => {
                    self.timer.arm(delay);
                    ctx.request_repaint_after(delay);
                }
                Effect::Placed { item, zone } => {
                    log::debug!("Placed {} in {}", item, zone);
                }
                // Styling is read from the exercise every frame
                Effect::PublishTransfer { .. }
                | Effect::ItemVisual { .. }
                | Effect::ZoneVisual { .. } => {}
            }
        }
    }

    fn poll_success(&mut self, ctx: &Context) {
        if self.timer.poll() {
            if self.exercise.fire_success() {
                if let Some(callback) = self.on_success.as_mut() {
                    callback();
                }
            }
        } else if let Some(remaining) = self.timer.remaining() {
            ctx.request_repaint_after(remaining);
        }
    }

    fn show_zones(&mut self, ui: &mut Ui) {
        self.layout.clear();
        let exercise = &self.exercise;
        let layout = &mut self.layout;
        let zones = exercise.board().zones();
        let row_width =
            zones.len() as f32 * (sizing::ZONE_WIDTH + sizing::ZONE_GAP) - sizing::ZONE_GAP;

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            ui.spacing_mut().item_spacing.x = sizing::ZONE_GAP;
            for zone in zones {
                let (rect, _) = ui.allocate_exact_size(
                    vec2(sizing::ZONE_WIDTH, sizing::ZONE_HEIGHT),
                    Sense::hover(),
                );
                layout.insert(zone.id, to_kurbo_rect(rect));
                if ui.is_rect_visible(rect) {
                    let config = exercise.config();
                    let paint = ZonePaint::for_state(
                        &config.theme,
                        exercise.visuals().zone(zone.id),
                        config.hover_scale,
                    );
                    let placed: Vec<&str> = exercise
                        .board()
                        .placed_in(zone.id)
                        .map(|item| item.content.as_str())
                        .collect();
                    let label = to_color32(config.theme.label);
                    paint_zone(ui.painter(), rect, zone, &paint, &placed, label);
                }
            }
        });
    }

    /// Show the tray. Returns the item whose drag started this frame.
    fn show_tray(&mut self, ui: &mut Ui) -> Option<ItemId> {
        let theme = &self.exercise.config().theme;
        let items: Vec<(ItemId, String)> = self
            .exercise
            .board()
            .tray_items()
            .map(|item| (item.id, item.content.clone()))
            .collect();

        let count = items.len().max(1) as f32;
        let size = vec2(
            count * (sizing::ITEM_SIZE + sizing::ITEM_GAP) - sizing::ITEM_GAP + 2.0 * TRAY_PADDING,
            sizing::ITEM_SIZE + 2.0 * TRAY_PADDING,
        );
        let (tray_rect, _) = ui.allocate_exact_size(size, Sense::hover());
        ui.painter().rect_filled(
            tray_rect,
            CornerRadius::same(sizing::TRAY_RADIUS),
            to_color32(theme.tray_background),
        );

        let item_fill = to_color32(theme.item_background);
        let shadow = to_color32(theme.item_shadow);
        let mut started = None;
        for (i, (id, content)) in items.iter().enumerate() {
            let offset = TRAY_PADDING + i as f32 * (sizing::ITEM_SIZE + sizing::ITEM_GAP);
            let min = tray_rect.min + vec2(offset, TRAY_PADDING);
            let rect = Rect::from_min_size(min, vec2(sizing::ITEM_SIZE, sizing::ITEM_SIZE));
            let response = ui.interact(rect, self.item_id(*id), Sense::drag());
            if response.drag_started() {
                started = Some(*id);
            }
            response.on_hover_cursor(CursorIcon::Grab);

            let opacity = self.exercise.visuals().item(*id).opacity();
            paint_item(ui.painter(), rect, content, item_fill, shadow, opacity);
        }
        started
    }

    /// Draw a copy of the dragged item under the pointer.
    fn paint_dragged(&self, ctx: &Context, pointer: Option<Pos2>) {
        let (Some(item), Some(pointer)) = (self.translator.active_item(), pointer) else {
            return;
        };
        let Some(item) = self.exercise.board().item(item).filter(|i| i.in_tray()) else {
            return;
        };
        let theme = &self.exercise.config().theme;
        let layer = LayerId::new(
            Order::Tooltip,
            Id::new(("sortdrop-drag", self.exercise.id())),
        );
        let painter = ctx.layer_painter(layer);
        let rect = Rect::from_center_size(pointer, vec2(sizing::ITEM_SIZE, sizing::ITEM_SIZE));
        paint_item(
            &painter,
            rect,
            &item.content,
            to_color32(theme.item_background),
            to_color32(theme.item_shadow),
            1.0,
        );
        ctx.set_cursor_icon(CursorIcon::Grabbing);
    }

    fn item_id(&self, item: ItemId) -> Id {
        Id::new(("sortdrop-item", self.exercise.id(), item.0))
    }
}

fn paint_zone(
    painter: &Painter,
    rect: Rect,
    zone: &Zone,
    paint: &ZonePaint,
    placed: &[&str],
    label_color: Color32,
) {
    let rect = Rect::from_center_size(rect.center(), rect.size() * paint.scale);
    let radius = CornerRadius::same(sizing::ZONE_RADIUS);
    painter.rect_filled(rect, radius, paint.fill);

    let stroke = Stroke::new(2.0, paint.border);
    if paint.dashed {
        let outline = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(&outline, stroke, 8.0, 6.0));
    } else {
        painter.rect_stroke(rect, radius, stroke, StrokeKind::Inside);
    }

    let icon_pos = Pos2::new(rect.center().x, rect.top() + rect.height() * 0.3);
    painter.text(
        icon_pos,
        Align2::CENTER_CENTER,
        &zone.icon,
        FontId::proportional(fonts::ICON),
        Color32::BLACK,
    );
    let label_pos = Pos2::new(rect.center().x, rect.top() + rect.height() * 0.6);
    painter.text(
        label_pos,
        Align2::CENTER_CENTER,
        &zone.label,
        FontId::proportional(fonts::LABEL),
        label_color,
    );

    if !placed.is_empty() {
        let placed_pos = Pos2::new(rect.center().x, rect.bottom() - 28.0);
        painter.text(
            placed_pos,
            Align2::CENTER_CENTER,
            placed.join(" "),
            FontId::proportional(fonts::PLACED),
            Color32::BLACK,
        );
    }
}

fn paint_item(
    painter: &Painter,
    rect: Rect,
    content: &str,
    fill: Color32,
    shadow: Color32,
    opacity: f32,
) {
    let radius = CornerRadius::same(sizing::ITEM_RADIUS);
    painter.rect_filled(rect.translate(vec2(0.0, 10.0)), radius, shadow.gamma_multiply(opacity));
    painter.rect_filled(rect, radius, fill.gamma_multiply(opacity));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        content,
        FontId::proportional(fonts::ITEM),
        Color32::BLACK.gamma_multiply(opacity),
    );
}
