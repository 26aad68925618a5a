//! The sorting exercise state machine.
//!
//! A [`SortingExercise`] owns the board, the single drag slot and the
//! placement counter. Shells translate platform events into [`DragInput`]s,
//! call [`SortingExercise::handle`], and apply the returned [`Effect`]s in
//! order. Both input modalities funnel into the same placement path, so a
//! touch drop and a pointer drop with the same item and zone produce the
//! same state transition.

use crate::board::{Board, ItemId, ZoneId};
use crate::config::WidgetConfig;
use crate::content::ContentDescriptor;
use crate::input::{DragInput, DragModality, DragSession, TouchTracker};
use crate::widget::{ItemVisual, VisualManager, ZoneVisual};
use kurbo::Point;
use std::time::Duration;
use uuid::Uuid;

/// Progress of the exercise as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    #[default]
    InProgress,
    /// Every item is placed; the success callback is scheduled.
    Pending,
    /// The success callback has fired.
    Complete,
}

/// Instructions for the shell, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Publish the item's type as drag transfer data.
    PublishTransfer { item: ItemId, kind: String },
    /// Restyle a tray item.
    ItemVisual { item: ItemId, visual: ItemVisual },
    /// Restyle a zone.
    ZoneVisual { zone: ZoneId, visual: ZoneVisual },
    /// Remove the item from the tray and append a non-draggable clone to the zone.
    Placed { item: ItemId, zone: ZoneId },
    /// Best-effort click sound.
    PlayClick,
    /// A drop was rejected; invoke the failure callback once.
    Failed,
    /// Every item is placed; call [`SortingExercise::fire_success`] after `delay`.
    ScheduleSuccess { delay: Duration },
}

/// Interaction state of one sorting widget.
#[derive(Debug, Clone)]
pub struct SortingExercise {
    id: Uuid,
    board: Board,
    config: WidgetConfig,
    visuals: VisualManager,
    /// The item being dragged, whichever modality started it.
    dragged: Option<DragSession>,
    touch: TouchTracker,
    placed_count: usize,
    completion: Completion,
}

impl SortingExercise {
    /// Create an exercise with every item in the tray.
    pub fn new(content: &ContentDescriptor, config: WidgetConfig) -> Self {
        content.log_suspicious();
        let board = Board::from_content(content);
        let visuals = VisualManager::new(board.zones().len());
        let exercise = Self {
            id: Uuid::new_v4(),
            board,
            config,
            visuals,
            dragged: None,
            touch: TouchTracker::new(),
            placed_count: 0,
            completion: Completion::InProgress,
        };
        log::info!(
            "Sorting exercise {} created: {} items, {} zones",
            exercise.id,
            exercise.item_count(),
            exercise.board.zones().len()
        );
        exercise
    }

    /// Unique id of this instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn visuals(&self) -> &VisualManager {
        &self.visuals
    }

    pub fn item_count(&self) -> usize {
        self.board.item_count()
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn is_complete(&self) -> bool {
        self.completion == Completion::Complete
    }

    /// The item currently being dragged, if any.
    pub fn dragged_item(&self) -> Option<ItemId> {
        self.dragged.map(|session| session.item)
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.dragged
    }

    /// Current touch position while a touch drag is active.
    pub fn touch_position(&self) -> Option<Point> {
        self.touch.position.filter(|_| self.touch.is_active())
    }

    /// Process one input event.
    pub fn handle(&mut self, input: DragInput) -> Vec<Effect> {
        log::debug!("{}: {:?}", self.id, input);
        let mut effects = Vec::new();
        match input {
            DragInput::DragStart { item } => {
                if self.begin_drag(item, DragModality::Pointer) {
                    let kind = self.board.item(item).map(|i| i.kind.clone()).unwrap_or_default();
                    effects.push(Effect::PublishTransfer { item, kind });
                    let visual = self.dragging_visual(DragModality::Pointer);
                    self.set_item_visual(item, visual, &mut effects);
                }
            }
            DragInput::DragEnd { item } => {
                if self.board.item(item).is_some_and(|i| i.in_tray()) {
                    self.set_item_visual(item, ItemVisual::Idle, &mut effects);
                }
                // Fires whether or not a drop happened
                self.dragged = None;
            }
            DragInput::DragEnter { zone } | DragInput::DragOver { zone } => {
                if self.check_zone(zone) {
                    self.set_zone_visual(zone, ZoneVisual::Hover, &mut effects);
                }
            }
            DragInput::DragLeave { zone } => {
                if self.check_zone(zone) {
                    self.set_zone_visual(zone, ZoneVisual::Neutral, &mut effects);
                }
            }
            DragInput::Drop { zone, transfer } => {
                if !self.check_zone(zone) {
                    return effects;
                }
                self.set_zone_visual(zone, ZoneVisual::Neutral, &mut effects);
                let Some(session) = self.dragged else {
                    log::debug!("{}: drop on {} with no tracked item ignored", self.id, zone);
                    return effects;
                };
                let kind = transfer
                    .filter(|t| !t.is_empty())
                    .or_else(|| self.board.item(session.item).map(|i| i.kind.clone()))
                    .unwrap_or_default();
                self.resolve_drop(zone, &kind, &mut effects);
            }
            DragInput::TouchStart { item, position } => {
                if self.begin_drag(item, DragModality::Touch) {
                    self.touch.begin(item, position);
                    let visual = self.dragging_visual(DragModality::Touch);
                    self.set_item_visual(item, visual, &mut effects);
                }
            }
            DragInput::TouchMove { position, over } => {
                let over = over.filter(|zone| self.check_zone(*zone));
                if !self.touch.update(position, over) {
                    return effects;
                }
                for (zone, visual) in self.visuals.hover_only(over) {
                    effects.push(Effect::ZoneVisual { zone, visual });
                }
            }
            DragInput::TouchEnd { item } => self.end_touch(item, true, &mut effects),
            DragInput::TouchCancel { item } => self.end_touch(item, false, &mut effects),
        }
        effects
    }

    /// Mark the deferred success as delivered.
    ///
    /// Returns true exactly once, after every item has been placed.
    pub fn fire_success(&mut self) -> bool {
        if self.completion != Completion::Pending {
            return false;
        }
        self.completion = Completion::Complete;
        log::info!("Sorting exercise {} complete", self.id);
        true
    }

    fn begin_drag(&mut self, item: ItemId, modality: DragModality) -> bool {
        match self.board.item(item) {
            None => {
                log::warn!("{}: drag started on unknown {}", self.id, item);
                false
            }
            Some(entry) if !entry.in_tray() => {
                log::debug!("{}: {} is already placed", self.id, item);
                false
            }
            Some(_) => {
                self.dragged = Some(DragSession { item, modality });
                true
            }
        }
    }

    /// Finish a touch drag. A cancelled touch never resolves a drop.
    fn end_touch(&mut self, item: ItemId, resolve: bool, effects: &mut Vec<Effect>) {
        let Some(active) = self.touch.active_item() else {
            return;
        };
        if active != item {
            log::debug!("{}: touch ended on {} but started on {}", self.id, item, active);
        }
        self.set_item_visual(active, ItemVisual::Idle, effects);

        // Only the zone recorded by the last move counts
        let target = self.touch.finish();
        if let Some(zone) = target.filter(|_| resolve) {
            let kind = self.board.item(active).map(|i| i.kind.clone()).unwrap_or_default();
            self.resolve_drop(zone, &kind, effects);
        }

        for (zone, visual) in self.visuals.reset_zones() {
            effects.push(Effect::ZoneVisual { zone, visual });
        }
        self.dragged = None;
    }

    fn dragging_visual(&self, modality: DragModality) -> ItemVisual {
        let opacity = match modality {
            DragModality::Pointer => self.config.drag_opacity,
            DragModality::Touch => self.config.touch_drag_opacity,
        };
        ItemVisual::Dragging { opacity }
    }

    fn check_zone(&self, zone: ZoneId) -> bool {
        if self.board.zone(zone).is_none() {
            log::warn!("{}: event for unknown {}", self.id, zone);
            return false;
        }
        true
    }

    fn resolve_drop(&mut self, zone: ZoneId, kind: &str, effects: &mut Vec<Effect>) {
        let accepted = self.board.zone(zone).is_some_and(|z| z.accepts(kind));
        if accepted {
            self.place_dragged(zone, effects);
        } else {
            log::debug!("{}: {} rejects type '{}'", self.id, zone, kind);
            effects.push(Effect::Failed);
        }
    }

    fn place_dragged(&mut self, zone: ZoneId, effects: &mut Vec<Effect>) {
        let Some(session) = self.dragged.take() else {
            return;
        };
        if let Err(err) = self.board.place(session.item, zone) {
            log::warn!("{}: {}", self.id, err);
            return;
        }
        self.visuals.remove_item(session.item);
        self.placed_count += 1;
        debug_assert_eq!(self.placed_count, self.board.placed_total());

        effects.push(Effect::Placed { item: session.item, zone });
        if self.config.click_sound {
            effects.push(Effect::PlayClick);
        }
        if self.placed_count == self.item_count() && self.completion == Completion::InProgress {
            self.completion = Completion::Pending;
            effects.push(Effect::ScheduleSuccess {
                delay: self.config.success_delay(),
            });
        }
    }

    fn set_item_visual(&mut self, item: ItemId, visual: ItemVisual, effects: &mut Vec<Effect>) {
        if self.visuals.set_item(item, visual) {
            effects.push(Effect::ItemVisual { item, visual });
        }
    }

    fn set_zone_visual(&mut self, zone: ZoneId, visual: ZoneVisual, effects: &mut Vec<Effect>) {
        if self.visuals.set_zone(zone, visual) {
            effects.push(Effect::ZoneVisual { zone, visual });
        }
    }
}
