//! Translation of per-frame egui observations into drag input.
//!
//! egui reports drags as state ("this item started dragging", "the pointer
//! was released") rather than DOM-style events. [`PointerTranslator`] keeps
//! the little state needed to turn those observations into the same
//! [`DragInput`] stream the DOM shell produces. Mouse drags map to the
//! pointer modality and touch drags to the touch modality.

use kurbo::Point;
use sortdrop_core::{DragInput, DragModality, ItemId, ZoneId};

/// What the board saw during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameObservation {
    /// Item whose drag started this frame.
    pub drag_started: Option<ItemId>,
    /// Pointer or touch position, if known.
    pub pointer: Option<Point>,
    /// Zone under the pointer.
    pub over: Option<ZoneId>,
    /// The pointer or finger was released this frame.
    pub released: bool,
    /// The current input comes from a touch screen.
    pub touch: bool,
    /// The platform cancelled the touch this frame.
    pub cancelled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    item: ItemId,
    modality: DragModality,
    /// Zone that received the last enter/over (pointer modality).
    hovered: Option<ZoneId>,
}

/// Turns frame observations into drag input.
#[derive(Debug, Clone, Default)]
pub struct PointerTranslator {
    active: Option<ActiveDrag>,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item being dragged, if any.
    pub fn active_item(&self) -> Option<ItemId> {
        self.active.map(|a| a.item)
    }

    pub fn active_modality(&self) -> Option<DragModality> {
        self.active.map(|a| a.modality)
    }

    /// Process one frame and return the input events it implies, in order.
    pub fn observe(&mut self, frame: FrameObservation) -> Vec<DragInput> {
        let mut inputs = Vec::new();

        if let (Some(item), None) = (frame.drag_started, self.active) {
            let modality = if frame.touch {
                DragModality::Touch
            } else {
                DragModality::Pointer
            };
            inputs.push(match modality {
                DragModality::Pointer => DragInput::DragStart { item },
                DragModality::Touch => DragInput::TouchStart {
                    item,
                    position: frame.pointer.unwrap_or(Point::ZERO),
                },
            });
            self.active = Some(ActiveDrag {
                item,
                modality,
                hovered: None,
            });
        }

        let Some(mut active) = self.active else {
            return inputs;
        };

        match active.modality {
            DragModality::Pointer => {
                if frame.over != active.hovered {
                    if let Some(old) = active.hovered {
                        inputs.push(DragInput::DragLeave { zone: old });
                    }
                    if let Some(zone) = frame.over {
                        inputs.push(DragInput::DragEnter { zone });
                    }
                    active.hovered = frame.over;
                } else if let Some(zone) = frame.over {
                    inputs.push(DragInput::DragOver { zone });
                }
            }
            DragModality::Touch => {
                if let Some(position) = frame.pointer {
                    inputs.push(DragInput::TouchMove {
                        position,
                        over: frame.over,
                    });
                }
            }
        }

        if frame.cancelled && active.modality == DragModality::Touch {
            inputs.push(DragInput::TouchCancel { item: active.item });
            self.active = None;
        } else if frame.released {
            match active.modality {
                DragModality::Pointer => {
                    if let Some(zone) = active.hovered {
                        inputs.push(DragInput::Drop {
                            zone,
                            transfer: None,
                        });
                    }
                    inputs.push(DragInput::DragEnd { item: active.item });
                }
                DragModality::Touch => {
                    inputs.push(DragInput::TouchEnd { item: active.item });
                }
            }
            self.active = None;
        } else {
            self.active = Some(active);
        }

        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, over: Option<ZoneId>) -> FrameObservation {
        FrameObservation {
            pointer: Some(Point::new(x, y)),
            over,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_frames_produce_nothing() {
        let mut translator = PointerTranslator::new();
        assert!(translator.observe(at(1.0, 1.0, Some(ZoneId(0)))).is_empty());
        let release = FrameObservation {
            released: true,
            ..Default::default()
        };
        assert!(translator.observe(release).is_empty());
    }

    #[test]
    fn test_mouse_drag_sequence() {
        let mut translator = PointerTranslator::new();

        let start = FrameObservation {
            drag_started: Some(ItemId(2)),
            ..at(10.0, 300.0, None)
        };
        assert_eq!(translator.observe(start), vec![DragInput::DragStart { item: ItemId(2) }]);
        assert_eq!(translator.active_modality(), Some(DragModality::Pointer));

        assert_eq!(
            translator.observe(at(50.0, 50.0, Some(ZoneId(0)))),
            vec![DragInput::DragEnter { zone: ZoneId(0) }]
        );
        assert_eq!(
            translator.observe(at(55.0, 50.0, Some(ZoneId(0)))),
            vec![DragInput::DragOver { zone: ZoneId(0) }]
        );
        assert_eq!(
            translator.observe(at(250.0, 50.0, Some(ZoneId(1)))),
            vec![
                DragInput::DragLeave { zone: ZoneId(0) },
                DragInput::DragEnter { zone: ZoneId(1) },
            ]
        );

        let release = FrameObservation {
            released: true,
            ..at(250.0, 50.0, Some(ZoneId(1)))
        };
        assert_eq!(
            translator.observe(release),
            vec![
                DragInput::DragOver { zone: ZoneId(1) },
                DragInput::Drop { zone: ZoneId(1), transfer: None },
                DragInput::DragEnd { item: ItemId(2) },
            ]
        );
        assert_eq!(translator.active_item(), None);
    }

    #[test]
    fn test_mouse_release_outside_zones() {
        let mut translator = PointerTranslator::new();
        translator.observe(FrameObservation {
            drag_started: Some(ItemId(0)),
            ..at(0.0, 0.0, None)
        });

        let release = FrameObservation {
            released: true,
            ..at(0.0, 900.0, None)
        };
        assert_eq!(translator.observe(release), vec![DragInput::DragEnd { item: ItemId(0) }]);
    }

    #[test]
    fn test_touch_drag_sequence() {
        let mut translator = PointerTranslator::new();

        let start = FrameObservation {
            drag_started: Some(ItemId(1)),
            touch: true,
            ..at(10.0, 300.0, None)
        };
        assert_eq!(
            translator.observe(start),
            vec![
                DragInput::TouchStart { item: ItemId(1), position: Point::new(10.0, 300.0) },
                DragInput::TouchMove { position: Point::new(10.0, 300.0), over: None },
            ]
        );
        assert_eq!(translator.active_modality(), Some(DragModality::Touch));

        assert_eq!(
            translator.observe(at(60.0, 60.0, Some(ZoneId(0)))),
            vec![DragInput::TouchMove { position: Point::new(60.0, 60.0), over: Some(ZoneId(0)) }]
        );

        let release = FrameObservation {
            released: true,
            pointer: None,
            ..Default::default()
        };
        assert_eq!(translator.observe(release), vec![DragInput::TouchEnd { item: ItemId(1) }]);
        assert_eq!(translator.active_item(), None);
    }

    #[test]
    fn test_second_start_during_drag_is_ignored() {
        let mut translator = PointerTranslator::new();
        translator.observe(FrameObservation {
            drag_started: Some(ItemId(0)),
            ..Default::default()
        });

        let inputs = translator.observe(FrameObservation {
            drag_started: Some(ItemId(1)),
            ..Default::default()
        });
        assert!(inputs.is_empty());
        assert_eq!(translator.active_item(), Some(ItemId(0)));
    }

    #[test]
    fn test_touch_cancel_ends_drag() {
        let mut translator = PointerTranslator::new();
        translator.observe(FrameObservation {
            drag_started: Some(ItemId(0)),
            touch: true,
            ..Default::default()
        });

        let cancel = FrameObservation {
            cancelled: true,
            touch: true,
            ..Default::default()
        };
        assert_eq!(translator.observe(cancel), vec![DragInput::TouchCancel { item: ItemId(0) }]);
        assert_eq!(translator.active_item(), None);
    }
}
