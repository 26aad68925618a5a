//! The `SortingWidget` exported to JavaScript.

use crate::dom::DomTree;
use crate::style;
use js_sys::{Function, Reflect};
use kurbo::Point;
use sortdrop_core::{
    ContentDescriptor, DragInput, Effect, ItemId, SortingExercise, WidgetConfig, ZoneId,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, DataTransfer, DragEvent, Event, HtmlElement, TouchEvent};

/// An attached DOM listener.
struct Listener {
    target: HtmlElement,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn detach(&self) {
        let callback = self.closure.as_ref().unchecked_ref();
        if let Err(e) = self.target.remove_event_listener_with_callback(self.event_type, callback) {
            log::warn!("Failed to remove {} listener: {:?}", self.event_type, e);
        }
    }
}

struct Inner {
    exercise: SortingExercise,
    dom: DomTree,
    on_success: Function,
    on_fail: Function,
    /// Each listener owns a strong handle to this state until detached.
    listeners: Vec<Listener>,
}

/// Calls into the host page, made once the state borrow is released.
enum HostCall {
    Fail,
    Click,
    Success(Duration),
}

/// A drag-and-drop sorting exercise rendered into a container element.
#[wasm_bindgen]
pub struct SortingWidget {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl SortingWidget {
    /// Render the exercise into `container` with the default config.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        content: JsValue,
        on_success: Function,
        on_fail: Function,
    ) -> Result<SortingWidget, JsValue> {
        Self::with_config(container, content, on_success, on_fail, JsValue::UNDEFINED)
    }

    /// Render the exercise with a `WidgetConfig` object. `undefined` or `null` uses the defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        container: HtmlElement,
        content: JsValue,
        on_success: Function,
        on_fail: Function,
        config: JsValue,
    ) -> Result<SortingWidget, JsValue> {
        let content: ContentDescriptor = serde_wasm_bindgen::from_value(content)
            .map_err(|e| JsValue::from_str(&format!("Invalid content: {}", e)))?;
        let config: WidgetConfig = if config.is_undefined() || config.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let document = container
            .owner_document()
            .or_else(|| web_sys::window().and_then(|w| w.document()))
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let exercise = SortingExercise::new(&content, config);
        let dom = DomTree::build(document, &container, &exercise)?;
        let inner = Rc::new(RefCell::new(Inner {
            exercise,
            dom,
            on_success,
            on_fail,
            listeners: Vec::new(),
        }));
        attach_listeners(&inner)?;
        Ok(SortingWidget { inner })
    }

    #[wasm_bindgen(getter = placedCount)]
    pub fn placed_count(&self) -> usize {
        self.inner.borrow().exercise.placed_count()
    }

    #[wasm_bindgen(getter = itemCount)]
    pub fn item_count(&self) -> usize {
        self.inner.borrow().exercise.item_count()
    }

    #[wasm_bindgen(getter = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.inner.borrow().exercise.is_complete()
    }

    /// Detach every DOM listener. The rendered tree stays in place but no
    /// longer reacts to input. Calling it again is a no-op.
    pub fn destroy(&self) {
        let listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for listener in &listeners {
            listener.detach();
        }
        log::debug!(
            "Sorting widget {} detached {} listeners",
            self.inner.borrow().exercise.id(),
            listeners.len()
        );
    }
}

fn attach_listeners(inner: &Rc<RefCell<Inner>>) -> Result<(), JsValue> {
    let mut listeners = Vec::new();
    if let Err(e) = register_listeners(inner, &mut listeners) {
        // Half-attached listeners would outlive their closures
        for listener in &listeners {
            listener.detach();
        }
        return Err(e);
    }
    inner.borrow_mut().listeners = listeners;
    Ok(())
}

fn register_listeners(
    inner: &Rc<RefCell<Inner>>,
    listeners: &mut Vec<Listener>,
) -> Result<(), JsValue> {
    let (items, zones) = {
        let state = inner.borrow();
        (state.dom.items.clone(), state.dom.zones.clone())
    };

    for (index, el) in items.iter().enumerate() {
        let item = ItemId(index);

        listeners.push(listen(el, "dragstart", true, inner, move |state, event| {
            let transfer = event.dyn_ref::<DragEvent>().and_then(|e| e.data_transfer());
            dispatch(state, DragInput::DragStart { item }, transfer.as_ref());
        })?);
        listeners.push(listen(el, "dragend", true, inner, move |state, _| {
            dispatch(state, DragInput::DragEnd { item }, None);
        })?);
        listeners.push(listen(el, "touchstart", true, inner, move |state, event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) else {
                return;
            };
            let position = Point::new(touch.client_x() as f64, touch.client_y() as f64);
            dispatch(state, DragInput::TouchStart { item, position }, None);
        })?);
        listeners.push(listen(el, "touchmove", false, inner, move |state, event| {
            let touching = state
                .try_borrow()
                .is_ok_and(|inner| inner.exercise.touch_position().is_some());
            if !touching {
                return;
            }
            event.prevent_default();
            let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) else {
                return;
            };
            let (x, y) = (touch.client_x(), touch.client_y());
            let Ok(over) = state.try_borrow().map(|inner| inner.dom.zone_at(x as f32, y as f32))
            else {
                return;
            };
            let position = Point::new(x as f64, y as f64);
            dispatch(state, DragInput::TouchMove { position, over }, None);
        })?);
        listeners.push(listen(el, "touchend", true, inner, move |state, _| {
            dispatch(state, DragInput::TouchEnd { item }, None);
        })?);
        listeners.push(listen(el, "touchcancel", true, inner, move |state, _| {
            dispatch(state, DragInput::TouchCancel { item }, None);
        })?);
    }

    for (index, el) in zones.iter().enumerate() {
        let zone = ZoneId(index);

        listeners.push(listen(el, "dragenter", true, inner, move |state, event| {
            event.prevent_default();
            dispatch(state, DragInput::DragEnter { zone }, None);
        })?);
        listeners.push(listen(el, "dragover", true, inner, move |state, event| {
            event.prevent_default();
            dispatch(state, DragInput::DragOver { zone }, None);
        })?);
        listeners.push(listen(el, "dragleave", true, inner, move |state, _| {
            dispatch(state, DragInput::DragLeave { zone }, None);
        })?);
        listeners.push(listen(el, "drop", true, inner, move |state, event| {
            event.prevent_default();
            let transfer = event
                .dyn_ref::<DragEvent>()
                .and_then(|e| e.data_transfer())
                .and_then(|dt| dt.get_data(style::TRANSFER_FORMAT).ok());
            dispatch(state, DragInput::Drop { zone, transfer }, None);
        })?);
    }

    Ok(())
}

/// Register an event listener that runs `handler` against the widget state.
fn listen(
    target: &HtmlElement,
    event_type: &'static str,
    passive: bool,
    state: &Rc<RefCell<Inner>>,
    handler: impl Fn(&Rc<RefCell<Inner>>, &Event) + 'static,
) -> Result<Listener, JsValue> {
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        handler(&state, &event);
    }) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    Ok(Listener {
        target: target.clone(),
        event_type,
        closure,
    })
}

/// Feed one input to the exercise, apply DOM effects, then call the host.
fn dispatch(state: &Rc<RefCell<Inner>>, input: DragInput, transfer: Option<&DataTransfer>) {
    let host_calls = {
        let Ok(mut inner) = state.try_borrow_mut() else {
            log::warn!("Re-entrant {:?} ignored", input);
            return;
        };
        let effects = inner.exercise.handle(input);
        apply(&inner, effects, transfer)
    };

    for call in host_calls {
        match call {
            HostCall::Fail => {
                let on_fail = state.borrow().on_fail.clone();
                if let Err(e) = on_fail.call0(&JsValue::NULL) {
                    log::error!("onFail threw: {:?}", e);
                }
            }
            HostCall::Click => play_click(),
            HostCall::Success(delay) => schedule_success(state.clone(), delay),
        }
    }
}

fn apply(inner: &Inner, effects: Vec<Effect>, transfer: Option<&DataTransfer>) -> Vec<HostCall> {
    let mut host_calls = Vec::new();
    for effect in effects {
        let result = match effect {
            Effect::PublishTransfer { kind, .. } => match transfer {
                Some(dt) => dt.set_data(style::TRANSFER_FORMAT, &kind),
                None => Ok(()),
            },
            Effect::ItemVisual { item, visual } => match inner.dom.items.get(item.0) {
                Some(el) => crate::dom::apply_styles(el, &style::item_visual(visual)),
                None => Ok(()),
            },
            Effect::ZoneVisual { zone, visual } => match inner.dom.zones.get(zone.0) {
                Some(el) => crate::dom::apply_styles(
                    el,
                    &style::zone_visual(inner.exercise.config(), visual),
                ),
                None => Ok(()),
            },
            Effect::Placed { item, zone } => inner.dom.place(item.0, zone.0),
            Effect::PlayClick => {
                host_calls.push(HostCall::Click);
                Ok(())
            }
            Effect::Failed => {
                host_calls.push(HostCall::Fail);
                Ok(())
            }
            Effect::ScheduleSuccess { delay } => {
                host_calls.push(HostCall::Success(delay));
                Ok(())
            }
        };
        if let Err(e) = result {
            log::error!("Failed to apply effect: {:?}", e);
        }
    }
    host_calls
}

/// Call `window.SFX.playClick()` when the page provides it.
fn play_click() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let sfx = match Reflect::get(&window, &JsValue::from_str("SFX")) {
        Ok(sfx) if sfx.is_object() => sfx,
        _ => return,
    };
    let Some(play) = Reflect::get(&sfx, &JsValue::from_str("playClick"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };
    if let Err(e) = play.call0(&sfx) {
        log::warn!("SFX.playClick threw: {:?}", e);
    }
}

/// Run `onSuccess` after `delay`. The pending timeout keeps the widget alive.
fn schedule_success(state: Rc<RefCell<Inner>>, delay: Duration) {
    let Some(window) = web_sys::window() else {
        log::error!("No window to schedule success on");
        return;
    };
    let callback = Closure::once_into_js(move || {
        let on_success = {
            let mut inner = state.borrow_mut();
            if !inner.exercise.fire_success() {
                return;
            }
            inner.on_success.clone()
        };
        if let Err(e) = on_success.call0(&JsValue::NULL) {
            log::error!("onSuccess threw: {:?}", e);
        }
    });
    let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let scheduled = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout);
    if let Err(e) = scheduled {
        log::error!("Failed to schedule success: {:?}", e);
    }
}
