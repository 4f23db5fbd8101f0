//! WebAssembly bindings for the wishlist filter
//!
//! The embedding loader calls [`init`] once the wishlist page has rendered.
//! Everything past that point is event-driven: control changes call into the
//! shared [`FilterController`], which re-evaluates item visibility.

mod controls;
mod dom;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wf_core::FilterController;

use controls::Controls;
use dom::DomEntry;
use timer::{SharedCallback, WindowScheduler};

type App = Rc<RefCell<FilterController<DomEntry, WindowScheduler>>>;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Scan the wishlist, install the filter controls, and wire up events.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    if is_initialized() {
        return Err(JsValue::from_str(
            "Already initialized. Reload the page to reinitialize.",
        ));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The debounce closure needs the controller, which needs the scheduler;
    // the shared slot is filled once both exist.
    let callback: SharedCallback = Rc::new(RefCell::new(None));
    let scheduler = WindowScheduler::new(window, callback.clone());
    let app: App = Rc::new(RefCell::new(FilterController::new(scheduler)));

    {
        let app = app.clone();
        callback
            .borrow_mut()
            .replace(Closure::wrap(Box::new(move || {
                app.borrow_mut().debounce_elapsed();
            }) as Box<dyn FnMut()>));
    }

    let widgets = controls::install(&document)?;
    wire_events(&widgets, &app)?;

    // Inputs stay disabled until the scan has produced the collections.
    widgets.set_enabled(false);
    let entries = dom::scan_entries(&document)?;
    app.borrow_mut().scan(entries);
    widgets.set_enabled(true);

    APP.with(|slot| slot.borrow_mut().replace(app));
    Ok(())
}

#[wasm_bindgen]
pub fn is_initialized() -> bool {
    APP.with(|slot| slot.borrow().is_some())
}

/// Scan statistics for the embedding loader's diagnostics.
#[wasm_bindgen]
pub fn get_scan_info() -> JsValue {
    let result = js_sys::Object::new();
    APP.with(|slot| {
        if let Some(app) = slot.borrow().as_ref() {
            let app = app.borrow();
            let items = app.items();
            let _ = js_sys::Reflect::set(&result, &"initialized".into(), &JsValue::from(true));
            let _ = js_sys::Reflect::set(
                &result,
                &"unpriced".into(),
                &JsValue::from(items.unpriced.len() as u32),
            );
            let _ = js_sys::Reflect::set(
                &result,
                &"normallyPriced".into(),
                &JsValue::from(items.normally_priced.len() as u32),
            );
            let _ = js_sys::Reflect::set(
                &result,
                &"discounted".into(),
                &JsValue::from(items.discounted.len() as u32),
            );
        } else {
            let _ = js_sys::Reflect::set(&result, &"initialized".into(), &JsValue::from(false));
        }
    });
    result.into()
}

fn wire_events(widgets: &Controls, app: &App) -> Result<(), JsValue> {
    {
        let app = app.clone();
        let input = widgets.price_input.clone();
        let closure = Closure::wrap(Box::new(move || {
            app.borrow_mut().maximum_price_changed(&input.value());
        }) as Box<dyn FnMut()>);
        widgets
            .price_input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        // Listener lives for the whole page session.
        closure.forget();
    }

    {
        let app = app.clone();
        let input = widgets.percentage_input.clone();
        let closure = Closure::wrap(Box::new(move || {
            app.borrow_mut().minimum_discount_changed(&input.value());
        }) as Box<dyn FnMut()>);
        widgets
            .percentage_input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let checkbox = widgets.discounted_only_checkbox.clone();
        let closure = Closure::wrap(Box::new(move || {
            app.borrow_mut().discounted_only_changed(checkbox.checked());
        }) as Box<dyn FnMut()>);
        widgets
            .discounted_only_checkbox
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
