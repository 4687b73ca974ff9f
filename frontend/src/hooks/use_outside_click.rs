use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Dismisses an open popup on the first click that lands outside of it.
///
/// While `active`, a capturing document-wide click listener inspects every
/// click; the first one whose target matches nothing in `keep_selector`
/// emits `on_outside`. The listener handle lives inside the effect and is
/// removed exactly once when `active` flips back off or the component
/// unmounts, so repeated opens never leak handlers.
#[hook]
pub fn use_outside_click(active: bool, keep_selector: &'static str, on_outside: Callback<()>) {
    use_effect_with((active, on_outside), move |(active, on_outside)| {
        let mut teardown: Option<Box<dyn FnOnce()>> = None;

        if *active {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let on_outside = on_outside.clone();
                let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| element.closest(keep_selector).ok().flatten())
                        .is_some();
                    if !inside {
                        on_outside.emit(());
                    }
                }) as Box<dyn FnMut(_)>);

                // Capture phase, so the click that opened the popup (already
                // past the document by the time this runs) can never hit it
                let _ = document.add_event_listener_with_callback_and_bool(
                    "click",
                    handler.as_ref().unchecked_ref(),
                    true,
                );

                teardown = Some(Box::new(move || {
                    let _ = document.remove_event_listener_with_callback_and_bool(
                        "click",
                        handler.as_ref().unchecked_ref(),
                        true,
                    );
                }));
            }
        }

        move || {
            if let Some(teardown) = teardown {
                teardown();
            }
        }
    });
}
