use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Scroll offset past which the navbar switches to its shaded style
const SCROLL_THRESHOLD: f64 = 50.0;

/// Site navbar with the scroll-shading effect.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let mut teardown: Option<Box<dyn FnOnce()>> = None;

            if let Some(window) = web_sys::window() {
                let on_scroll = {
                    let window = window.clone();
                    let scrolled = scrolled.clone();
                    Closure::wrap(Box::new(move |_: web_sys::Event| {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        scrolled.set(offset > SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut(_)>)
                };

                // Initial check, so a page restored mid-scroll starts shaded
                let offset = window.scroll_y().unwrap_or(0.0);
                scrolled.set(offset > SCROLL_THRESHOLD);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                );

                teardown = Some(Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }));
            }

            move || {
                if let Some(teardown) = teardown {
                    teardown();
                }
            }
        });
    }

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="container">
                <a class="navbar-brand" href="/">{"Lesson Studio"}</a>
            </div>
        </nav>
    }
}
