use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{Calendar, Navbar};
use services::lessons_data;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    // The host page embeds the full multi-month payload in an inert script
    // element; reading it is synchronous, so there is no loading state.
    let index = use_memo((), |_| {
        lessons_data::load_embedded_index().map_err(|error| error.to_string())
    });

    match &*index {
        Ok(index) => {
            Logger::info_with_component(
                "app",
                &format!("lessons data loaded, {} month(s) indexed", index.all_months.len()),
            );
            html! {
                <>
                    <Navbar />
                    <main class="container">
                        <Calendar index={index.clone()} />
                    </main>
                </>
            }
        }
        Err(error) => {
            Logger::error_with_component("app", &format!("failed to read lessons data: {}", error));
            html! {
                <>
                    <Navbar />
                    <main class="container">
                        <div class="calendar-error">
                            {"The lesson calendar could not be loaded."}
                        </div>
                    </main>
                </>
            }
        }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
