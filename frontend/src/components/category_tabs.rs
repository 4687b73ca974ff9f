use shared::{CategoryFilter, CategoryTab};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub categories: Vec<CategoryTab>,
    pub active: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

/// Filter bar above the grid: an "all" tab plus one tab per lesson
/// category. Exactly one tab carries the active marker at a time.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    let tab = |slug: &str, name: &str| -> Html {
        let is_active = props.active.slug() == slug;
        let onclick = {
            let slug = slug.to_string();
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| {
                on_select.emit(CategoryFilter::from_slug(&slug));
            })
        };
        html! {
            <button
                class={classes!("category-tab", is_active.then_some("active"))}
                data-category={slug.to_string()}
                {onclick}
            >
                {name}
            </button>
        }
    };

    html! {
        <div class="category-tabs">
            {tab("all", "All lessons")}
            {for props.categories.iter().map(|category| tab(&category.slug, &category.name))}
        </div>
    }
}
