use shared::{detail_url, LessonRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LessonPopupProps {
    pub lessons: Vec<LessonRecord>,
    /// Detail URL template ending in "0/"
    pub detail_base: String,
}

/// Detail popup for one day, rendered inside its day cell. At most one of
/// these exists at a time; the calendar holds a single popup slot.
#[function_component(LessonPopup)]
pub fn lesson_popup(props: &LessonPopupProps) -> Html {
    html! {
        <div class="lessons-popup">
            {for props.lessons.iter().map(|lesson| html! {
                <div class="lesson-item">
                    <div class="lesson-time">{&lesson.time}</div>
                    <div class="lesson-title">{&lesson.title}</div>
                    <div class="lesson-location">{&lesson.location}</div>
                    <div class="lesson-instructor">{&lesson.instructor}</div>
                    <div class="lesson-duration">{format!("{} min", lesson.duration)}</div>
                    <div class="lesson-spots">
                        {format!("Available: {}/{}", lesson.available_spots, lesson.capacity)}
                    </div>
                    <div class="lesson-price">{format!("{:.0} Kč", lesson.price)}</div>
                    <a class="btn" href={detail_url(&props.detail_base, lesson.id)}>
                        {"Reserve"}
                    </a>
                </div>
            })}
        </div>
    }
}
