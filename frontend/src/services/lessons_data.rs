use anyhow::{anyhow, Context, Result};
use shared::LessonIndex;

/// Id of the inert JSON script element the host page embeds
pub const DATA_ELEMENT_ID: &str = "lessons-data";

/// Reads the multi-month lesson payload embedded by the host page.
///
/// The widget never fetches data over the network; whatever months the
/// payload covers is all the calendar will ever show.
pub fn load_embedded_index() -> Result<LessonIndex> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("document is not available"))?;
    let element = document
        .get_element_by_id(DATA_ELEMENT_ID)
        .ok_or_else(|| anyhow!("missing #{} data element", DATA_ELEMENT_ID))?;
    let raw = element.text_content().unwrap_or_default();
    serde_json::from_str(&raw).context("malformed lessons data payload")
}
