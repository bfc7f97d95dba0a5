//! Smooth in-page navigation

use crate::core::Section;

/// Scroll the section into view. Missing elements are ignored.
#[cfg(feature = "hydrate")]
pub fn scroll_to_section(section: Section) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to_section(_section: Section) {}
