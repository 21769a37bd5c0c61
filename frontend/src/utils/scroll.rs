use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use crate::content::Section;

pub fn smooth_scroll_to(section: Section) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(section.anchor_id()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No element with id '{}' to scroll to", section.anchor_id()),
    }
}
