use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::state::{PageAction, SectionId};

/// Scrolls with `scroll` and reports what the page state should record.
/// A section that could not be resolved yields no action, so an open menu stays open.
pub fn navigate_with(
    section: SectionId,
    scroll: impl FnOnce(SectionId) -> bool,
) -> Option<PageAction> {
    scroll(section).then_some(PageAction::Navigated(section))
}

/// Smooth-scrolls the section into view. Returns false without doing anything
/// when the anchor is not in the document.
pub fn scroll_to_section(section: SectionId) -> bool {
    let element = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.as_str()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("no element for #{}, ignoring", section);
            false
        }
    }
}

/// The section named by the current location hash, if any.
pub fn section_from_location() -> Option<SectionId> {
    let hash = window()?.location().hash().ok()?;
    section_from_hash(&hash)
}

/// Empty and unknown hashes are ignored.
pub fn section_from_hash(hash: &str) -> Option<SectionId> {
    if hash.is_empty() || hash == "#" {
        return None;
    }
    match hash.parse() {
        Ok(section) => Some(section),
        Err(e) => {
            debug!("ignoring location hash: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PageState;

    fn open_menu() -> PageState {
        PageState::default().apply(PageAction::OpenMenu)
    }

    #[test]
    fn missing_section_is_a_silent_no_op() {
        let mut asked_for = None;
        let action = navigate_with(SectionId::Work, |section| {
            asked_for = Some(section);
            false
        });
        assert_eq!(asked_for, Some(SectionId::Work));
        assert!(action.is_none());

        // nothing dispatched, so the overlay stays up
        let state = open_menu();
        let state = action.map_or(state.clone(), |action| state.apply(action));
        assert!(state.menu_open);
    }

    #[test]
    fn found_section_closes_the_menu() {
        let action = navigate_with(SectionId::Work, |_| true);
        assert!(matches!(action, Some(PageAction::Navigated(SectionId::Work))));

        let state = open_menu();
        let state = action.map_or(state.clone(), |action| state.apply(action));
        assert!(!state.menu_open);
    }

    #[test]
    fn known_hashes_resolve_to_sections() {
        assert_eq!(section_from_hash("#work"), Some(SectionId::Work));
        assert_eq!(section_from_hash("#contact"), Some(SectionId::Contact));
    }

    #[test]
    fn empty_and_unknown_hashes_are_ignored() {
        assert_eq!(section_from_hash(""), None);
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash("#pricing"), None);
        assert_eq!(section_from_hash("#main-content"), None);
    }
}
