use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use yew::prelude::*;

use crate::content::SERVICES;

/// Named anchors the page can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Services,
    Work,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Services,
        SectionId::Work,
        SectionId::About,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Services => "services",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == name)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Page-level toggles owned by the landing page root.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub active_service: Option<&'static str>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_service: SERVICES.first().map(|service| service.id),
        }
    }
}

pub enum PageAction {
    OpenMenu,
    CloseMenu,
    /// A scroll to the section succeeded.
    Navigated(SectionId),
    HoverService(&'static str),
    ToggleService(&'static str),
}

impl PageState {
    pub fn apply(&self, action: PageAction) -> PageState {
        match action {
            PageAction::OpenMenu => PageState {
                menu_open: true,
                ..self.clone()
            },
            PageAction::CloseMenu => PageState {
                menu_open: false,
                ..self.clone()
            },
            PageAction::Navigated(section) => {
                debug!("navigated to #{}", section);
                PageState {
                    menu_open: false,
                    ..self.clone()
                }
            }
            PageAction::HoverService(id) => PageState {
                active_service: Some(id),
                ..self.clone()
            },
            PageAction::ToggleService(id) => PageState {
                active_service: if self.active_service == Some(id) {
                    None
                } else {
                    Some(id)
                },
                ..self.clone()
            },
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Once-only visibility latch: fires on the first hidden -> visible edge and
/// ignores everything after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: impl IntoIterator<Item = PageAction>) -> PageState {
        actions
            .into_iter()
            .fold(PageState::default(), |state, action| state.apply(action))
    }

    fn is_active(state: &PageState, id: &str) -> bool {
        state.active_service == Some(id)
    }

    #[test]
    fn initial_state_opens_first_service_and_closes_menu() {
        let state = PageState::default();
        assert!(!state.menu_open);
        assert_eq!(state.active_service, Some("s1"));
        assert!(is_active(&state, "s1"));
        assert!(!is_active(&state, "s2"));
    }

    #[test]
    fn clicking_active_service_collapses_it() {
        let state = reduce_all([PageAction::ToggleService("s1")]);
        assert_eq!(state.active_service, None);
    }

    #[test]
    fn clicking_inactive_service_switches_to_it() {
        let state = reduce_all([PageAction::ToggleService("s3")]);
        assert_eq!(state.active_service, Some("s3"));

        let state = state.apply(PageAction::ToggleService("s2"));
        assert_eq!(state.active_service, Some("s2"));
    }

    #[test]
    fn hover_activates_without_toggling() {
        let state = reduce_all([
            PageAction::ToggleService("s1"),
            PageAction::HoverService("s2"),
            PageAction::HoverService("s2"),
        ]);
        assert_eq!(state.active_service, Some("s2"));
    }

    #[test]
    fn at_most_one_service_active_over_click_sequences() {
        let ids = ["s1", "s2", "s3"];
        let mut state = PageState::default();
        // deterministic walk over a mix of repeated and alternating clicks
        for step in 0..60usize {
            let id = ids[(step * 7 + step / 3) % ids.len()];
            let was_active = is_active(&state, id);
            state = state.apply(PageAction::ToggleService(id));
            if was_active {
                assert_eq!(state.active_service, None);
            } else {
                assert_eq!(state.active_service, Some(id));
            }
            assert!(ids.iter().filter(|id| is_active(&state, id)).count() <= 1);
        }
    }

    #[test]
    fn navigation_closes_open_menu() {
        let state = reduce_all([PageAction::OpenMenu]);
        assert!(state.menu_open);

        let state = state.apply(PageAction::Navigated(SectionId::Work));
        assert!(!state.menu_open);
        assert_eq!(state.active_service, Some("s1"));
    }

    #[test]
    fn menu_actions_leave_services_alone() {
        let state = reduce_all([
            PageAction::ToggleService("s2"),
            PageAction::OpenMenu,
            PageAction::CloseMenu,
        ]);
        assert!(!state.menu_open);
        assert_eq!(state.active_service, Some("s2"));
    }

    #[test]
    fn reduce_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(PageAction::OpenMenu);
        assert!(!Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn section_ids_round_trip_through_anchor_names() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
        assert_eq!("#work".parse::<SectionId>(), Ok(SectionId::Work));
        assert_eq!(
            "pricing".parse::<SectionId>(),
            Err(UnknownSection("pricing".to_string()))
        );
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn latch_fires_only_on_first_visible_edge() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch::default());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert_ne!(latch, RevealLatch::default());
    }
}
