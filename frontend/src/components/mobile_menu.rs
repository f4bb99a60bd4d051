use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::SectionId;

/// Length of the slide-out, matches the `menu-out` keyframes.
pub const EXIT_MS: u32 = 400;

const MENU_LINKS: [(SectionId, &str); 4] = [
    (SectionId::Services, "Services"),
    (SectionId::Work, "Work"),
    (SectionId::About, "Agency"),
    (SectionId::Contact, "Contact"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuPhase {
    Hidden,
    Open,
    Exiting,
}

impl MenuPhase {
    /// `mounted` lags `open` by the exit transition so the overlay can slide out.
    pub fn from_flags(open: bool, mounted: bool) -> MenuPhase {
        match (open, mounted) {
            (true, _) => MenuPhase::Open,
            (false, true) => MenuPhase::Exiting,
            (false, false) => MenuPhase::Hidden,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let mounted = use_state(|| props.open);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |open| {
                let mut exit_timer = None;
                if *open {
                    mounted.set(true);
                } else if *mounted {
                    let mounted = mounted.clone();
                    exit_timer = Some(Timeout::new(EXIT_MS, move || mounted.set(false)));
                }
                // Reopening before the timer fires cancels the pending unmount
                move || drop(exit_timer)
            },
            props.open,
        );
    }

    let phase = MenuPhase::from_flags(props.open, *mounted);
    if phase == MenuPhase::Hidden {
        return html! {};
    }

    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            class={classes!("mobile-menu", (phase == MenuPhase::Exiting).then_some("exiting"))}
            role="dialog"
            aria-label="Mobile navigation menu"
        >
            <button class="mobile-menu-close" onclick={close} aria-label="Close menu">{"✕"}</button>
            <div class="mobile-menu-links">
                { for MENU_LINKS.iter().map(|(section, label)| {
                    let section = *section;
                    html! {
                        <button onclick={props.on_navigate.reform(move |_: MouseEvent| section)}>
                            {*label}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_lingers_while_exiting() {
        assert_eq!(MenuPhase::from_flags(false, false), MenuPhase::Hidden);
        assert_eq!(MenuPhase::from_flags(true, false), MenuPhase::Open);
        assert_eq!(MenuPhase::from_flags(true, true), MenuPhase::Open);
        assert_eq!(MenuPhase::from_flags(false, true), MenuPhase::Exiting);
    }
}
