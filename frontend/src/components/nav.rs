use yew::prelude::*;

use crate::state::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_navigate: Callback<SectionId>,
    pub on_open_menu: Callback<()>,
}

/// Desktop link order; the last entry is rendered as the call-to-action.
const DESKTOP_LINKS: [(SectionId, &str); 4] = [
    (SectionId::Services, "Services"),
    (SectionId::Work, "Work"),
    (SectionId::About, "Agency"),
    (SectionId::Contact, "Start Project"),
];

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        menu_open,
        on_navigate,
        on_open_menu,
    } = props;

    let open_menu = {
        let on_open_menu = on_open_menu.clone();
        Callback::from(move |_: MouseEvent| on_open_menu.emit(()))
    };

    html! {
        <nav class="top-nav" role="navigation" aria-label="Main navigation">
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="nav-logo-mark"></div>
                    {"NOVA DIGITAL"}
                </div>

                <div class="nav-links">
                    { for DESKTOP_LINKS.iter().map(|(section, label)| {
                        let section = *section;
                        let onclick = on_navigate.reform(move |_: MouseEvent| section);
                        if section == SectionId::Contact {
                            html! {
                                <button class="nav-cta" {onclick}>
                                    <span>{*label}</span>
                                </button>
                            }
                        } else {
                            html! {
                                <button class="nav-link" {onclick}>{*label}</button>
                            }
                        }
                    }) }
                </div>

                <button
                    class="burger-menu"
                    onclick={open_menu}
                    aria-label="Open menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
