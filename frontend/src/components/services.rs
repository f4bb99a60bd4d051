use yew::prelude::*;
use web_sys::KeyboardEvent;

use crate::content::ServiceItem;

#[derive(Properties, PartialEq)]
pub struct ServicesAccordionProps {
    pub services: &'static [ServiceItem],
    pub active: Option<&'static str>,
    /// Pointer convenience; the click toggle is the authoritative interaction.
    pub on_hover: Callback<&'static str>,
    pub on_toggle: Callback<&'static str>,
}

fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Exclusive accordion: the parent owns which row is open.
#[function_component(ServicesAccordion)]
pub fn services_accordion(props: &ServicesAccordionProps) -> Html {
    html! {
        <div class="services-list">
            { for props.services.iter().map(|service| {
                let id = service.id;
                let is_active = props.active == Some(id);

                let onmouseenter = props.on_hover.reform(move |_: MouseEvent| id);
                let onclick = props.on_toggle.reform(move |_: MouseEvent| id);
                let onkeydown = {
                    let on_toggle = props.on_toggle.clone();
                    Callback::from(move |e: KeyboardEvent| {
                        if is_activation_key(&e.key()) {
                            e.prevent_default();
                            on_toggle.emit(id);
                        }
                    })
                };

                html! {
                    <div
                        key={id}
                        class={classes!("service-row", is_active.then_some("active"))}
                        {onmouseenter}
                        {onclick}
                        {onkeydown}
                        role="button"
                        tabindex="0"
                        aria-expanded={if is_active { "true" } else { "false" }}
                    >
                        <div class="service-row-inner">
                            <span class="service-number">{format!("/{}", service.number)}</span>
                            <div class="service-body">
                                <h3>{service.title}</h3>
                                <div class="service-detail" aria-hidden={if is_active { "false" } else { "true" }}>
                                    <div class="service-detail-inner">
                                        <p>{service.description}</p>
                                        <div class="service-tags">
                                            { for service.tags.iter().map(|tag| html! {
                                                <span key={*tag} class="service-tag">{*tag}</span>
                                            }) }
                                        </div>
                                    </div>
                                </div>
                            </div>
                            <div class="service-arrow" aria-hidden="true">{"→"}</div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;
    use yew::LocalServerRenderer;

    #[test]
    fn enter_and_space_activate_rows() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[tokio::test]
    async fn only_the_active_row_is_expanded() {
        let props = ServicesAccordionProps {
            services: SERVICES,
            active: Some("s2"),
            on_hover: Callback::noop(),
            on_toggle: Callback::noop(),
        };
        let html = LocalServerRenderer::<ServicesAccordion>::with_props(props)
            .render()
            .await;

        assert_eq!(html.matches("class=\"service-row active\"").count(), 1);
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), 2);
        assert!(html.contains("/02"));
    }

    #[tokio::test]
    async fn no_row_expanded_when_none_active() {
        let props = ServicesAccordionProps {
            services: SERVICES,
            active: None,
            on_hover: Callback::noop(),
            on_toggle: Callback::noop(),
        };
        let html = LocalServerRenderer::<ServicesAccordion>::with_props(props)
            .render()
            .await;

        assert!(!html.contains("aria-expanded=\"true\""));
    }
}
