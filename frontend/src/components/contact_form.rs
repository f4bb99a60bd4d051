use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::ProjectType;
use crate::transport::ContactSubmission;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_submit: Callback<ContactSubmission>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let project_type = use_state(ProjectType::default);
    let message = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let project_type = project_type.clone();
        let message = message.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            // Never let the browser navigate or reload
            e.prevent_default();
            let submission = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                project_type: *project_type,
                message: (*message).clone(),
            };
            info!("Contact form submitted ({})", submission.project_type.label());
            on_submit.emit(submission);
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_project_type = {
        let project_type = project_type.clone();
        Callback::from(move |e: Event| {
            let label = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(kind) = ProjectType::from_label(&label) {
                project_type.set(kind);
            }
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    html! {
        <form class="contact-form" {onsubmit} aria-label="Contact form">
            <div class="contact-form-row">
                <div class="contact-field">
                    <label for="contact-name">{"Full Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="John Doe"
                        value={(*name).clone()}
                        oninput={on_name}
                    />
                </div>
                <div class="contact-field">
                    <label for="contact-email">{"Email Address"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="john@company.com"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>
            </div>

            <div class="contact-field">
                <label for="contact-project">{"Project Type"}</label>
                <select id="contact-project" onchange={on_project_type}>
                    { for ProjectType::ALL.iter().map(|kind| html! {
                        <option
                            key={kind.label()}
                            value={kind.label()}
                            selected={*kind == *project_type}
                        >
                            {kind.label()}
                        </option>
                    }) }
                </select>
            </div>

            <div class="contact-field">
                <label for="contact-message">{"Tell us about your goals"}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    placeholder="We want to dominate the market..."
                    value={(*message).clone()}
                    oninput={on_message}
                />
            </div>

            <button type="submit" class="contact-submit">
                {"Send Transmission"}
                <span class="contact-submit-arrow" aria-hidden="true">{"→"}</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn renders_all_four_fields() {
        let html = LocalServerRenderer::<ContactForm>::with_props(ContactFormProps {
            on_submit: Callback::noop(),
        })
        .render()
        .await;

        for id in ["contact-name", "contact-email", "contact-project", "contact-message"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        for kind in ProjectType::ALL {
            assert!(html.contains(kind.label().replace('&', "&amp;").as_str()));
        }
    }
}
