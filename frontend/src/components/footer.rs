use chrono::Datelike;
use yew::prelude::*;

use crate::state::SectionId;

const SITEMAP: [(SectionId, &str); 4] = [
    (SectionId::About, "About Agency"),
    (SectionId::Work, "Case Studies"),
    (SectionId::Services, "Services"),
    (SectionId::Contact, "Contact"),
];

const SOCIALS: [&str; 4] = ["Instagram", "LinkedIn", "Behance", "Twitter/X"];

const LEGAL: [&str; 2] = ["Privacy Policy", "Terms of Service"];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Nova Digital. Brasov. All Rights Reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer" role="contentinfo">
            <div class="footer-inner">
                <div class="footer-top">
                    <div>
                        <h2 class="footer-brand">{"NOVA"}<br />{"DIGITAL"}</h2>
                        <div class="footer-icons">
                            <a href="#" aria-label="Visit our website">{"◎"}</a>
                            <a href="#" aria-label="View our analytics">{"↗"}</a>
                            <a href="#" aria-label="Explore our services">{"⚡"}</a>
                        </div>
                    </div>

                    <div class="footer-columns">
                        <div class="footer-column">
                            <span class="footer-column-title">{"Sitemap"}</span>
                            { for SITEMAP.iter().map(|(section, label)| html! {
                                <a href={format!("#{}", section)}>{*label}</a>
                            }) }
                        </div>
                        <div class="footer-column">
                            <span class="footer-column-title">{"Socials"}</span>
                            { for SOCIALS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                        </div>
                        <div class="footer-column">
                            <span class="footer-column-title">{"Legal"}</span>
                            { for LEGAL.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div>{copyright_line(year)}</div>
                    <div class="footer-tagline">{"Designed for Dominance"}</div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Nova Digital. Brasov. All Rights Reserved."
        );
    }

    #[tokio::test]
    async fn sitemap_links_every_section() {
        let html = LocalServerRenderer::<Footer>::new().render().await;
        for section in SectionId::ALL {
            assert!(html.contains(&format!("href=\"#{}\"", section)));
        }
    }
}
