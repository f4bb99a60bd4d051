use gloo_timers::callback::Timeout;
use log::info;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    animated_section::AnimatedSection,
    contact_form::ContactForm,
    faq_item::FaqAccordionItem,
    footer::Footer,
    marquee::Marquee,
    mobile_menu::MobileMenu,
    nav::Nav,
    portfolio::Portfolio,
    services::ServicesAccordion,
};
use crate::content::{FAQS, HEADLINE_STATS, MARQUEE_TEXT, PORTFOLIO, SERVICES};
use crate::navigation;
use crate::state::{PageAction, PageState, SectionId};
use crate::transport::{self, ContactSubmission};

/// Gives the layout a moment to settle before following a deep link.
const DEEP_LINK_DELAY_MS: u32 = 100;

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_reducer(PageState::default);

    // Smooth scroll; the menu only closes when the section actually exists
    let navigate = {
        let dispatcher = page.dispatcher();
        Callback::from(move |section: SectionId| {
            if let Some(action) = navigation::navigate_with(section, navigation::scroll_to_section) {
                dispatcher.dispatch(action);
            }
        })
    };

    // Follow #work style deep links on first mount
    use_effect_with_deps(
        move |_| {
            let timer = navigation::section_from_location().map(|section| {
                info!("Following deep link to #{}", section);
                Timeout::new(DEEP_LINK_DELAY_MS, move || {
                    navigation::scroll_to_section(section);
                })
            });
            move || drop(timer)
        },
        (),
    );

    {
        let dispatcher = page.dispatcher();
        let menu_open = page.menu_open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if menu_open && e.key() == "Escape" {
                dispatcher.dispatch(PageAction::CloseMenu);
            }
        });
    }

    let open_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::OpenMenu))
    };

    let close_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::CloseMenu))
    };

    let hover_service = {
        let dispatcher = page.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(PageAction::HoverService(id)))
    };

    let toggle_service = {
        let dispatcher = page.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(PageAction::ToggleService(id)))
    };

    let submit_contact = Callback::from(|submission: ContactSubmission| {
        transport::submit_contact(submission);
    });

    let hero_cta_click = navigate.reform(|_: MouseEvent| SectionId::Work);
    let hero_cta_key = {
        let navigate = navigate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                navigate.emit(SectionId::Work);
            }
        })
    };

    html! {
        <div class="nova-page">
            <Nav
                menu_open={page.menu_open}
                on_navigate={navigate.clone()}
                on_open_menu={open_menu}
            />

            <MobileMenu
                open={page.menu_open}
                on_close={close_menu}
                on_navigate={navigate.clone()}
            />

            <main id="main-content">
                <section class="hero">
                    <div class="hero-rings" aria-hidden="true">
                        <div class="hero-ring tilted"></div>
                        <div class="hero-ring inner"></div>
                    </div>

                    <div class="hero-meta">
                        <div>
                            {"Brasov, Romania"}<br />
                            {"45.6427° N, 25.5887° E"}<br />
                            {"Est. 2024"}
                        </div>
                        <div class="hero-meta-right">
                            {"Digital Dominion"}<br />
                            {"System Status: Online"}<br />
                            <span class="live-dot">{"● Live"}</span>
                        </div>
                    </div>

                    <div class="hero-headline">
                        <AnimatedSection>
                            <h1>
                                {"Control"}<br />
                                <span class="text-outline">{"Your"}</span><br />
                                {"Marketing"}
                            </h1>
                        </AnimatedSection>
                    </div>

                    <div class="hero-bottom">
                        <p class="hero-lede">
                            {"Marketing should work like a precise mechanism—predictably, efficiently, and without unnecessary costs."}
                        </p>
                        <div
                            class="hero-cta"
                            role="button"
                            tabindex="0"
                            aria-label="Scroll to our work"
                            onclick={hero_cta_click}
                            onkeydown={hero_cta_key}
                        >
                            <span class="hero-cta-arrow">{"→"}</span>
                        </div>
                    </div>

                    <div class="scroll-indicator" aria-hidden="true">
                        <span>{"Scroll"}</span>
                        <div class="scroll-line"></div>
                    </div>
                </section>

                <div class="marquee-strip" aria-hidden="true">
                    <div class="marquee-fade"></div>
                    <Marquee text={MARQUEE_TEXT} rotate={true} class="marquee-framed" />
                </div>

                <section id={SectionId::About.as_str()} class="stats-section">
                    <AnimatedSection>
                        <div class="stats-grid-wrap">
                            <div class="stats-copy">
                                <div class="eyebrow">{"Efficiency x Armor"}</div>
                                <h2>
                                    {"And we don't just talk about results. "}<br />
                                    <span class="accent">{"We deliver them."}</span>
                                </h2>
                                <p>
                                    {"We've stripped away the agency fluff. No account managers who don't know the tech. No outsourcing to hidden teams. Just pure, unadulterated performance."}
                                </p>
                            </div>
                            <div class="stats-grid">
                                { for HEADLINE_STATS.iter().map(|stat| html! {
                                    <div key={stat.label} class="stat-cell">
                                        <span class="stat-value">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </AnimatedSection>
                </section>

                <section id={SectionId::Services.as_str()} class="services-section">
                    <div class="services-grid-bg" aria-hidden="true"></div>
                    <div class="services-inner">
                        <div class="services-header">
                            <h2>{"Our"}<br />{"Services"}</h2>
                            <div class="services-blurb">
                                {"Providing a wide range of digital weaponry to give you a fiery result."}
                            </div>
                        </div>
                        <ServicesAccordion
                            services={SERVICES}
                            active={page.active_service}
                            on_hover={hover_service}
                            on_toggle={toggle_service}
                        />
                    </div>
                </section>

                <section id={SectionId::Work.as_str()} class="work-section">
                    <AnimatedSection>
                        <div class="work-header">
                            <span class="eyebrow-plain">{"Selected Works"}</span>
                            <h2>{"Success Stories"}</h2>
                        </div>
                        <Portfolio items={PORTFOLIO} />
                    </AnimatedSection>
                </section>

                <section class="faq-section" aria-labelledby="faq-heading">
                    <div class="faq-inner">
                        <h2 id="faq-heading">{"Frequently Asked Questions"}</h2>
                        <div class="faq-list">
                            { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                                <FaqAccordionItem key={index} faq={faq.clone()} {index} />
                            }) }
                        </div>
                    </div>
                </section>

                <section id={SectionId::Contact.as_str()} class="contact-section">
                    <div class="contact-glow" aria-hidden="true"></div>
                    <div class="contact-inner">
                        <div class="contact-copy">
                            <div class="badge"><span>{"System Ready"}</span></div>
                            <h2>
                                {"Ready to"}<br />
                                <span class="text-outline-red">{"Upgrade?"}</span>
                            </h2>
                            <p>
                                {"We know how to take your business to the next level. Let's build something bold together."}
                            </p>
                            <div class="contact-details">
                                <div class="contact-status">
                                    <div class="pulse-dot" aria-hidden="true"></div>
                                    <span>{"ACCEPTING NEW CLIENTS FOR Q1 2026"}</span>
                                </div>
                                <div>{"BRASOV, ROMANIA"}</div>
                                <div><a href="mailto:HELLO@NOVADIGITAL.RO">{"HELLO@NOVADIGITAL.RO"}</a></div>
                            </div>
                        </div>
                        <ContactForm on_submit={submit_contact} />
                    </div>
                </section>
            </main>

            <Footer />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                }

                .nova-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #fff;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    overflow-x: hidden;
                }

                .nova-page ::selection {
                    background: #ff2a2a;
                    color: #000;
                }

                .nova-page h1,
                .nova-page h2,
                .nova-page h3 {
                    font-family: 'Anton', 'Impact', sans-serif;
                    text-transform: uppercase;
                    font-weight: 400;
                    margin: 0;
                }

                .nova-page button {
                    cursor: pointer;
                    font: inherit;
                }

                /* nav */
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    mix-blend-mode: difference;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                }

                .nav-content {
                    max-width: 1600px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 1.5rem;
                    letter-spacing: -0.05em;
                }

                .nav-logo-mark {
                    width: 1.5rem;
                    height: 1.5rem;
                    background: #fff;
                    transform: rotate(45deg);
                }

                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    font-family: monospace;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #fff;
                    text-transform: uppercase;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #ff2a2a;
                }

                .nav-cta {
                    background: #fff;
                    color: #000;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    transform: skewX(-10deg);
                    transition: all 0.2s ease;
                }

                .nav-cta span {
                    display: block;
                    transform: skewX(10deg);
                }

                .nav-cta:hover {
                    background: #ff2a2a;
                    color: #fff;
                }

                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    display: block;
                    width: 28px;
                    height: 2px;
                    background: #fff;
                }

                @media (min-width: 768px) {
                    .nav-content {
                        padding: 0 2rem;
                    }

                    .nav-links {
                        display: flex;
                    }

                    .burger-menu {
                        display: none;
                    }
                }

                /* mobile menu */
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: #ff2a2a;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    animation: menu-in 0.4s ease forwards;
                }

                .mobile-menu.exiting {
                    animation: menu-out 0.4s ease forwards;
                    pointer-events: none;
                }

                .mobile-menu-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    background: none;
                    border: none;
                    color: #000;
                    font-size: 3rem;
                }

                .mobile-menu-links {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .mobile-menu-links button {
                    background: none;
                    border: none;
                    color: #000;
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 3rem;
                    text-transform: uppercase;
                    transition: opacity 0.2s ease;
                }

                .mobile-menu-links button:hover {
                    opacity: 0.7;
                }

                @keyframes menu-in {
                    from { opacity: 0; transform: translateX(100%); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes menu-out {
                    from { opacity: 1; transform: translateX(0); }
                    to { opacity: 0; transform: translateX(100%); }
                }

                /* reveal */
                .reveal {
                    opacity: 0;
                    transform: translateY(50px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }

                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                /* hero */
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding: 8rem 1rem 5rem;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    max-width: 1600px;
                    margin: 0 auto;
                    border-left: 1px solid rgba(255, 255, 255, 0.05);
                    border-right: 1px solid rgba(255, 255, 255, 0.05);
                }

                .hero-rings {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 80vw;
                    height: 80vw;
                    transform: translate(-50%, -50%);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 50%;
                    opacity: 0.2;
                    pointer-events: none;
                    animation: spin 20s linear infinite;
                }

                .hero-ring {
                    position: absolute;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .hero-ring.tilted {
                    inset: 0;
                    transform: rotate(45deg);
                }

                .hero-ring.inner {
                    inset: 15%;
                    transform: rotate(-12deg);
                }

                @keyframes spin {
                    from { transform: translate(-50%, -50%) rotate(0deg); }
                    to { transform: translate(-50%, -50%) rotate(360deg); }
                }

                .hero-meta {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 3rem;
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: #9ca3af;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .hero-meta-right {
                    text-align: right;
                }

                .live-dot,
                .accent {
                    color: #ff2a2a;
                }

                .live-dot {
                    animation: pulse 2s ease-in-out infinite;
                }

                .hero-headline {
                    position: relative;
                    z-index: 10;
                }

                .hero-headline h1 {
                    font-size: 12vw;
                    line-height: 0.85;
                    letter-spacing: -0.05em;
                }

                .text-outline {
                    color: transparent;
                    -webkit-text-stroke: 2px #fff;
                    transition: color 0.5s ease;
                }

                .text-outline:hover {
                    color: #ff2a2a;
                }

                .text-outline-red {
                    color: transparent;
                    -webkit-text-stroke: 2px #ff2a2a;
                }

                .hero-bottom {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .hero-lede {
                    max-width: 28rem;
                    color: #9ca3af;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }

                .hero-cta {
                    width: 6rem;
                    height: 6rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    transform: scale(1.1);
                    background: #ff2a2a;
                    border-color: #ff2a2a;
                }

                .hero-cta-arrow {
                    font-size: 2rem;
                    transition: transform 0.3s ease;
                }

                .hero-cta:hover .hero-cta-arrow {
                    transform: rotate(-45deg);
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    opacity: 0.5;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .scroll-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #fff, transparent);
                }

                @media (min-width: 768px) {
                    .hero {
                        padding: 8rem 2rem 5rem;
                    }

                    .hero-rings {
                        width: 600px;
                        height: 600px;
                    }

                    .hero-meta {
                        font-size: 0.875rem;
                    }

                    .hero-bottom {
                        flex-direction: row;
                        align-items: flex-end;
                        justify-content: space-between;
                    }

                    .hero-cta {
                        width: 8rem;
                        height: 8rem;
                    }
                }

                /* marquee strip */
                .marquee-strip {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                }

                .marquee-fade {
                    position: absolute;
                    inset: 0;
                    z-index: 11;
                    pointer-events: none;
                    background: linear-gradient(to right, #0a0a0a, transparent, #0a0a0a);
                }

                .marquee-framed {
                    border-top: 4px solid #000;
                    border-bottom: 4px solid #000;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                /* stats */
                .stats-section,
                .work-section {
                    max-width: 1600px;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    border-left: 1px solid rgba(255, 255, 255, 0.05);
                    border-right: 1px solid rgba(255, 255, 255, 0.05);
                }

                .stats-grid-wrap {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .stats-copy h2 {
                    font-size: 2.25rem;
                    line-height: 1.2;
                    margin: 2rem 0;
                }

                .stats-copy p {
                    color: #9ca3af;
                    max-width: 32rem;
                    font-size: 1.125rem;
                }

                .eyebrow {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid #ff2a2a;
                    color: #ff2a2a;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1px;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .stat-cell {
                    background: #0a0a0a;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .stat-cell:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .stat-value {
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 3rem;
                    margin-bottom: 0.5rem;
                    transition: color 0.2s ease;
                }

                .stat-cell:hover .stat-value {
                    color: #ff2a2a;
                }

                .stat-label {
                    font-family: monospace;
                    font-size: 0.875rem;
                    color: #9ca3af;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                @media (min-width: 1024px) {
                    .stats-grid-wrap {
                        grid-template-columns: 1fr 1fr;
                    }

                    .stats-copy h2 {
                        font-size: 3.75rem;
                    }

                    .stat-cell {
                        padding: 3rem;
                    }

                    .stat-value {
                        font-size: 4.5rem;
                    }
                }

                /* services */
                .services-section {
                    position: relative;
                    overflow: hidden;
                    background: #fff;
                    color: #000;
                    padding: 6rem 1rem;
                }

                .services-grid-bg {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    pointer-events: none;
                    background-image:
                        linear-gradient(to right, #e5e5e5 1px, transparent 1px),
                        linear-gradient(to bottom, #e5e5e5 1px, transparent 1px);
                    background-size: 40px 40px;
                }

                .services-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1600px;
                    margin: 0 auto;
                }

                .services-header {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }

                .services-header h2 {
                    font-size: 3rem;
                    line-height: 0.8;
                    letter-spacing: -0.05em;
                }

                .services-blurb {
                    max-width: 24rem;
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    border-left: 2px solid #ff2a2a;
                    padding-left: 1rem;
                }

                .services-list {
                    display: flex;
                    flex-direction: column;
                    border-top: 2px solid #000;
                }

                .service-row {
                    border-bottom: 2px solid #000;
                    padding: 2rem 0;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .service-row:hover {
                    background: #f3f4f6;
                }

                .service-row.active {
                    background: #000;
                    color: #fff;
                    padding: 3rem 0;
                }

                .service-row-inner {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    padding: 0 1rem;
                }

                .service-number {
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 1.875rem;
                    opacity: 0.5;
                }

                .service-row.active .service-number {
                    color: #ff2a2a;
                    opacity: 1;
                }

                .service-body {
                    flex: 1;
                }

                .service-body h3 {
                    font-size: 1.875rem;
                    margin-bottom: 1rem;
                }

                .service-detail {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: grid-template-rows 0.3s ease, opacity 0.3s ease;
                }

                .service-row.active .service-detail {
                    grid-template-rows: 1fr;
                    opacity: 1;
                }

                .service-detail-inner {
                    overflow: hidden;
                }

                .service-detail p {
                    max-width: 42rem;
                    margin: 0 0 1.5rem;
                    font-size: 1.125rem;
                    color: #d1d5db;
                }

                .service-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .service-tag {
                    padding: 0.25rem 0.75rem;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .service-arrow {
                    display: none;
                    width: 3rem;
                    height: 3rem;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #000;
                    border-radius: 50%;
                    transition: transform 0.3s ease;
                }

                .service-row.active .service-arrow {
                    transform: rotate(90deg);
                    border-color: #ff2a2a;
                    color: #ff2a2a;
                }

                @media (min-width: 768px) {
                    .services-section {
                        padding: 6rem 2rem;
                    }

                    .services-header {
                        flex-direction: row;
                        align-items: flex-end;
                    }

                    .services-header h2 {
                        font-size: 6rem;
                    }

                    .service-row-inner {
                        flex-direction: row;
                        align-items: flex-start;
                    }

                    .service-number,
                    .service-body h3 {
                        font-size: 3rem;
                    }

                    .service-arrow {
                        display: flex;
                    }
                }

                /* portfolio */
                .work-section {
                    padding: 8rem 1rem;
                }

                .work-header {
                    text-align: center;
                    margin-bottom: 5rem;
                }

                .work-header h2 {
                    font-size: 3rem;
                }

                .eyebrow-plain {
                    display: block;
                    margin-bottom: 1rem;
                    color: #ff2a2a;
                    font-family: monospace;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .portfolio-list {
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                }

                .case-study {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                }

                .case-image {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                    cursor: pointer;
                }

                .case-image img {
                    display: block;
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    filter: grayscale(1) contrast(1.25);
                    transition: all 0.7s ease-in-out;
                }

                .case-image:hover img {
                    filter: grayscale(0) contrast(1.25);
                    transform: scale(1.05);
                }

                .case-image-tint {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: rgba(255, 42, 42, 0.2);
                    mix-blend-mode: multiply;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .case-image-cta {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 20;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: all 0.3s ease;
                }

                .case-image:hover .case-image-tint,
                .case-image:hover .case-image-cta {
                    opacity: 1;
                    transform: translateY(0);
                }

                .case-image-cta button {
                    background: #fff;
                    color: #000;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    font-family: 'Anton', 'Impact', sans-serif;
                    text-transform: uppercase;
                }

                .case-text {
                    width: 100%;
                }

                .case-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .case-ordinal {
                    color: #ff2a2a;
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 1.5rem;
                }

                .case-rule {
                    flex: 1;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                }

                .case-category,
                .case-stat-label {
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #6b7280;
                }

                .case-text h3 {
                    font-size: 3rem;
                    line-height: 0.9;
                    margin-bottom: 2rem;
                }

                .case-stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 2rem;
                }

                .case-stat-value {
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 1.875rem;
                }

                @media (min-width: 768px) {
                    .stats-section,
                    .work-section {
                        padding-left: 2rem;
                        padding-right: 2rem;
                    }

                    .work-header h2,
                    .case-text h3 {
                        font-size: 4.5rem;
                    }

                    .case-study {
                        flex-direction: row;
                        gap: 6rem;
                    }

                    .case-study.mirrored {
                        flex-direction: row-reverse;
                    }

                    .case-image {
                        width: 60%;
                    }

                    .case-text {
                        width: 40%;
                    }
                }

                /* faq */
                .faq-section {
                    background: #18181b;
                    padding: 6rem 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .faq-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .faq-inner h2 {
                    font-size: 1.875rem;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-row {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #000;
                    transition: border-color 0.2s ease;
                }

                .faq-row:hover {
                    border-color: rgba(255, 42, 42, 0.5);
                }

                .faq-row-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    text-align: left;
                }

                .faq-row-index {
                    margin-right: 1.5rem;
                    font-family: monospace;
                    color: #ff2a2a;
                }

                .faq-row-text {
                    flex: 1;
                    font-weight: bold;
                    font-size: 1.125rem;
                    text-transform: uppercase;
                }

                .faq-row-icon {
                    flex-shrink: 0;
                    font-size: 1.5rem;
                    color: #6b7280;
                }

                .faq-row.open .faq-row-icon {
                    color: #ff2a2a;
                }

                .faq-row-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: grid-template-rows 0.3s ease, opacity 0.3s ease;
                }

                .faq-row.open .faq-row-answer {
                    grid-template-rows: 1fr;
                    opacity: 1;
                }

                .faq-row-answer-inner {
                    overflow: hidden;
                }

                .faq-row-answer p {
                    margin: 0 1.5rem;
                    padding: 1.5rem 0;
                    color: #9ca3af;
                    line-height: 1.6;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                @media (min-width: 768px) {
                    .faq-section {
                        padding: 6rem 2rem;
                    }

                    .faq-inner h2 {
                        font-size: 3rem;
                    }

                    .faq-row-question {
                        padding: 2rem;
                    }

                    .faq-row-text {
                        font-size: 1.25rem;
                    }

                    .faq-row-answer p {
                        margin: 0 2rem;
                    }
                }

                /* contact */
                .contact-section {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 1rem;
                }

                .contact-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: radial-gradient(circle at center, rgba(255, 42, 42, 0.1), #000 60%);
                }

                .contact-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1600px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                }

                .badge {
                    display: inline-block;
                    background: #ff2a2a;
                    color: #000;
                    padding: 0.25rem 1rem;
                    font-weight: bold;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    transform: skewX(-10deg);
                    margin-bottom: 1rem;
                }

                .badge span {
                    display: block;
                    transform: skewX(10deg);
                }

                .contact-copy h2 {
                    font-size: 3rem;
                    line-height: 0.85;
                    margin: 2rem 0;
                }

                .contact-copy p {
                    max-width: 28rem;
                    color: #9ca3af;
                    font-size: 1.25rem;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 3rem;
                    font-family: monospace;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .contact-details a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .contact-details a:hover {
                    color: #ff2a2a;
                }

                .contact-status {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #ff2a2a;
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                }

                .contact-form-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .contact-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .contact-field label {
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #6b7280;
                }

                .contact-field input,
                .contact-field select,
                .contact-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: #000;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 1rem;
                    color: #fff;
                    font: inherit;
                    transition: border-color 0.2s ease;
                }

                .contact-field input:focus,
                .contact-field select:focus,
                .contact-field textarea:focus {
                    border-color: #ff2a2a;
                    outline: none;
                }

                .contact-field select {
                    appearance: none;
                    cursor: pointer;
                }

                .contact-submit {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: #ff2a2a;
                    color: #000;
                    border: none;
                    font-family: 'Anton', 'Impact', sans-serif;
                    font-size: 1.25rem;
                    text-transform: uppercase;
                    transition: background 0.2s ease;
                }

                .contact-submit:hover {
                    background: #fff;
                }

                .contact-submit-arrow {
                    transition: transform 0.2s ease;
                }

                .contact-submit:hover .contact-submit-arrow {
                    transform: translateX(0.5rem);
                }

                @media (min-width: 768px) {
                    .contact-section {
                        padding: 8rem 2rem;
                    }

                    .contact-copy h2 {
                        font-size: 6rem;
                    }

                    .contact-form {
                        padding: 3rem;
                    }

                    .contact-form-row {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (min-width: 1024px) {
                    .contact-inner {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                /* footer */
                .site-footer {
                    background: #fff;
                    color: #000;
                    padding: 5rem 1rem 2rem;
                }

                .footer-inner {
                    max-width: 1600px;
                    margin: 0 auto;
                }

                .footer-top {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 3rem;
                    margin-bottom: 5rem;
                }

                .footer-brand {
                    font-size: 3rem;
                    letter-spacing: -0.05em;
                    margin-bottom: 2rem !important;
                }

                .footer-icons {
                    display: flex;
                    gap: 1rem;
                }

                .footer-icons a {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #000;
                    color: #000;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .footer-icons a:hover {
                    background: #000;
                    color: #fff;
                }

                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                }

                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .footer-column a {
                    color: #000;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-column a:hover {
                    color: #ff2a2a;
                }

                .footer-column-title {
                    font-weight: bold;
                    border-bottom: 1px solid #000;
                    padding-bottom: 0.5rem;
                    margin-bottom: 0.5rem;
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border-top: 1px solid #000;
                    padding-top: 2rem;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                }

                .footer-tagline {
                    opacity: 0.5;
                }

                @media (min-width: 768px) {
                    .site-footer {
                        padding: 5rem 2rem 2rem;
                    }

                    .footer-top,
                    .footer-bottom {
                        flex-direction: row;
                    }

                    .footer-brand {
                        font-size: 8rem;
                    }

                    .footer-columns {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn initial_render_matches_first_load() {
        let html = LocalServerRenderer::<Landing>::new().render().await;

        for section in SectionId::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", section)),
                "missing #{} anchor",
                section
            );
        }

        // services: only "01" expanded
        assert_eq!(html.matches("class=\"service-row active\"").count(), 1);
        assert!(html.contains("Marketing Strategy"));

        // faq: everything collapsed
        assert_eq!(html.matches("class=\"faq-row\"").count(), FAQS.len());
        assert!(!html.contains("class=\"faq-row open\""));

        // menu closed, overlay not mounted
        assert!(!html.contains("role=\"dialog\""));
        assert!(html.contains("aria-label=\"Open menu\""));
    }
}
