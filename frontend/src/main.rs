use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod navigation;
mod state;
mod transport;
mod components {
    pub mod animated_section;
    pub mod contact_form;
    pub mod faq_item;
    pub mod footer;
    pub mod marquee;
    pub mod mobile_menu;
    pub mod nav;
    pub mod portfolio;
    pub mod services;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
