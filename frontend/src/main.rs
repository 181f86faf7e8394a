use yew::prelude::*;
use log::info;

mod config;
mod catalog;
mod selection;
mod components {
    pub mod feature_card;
    pub mod footer;
    pub mod header;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use components::{footer::Footer, header::Header};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 font-sans flex flex-col">
            <Header />
            <main class="flex-grow">
                <Landing />
            </main>
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
