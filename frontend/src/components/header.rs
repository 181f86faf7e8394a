use yew::prelude::*;

use crate::config;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="sticky top-0 z-10 bg-white shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex justify-between items-center">
                <div class="text-2xl font-extrabold text-gray-900">
                    <span aria-label={config::BRAND_LABEL}>{config::BRAND_NAME}</span>
                </div>
                <nav class="hidden md:flex space-x-6 text-gray-600 font-medium">
                    <a href="#features" class="hover:text-blue-600 transition duration-150">{"Features"}</a>
                    <a href="#cta-main" class="hover:text-blue-600 transition duration-150">{"Pricing"}</a>
                    <a href="#cta-main" class="hover:text-blue-600 transition duration-150">{"Contact"}</a>
                </nav>
                <a href="#cta-main" class="px-4 py-2 bg-blue-600 text-white font-medium rounded-lg hover:bg-blue-700 transition duration-200 shadow-md">
                    {"Get Started"}
                </a>
            </div>
        </header>
    }
}
