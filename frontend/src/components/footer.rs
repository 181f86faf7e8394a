use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let notice = format!("© {} {} All Rights Reserved. | ", config::COPYRIGHT_YEAR, config::BRAND_NAME);

    html! {
        <footer class="bg-gray-800 text-white py-8 mt-10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <p class="text-sm text-gray-400">
                    {notice}
                    <a href="#" class="underline hover:text-white">{"Privacy Policy"}</a>
                </p>
            </div>
        </footer>
    }
}
