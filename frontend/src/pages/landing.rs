use log::{debug, error, info, warn};
use yew::prelude::*;

use crate::catalog::{Catalog, ItemId};
use crate::components::feature_card::FeatureCard;
use crate::selection::{Selection, SelectionAction};

fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) if catalog.is_empty() => {
            warn!("Feature catalog is empty");
            catalog
        }
        Ok(catalog) => {
            info!("Loaded {} feature cards", catalog.len());
            catalog
        }
        Err(e) => {
            error!("Failed to load feature catalog: {}", e);
            Catalog::default()
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let catalog = use_memo(|_| load_catalog(), ());
    let selection = use_reducer(Selection::default);

    let on_toggle = {
        let selection = selection.clone();
        let catalog = catalog.clone();
        Callback::from(move |id: ItemId| {
            if let Some(item) = catalog.get(id) {
                debug!("Clicked card \"{}\"", item.title);
            }
            selection.dispatch(SelectionAction::Toggle(id));
        })
    };

    html! {
        <>
            // Hero with the primary call to action
            <section class="bg-gray-100 py-20 sm:py-28 text-center" id="hero">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h1 class="text-4xl sm:text-6xl font-extrabold text-gray-900 leading-tight mb-4">
                        {"Build "}<span class="text-blue-600">{"Optimized"}</span>{" Web Experiences"}
                    </h1>
                    <p class="text-lg sm:text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                        {"Our architecture is designed by industry experts for maximal performance, scalability, and developer experience."}
                    </p>
                    <a id="cta-main" href="#" class="inline-block px-10 py-4 text-lg font-bold text-white bg-green-500 rounded-full shadow-lg hover:bg-green-600 transition-all duration-300 transform hover:scale-105">
                        {"Launch Your Project Now"}
                    </a>
                    <p class="mt-4 text-sm text-gray-500">{"No credit card required. Instant deployment."}</p>
                </div>
            </section>

            <section class="py-20 sm:py-32" id="features">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <span class="text-sm font-semibold uppercase text-blue-600 tracking-wider">{"CORE FEATURES"}</span>
                        <h2 class="mt-2 text-3xl sm:text-4xl font-bold text-gray-900">
                            {"Click on any card to see its active state and CTA update."}
                        </h2>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {
                            for catalog.items().iter().map(|item| html! {
                                <FeatureCard
                                    key={item.id.0}
                                    item={item.clone()}
                                    selected={selection.is_selected(item.id)}
                                    on_toggle={on_toggle.clone()}
                                />
                            })
                        }
                    </div>

                    <div class="mt-20 text-center p-8 bg-blue-50 rounded-xl shadow-inner">
                        <h3 class="text-2xl font-bold text-gray-800 mb-3">
                            {"Ready to ditch the boilerplate?"}
                        </h3>
                        <p class="text-gray-600 mb-6">
                            {"Stop wasting time on setup and start building with a framework that actually scales."}
                        </p>
                        <a href="#" class="inline-block px-8 py-3 text-lg font-semibold text-white bg-indigo-600 rounded-lg hover:bg-indigo-700 transition duration-200 shadow-md">
                            {"See Documentation →"}
                        </a>
                    </div>
                </div>
            </section>
        </>
    }
}
