//! One clickable feature card.
//!
//! The card never owns selection state. It is told whether it is selected and
//! reports clicks upward through `on_toggle`.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::{Item, ItemId};
use crate::components::icons::{Glyph, Icon};

const BOOST_KEYWORD: &str = "Performance";

const CARD_BASE: &str = "cursor-pointer border-2 border-gray-100 rounded-xl p-6 flex flex-col items-start space-y-4";
const CARD_ACTIVE: &str = "ring-4 ring-blue-500 shadow-xl bg-white border-blue-500 transform scale-[1.02] transition-all duration-300";
const CARD_IDLE: &str = "hover:border-blue-300 hover:shadow-lg transition-all duration-300";

const BUTTON_BASE: &str = "w-full text-center py-2 rounded-lg font-medium text-white transition-colors duration-200 mt-4";
const BUTTON_ACTIVE: &str = "bg-blue-600 hover:bg-blue-700";
const BUTTON_IDLE: &str = "bg-gray-700 hover:bg-gray-800";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaLabel {
    BoostExplore,
    LearnMore,
}

impl CtaLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaLabel::BoostExplore => "Boost Explore",
            CtaLabel::LearnMore => "Learn More",
        }
    }
}

/// Call-to-action label for a card title. Plain substring match, so the
/// keyword also hits inside longer words.
pub fn derive_label(title: &str) -> CtaLabel {
    if title.contains(BOOST_KEYWORD) {
        CtaLabel::BoostExplore
    } else {
        CtaLabel::LearnMore
    }
}

/// Everything a card needs to render, derived from the item and whether it
/// is the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPresentation {
    pub emphasized: bool,
    pub cta: CtaLabel,
    pub card_class: String,
    pub icon_class: &'static str,
    pub button_class: String,
    pub aria_label: String,
}

impl CardPresentation {
    pub fn new(item: &Item, selected: bool, cta: CtaLabel) -> Self {
        let (card_state, button_state, icon_class) = if selected {
            (CARD_ACTIVE, BUTTON_ACTIVE, "w-8 h-8 text-blue-600")
        } else {
            (CARD_IDLE, BUTTON_IDLE, "w-8 h-8 text-gray-500")
        };

        Self {
            emphasized: selected,
            cta,
            card_class: format!("{} {}", CARD_BASE, card_state),
            icon_class,
            button_class: format!("{} {}", BUTTON_BASE, button_state),
            aria_label: format!("Activate card: {}", item.title),
        }
    }
}

/// Click handler that reports `id` upward and nothing else.
pub fn on_card_click<E: 'static>(on_toggle: &Callback<ItemId>, id: ItemId) -> Callback<E> {
    on_toggle.reform(move |_: E| id)
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub item: Item,
    pub selected: bool,
    pub on_toggle: Callback<ItemId>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let FeatureCardProps { item, selected, on_toggle } = props;

    // Only recomputed when the title changes.
    let cta = use_memo(|title: &String| derive_label(title), item.title.clone());
    let view = CardPresentation::new(item, *selected, *cta);

    let onclick = on_card_click::<MouseEvent>(on_toggle, item.id);

    html! {
        <div class={view.card_class} {onclick} aria-label={view.aria_label}>
            <Glyph icon={item.icon} class={classes!(view.icon_class)} />
            <h3 class="text-xl font-bold text-gray-800">{&item.title}</h3>
            <p class="text-sm text-gray-600 flex-grow">{&item.description}</p>
            <button class={view.button_class}>
                {view.cta.as_str()}
                {" "}
                {
                    if view.emphasized {
                        html! { <Glyph icon={Icon::Check} class={classes!("inline", "w-4", "h-4", "ml-1")} /> }
                    } else {
                        html! {}
                    }
                }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const CHECK_POINTS: &str = "20 6 9 17 4 12";

    fn performance_props(selected: bool) -> FeatureCardProps {
        FeatureCardProps {
            item: item("Instant Performance"),
            selected,
            on_toggle: Callback::from(|_: ItemId| ()),
        }
    }

    #[tokio::test]
    async fn selected_card_renders_active_styles_and_check() {
        let html = yew::ServerRenderer::<FeatureCard>::with_props(|| performance_props(true))
            .render()
            .await;

        assert!(html.contains("ring-4"));
        assert!(html.contains("bg-blue-600"));
        assert!(html.contains("Boost Explore"));
        assert!(html.contains(CHECK_POINTS));
        assert!(html.find("Boost Explore").unwrap() < html.find(CHECK_POINTS).unwrap());
    }

    #[tokio::test]
    async fn idle_card_renders_without_check() {
        let html = yew::ServerRenderer::<FeatureCard>::with_props(|| performance_props(false))
            .render()
            .await;

        assert!(!html.contains("ring-4"));
        assert!(html.contains("bg-gray-700"));
        assert!(html.contains("Boost Explore"));
        assert!(!html.contains(CHECK_POINTS));
    }

    #[test]
    fn click_reports_the_card_id() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let on_toggle = {
            let clicked = clicked.clone();
            Callback::from(move |id: ItemId| clicked.borrow_mut().push(id))
        };

        let click = on_card_click::<()>(&on_toggle, ItemId(2));
        click.emit(());
        click.emit(());

        assert_eq!(*clicked.borrow(), vec![ItemId(2), ItemId(2)]);
    }

    fn item(title: &str) -> Item {
        Item {
            id: ItemId(1),
            title: title.to_string(),
            description: String::new(),
            icon: Icon::Zap,
        }
    }

    #[test]
    fn performance_titles_get_boost_label() {
        assert_eq!(derive_label("Instant Performance"), CtaLabel::BoostExplore);
        assert_eq!(derive_label("XPerformanceY"), CtaLabel::BoostExplore);
        assert_eq!(derive_label("Instant Performance").as_str(), "Boost Explore");
    }

    #[test]
    fn other_titles_get_learn_more() {
        assert_eq!(derive_label("Configurable Architecture"), CtaLabel::LearnMore);
        assert_eq!(derive_label("Scalable Growth Path"), CtaLabel::LearnMore);
        assert_eq!(derive_label("Scalable Growth Path").as_str(), "Learn More");
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert_eq!(derive_label("instant performance"), CtaLabel::LearnMore);
        assert_eq!(derive_label("PERFORMANCE"), CtaLabel::LearnMore);
    }

    #[test]
    fn label_is_total_and_stable() {
        for title in ["", " ", "Performance", "Perf", "ünïcode Performance", "Learn More"] {
            let first = derive_label(title);
            assert_eq!(first, derive_label(title));
            assert!(["Boost Explore", "Learn More"].contains(&first.as_str()));
        }
    }

    #[test]
    fn selected_card_uses_active_styles() {
        let card = item("Instant Performance");
        let view = CardPresentation::new(&card, true, derive_label(&card.title));

        assert!(view.emphasized);
        assert_eq!(view.cta, CtaLabel::BoostExplore);
        assert!(view.card_class.contains("ring-blue-500"));
        assert!(view.button_class.contains("bg-blue-600"));
        assert_eq!(view.icon_class, "w-8 h-8 text-blue-600");
        assert_eq!(view.aria_label, "Activate card: Instant Performance");
    }

    #[test]
    fn idle_card_uses_hover_styles() {
        let card = item("Scalable Growth Path");
        let view = CardPresentation::new(&card, false, derive_label(&card.title));

        assert!(!view.emphasized);
        assert_eq!(view.cta, CtaLabel::LearnMore);
        assert!(!view.card_class.contains("ring-4"));
        assert!(view.card_class.contains("hover:border-blue-300"));
        assert!(view.button_class.contains("bg-gray-700"));
        assert_eq!(view.icon_class, "w-8 h-8 text-gray-500");
    }
}
