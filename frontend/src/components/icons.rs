use serde::Deserialize;
use yew::prelude::*;

/// Inline SVG glyphs, drawn in the current text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Zap,
    Settings,
    TrendingUp,
    Check,
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let shape = match props.icon {
        Icon::Zap => html! {
            <path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z" />
        },
        Icon::Settings => html! {
            <>
                <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.44a2 2 0 0 0-2 2.44v.22a2 2 0 0 0-2 2.44v.44a2 2 0 0 0 2 2.44v.22a2 2 0 0 0 2 2.44v.44a2 2 0 0 0 2 2.44v.22a2 2 0 0 0 2 2.44v.44a2 2 0 0 0 2 2.44v-.22a2 2 0 0 0 2-2.44v-.44a2 2 0 0 0 2-2.44v-.22a2 2 0 0 0 2-2.44v-.44a2 2 0 0 0-2-2.44v-.22a2 2 0 0 0-2-2.44v-.44a2 2 0 0 0-2-2.44z" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
        Icon::TrendingUp => html! {
            <>
                <polyline points="23 6 13.5 15.5 8.5 10.5 1 18" />
                <polyline points="17 6 23 6 23 12" />
            </>
        },
        Icon::Check => html! {
            <polyline points="20 6 9 17 4 12" />
        },
    };

    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {shape}
        </svg>
    }
}
