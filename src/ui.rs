use crate::views::ChatView;
use dioxus::prelude::*;

const DUVIDAS_CSS: Asset = asset!("/assets/duvidas.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: DUVIDAS_CSS }
        AppHeader {}
        ChatView {}
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "header-wordmark", "Dúvidas" }
                span { class: "header-subtitle", "assistente acadêmico" }
            }
        }
    }
}
