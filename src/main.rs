use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod state;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Chroma-Tune" }
        document::Meta { name: "theme-color", content: "#22c55e" }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
