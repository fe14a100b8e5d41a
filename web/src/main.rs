use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Inline SVG favicon, no asset pipeline needed.
const FAVICON_DATA_URI: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"%238B4513\"%3E%3Cpath d=\"M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8zm-1-13h2v6h-2zm0 8h2v2h-2z\"/%3E%3C/svg%3E";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load the fluent bundles, then install the global language signal so
    // every section (and the navbar) can subscribe to toggles.
    i18n::init();
    i18n::provide_language();

    rsx! {
        document::Title { "灵霄玄学 | LingXiao Mysticism" }
        document::Link { rel: "icon", href: FAVICON_DATA_URI }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web-specific layout: the shared navbar above the routed content.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
