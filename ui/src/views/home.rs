use dioxus::prelude::*;

use crate::sections::{About, Blog, Cases, Contact, Footer, FreeReading, Hero, Services};

/// The single page: every section stacked in fixed order.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page-home",
            Hero {}
            About {}
            Services {}
            FreeReading {}
            Cases {}
            Blog {}
            Contact {}
        }
        Footer {}
    }
}
