use dioxus::prelude::*;

use crate::catalog;
use crate::i18n;
use crate::t;

/// Success-case card grid with result call-outs.
#[component]
pub fn Cases() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    rsx! {
        section { id: "cases", class: "cases",
            div { class: "section-heading",
                h2 { {t!("cases-title")} }
                p { {t!("cases-lead")} }
            }

            div { class: "card-grid",
                {catalog::CASES.iter().map(|case| {
                    let title = case.title();
                    let description = case.description();
                    let result = case.result();
                    rsx! {
                        div { key: "{case.key}", class: "card case-card",
                            img { class: "case-card__image", src: case.image, alt: "{title}" }
                            h3 { "{title}" }
                            p { "{description}" }
                            div { class: "case-card__result",
                                h4 { {t!("cases-result-label")} }
                                p { "{result}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}
