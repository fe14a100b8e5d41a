use dioxus::prelude::*;

use crate::catalog;
use crate::i18n;
use crate::t;

const TEASER_IMAGE_URL: &str = "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=chinese%20fortune%20telling%20tools%2C%20traditional%20elements%2C%20mystical%20atmosphere%2C%20free%20reading%20concept&image_size=square";

/// Service catalog grid plus the free-reading teaser panel.
#[component]
pub fn Services() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    let teaser_alt = t!("teaser-image-alt");

    rsx! {
        section { id: "services", class: "services",
            div { class: "section-heading",
                span { class: "section-heading__badge", {t!("services-badge")} }
                h2 { {t!("services-title")} }
                p { {t!("services-lead")} }
            }

            div { class: "card-grid",
                {catalog::SERVICES.iter().map(|service| {
                    let title = service.title();
                    let description = service.description();
                    let duration = service.duration();
                    rsx! {
                        div {
                            key: "{service.id}",
                            class: "card service-card",
                            class: if service.popular { "service-card--popular" },
                            if service.popular {
                                div { class: "service-card__ribbon", {t!("services-popular")} }
                            }
                            img { class: "service-card__image", src: service.image, alt: "{title}" }
                            h3 { "{title}" }
                            p { class: "service-card__description", "{description}" }
                            div { class: "service-card__features",
                                h4 { {t!("services-includes")} }
                                ul {
                                    {service.features().into_iter().enumerate().map(|(n, feature)| rsx! {
                                        li { key: "{n}", "{feature}" }
                                    })}
                                }
                            }
                            div { class: "service-card__meta",
                                span { {t!("services-duration-label")} }
                                span { class: "service-card__duration", "{duration}" }
                            }
                            div { class: "service-card__meta",
                                span { {t!("services-price-label")} }
                                span { class: "service-card__price", "{service.price}" }
                            }
                            a { class: "button button--primary button--block", href: "#contact", {t!("services-book")} }
                        }
                    }
                })}
            }

            // Free reading teaser, linking down to the full lead-capture form.
            div { class: "services__teaser",
                div { class: "services__teaser-copy",
                    h3 { {t!("teaser-title")} }
                    p { {t!("teaser-lead")} }
                    a { class: "button button--secondary", href: "#reading", {t!("teaser-cta")} }
                }
                div { class: "services__teaser-figure",
                    img { src: TEASER_IMAGE_URL, alt: "{teaser_alt}" }
                }
            }
        }
    }
}
