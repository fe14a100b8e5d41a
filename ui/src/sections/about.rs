use dioxus::prelude::*;

use crate::catalog;
use crate::i18n;
use crate::t;

const MASTER_PORTRAIT_URL: &str = "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=professional%20chinese%20mystic%20master%2C%20traditional%20chinese%20clothing%2C%20wise%20expression%2C%20soft%20golden%20lighting%2C%20professional%20portrait%2C%20high%20quality%20photography&image_size=square";

/// Master introduction plus the client-testimonial grid.
#[component]
pub fn About() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    let portrait_alt = t!("about-portrait-alt");

    rsx! {
        section { id: "about", class: "about",
            div { class: "section-heading",
                h2 { {t!("about-title")} }
                p { {t!("about-lead")} }
            }

            div { class: "about__master",
                div { class: "about__portrait",
                    img { src: MASTER_PORTRAIT_URL, alt: "{portrait_alt}" }
                }
                div { class: "about__bio",
                    h3 { {t!("about-master-name")} }
                    div { class: "about__badges",
                        span { class: "badge", {t!("about-badge-experience")} }
                        span { class: "badge", {t!("about-badge-lineage")} }
                        span { class: "badge", {t!("about-badge-iching")} }
                        span { class: "badge", {t!("about-badge-fengshui")} }
                    }
                    p { {t!("about-bio-1")} }
                    p { {t!("about-bio-2")} }
                    a { class: "button button--primary", href: "#contact", {t!("about-cta")} }
                }
            }

            div { class: "about__testimonials",
                h3 { {t!("testimonials-title")} }
                div { class: "card-grid",
                    {catalog::TESTIMONIALS.iter().map(|testimonial| {
                        let role = testimonial.role();
                        let quote = testimonial.quote();
                        rsx! {
                            div { key: "{testimonial.key}", class: "card testimonial",
                                div { class: "testimonial__header",
                                    img { class: "testimonial__avatar", src: testimonial.avatar, alt: "{testimonial.name}" }
                                    div {
                                        h4 { "{testimonial.name}" }
                                        p { class: "testimonial__role", "{role}" }
                                    }
                                }
                                div { class: "testimonial__stars", aria_hidden: "true",
                                    {(0..5).map(|n| rsx! { span { key: "{n}", "★" } })}
                                }
                                p { class: "testimonial__quote", "{quote}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
