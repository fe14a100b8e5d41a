use dioxus::prelude::*;

use crate::i18n;
use crate::t;

const BACKDROP_URL: &str = "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=traditional%20chinese%20ink%20painting%20style%2C%20mystical%20oriental%20scene%2C%20mountains%20and%20clouds%2C%20incense%20burning%2C%20tarot%20cards%20spread%2C%20soft%20golden%20light%2C%20ethereal%20atmosphere%2C%20high%20quality%20photography&image_size=landscape_16_9";
const PORTRAIT_URL: &str = "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=close%20up%20of%20tarot%20cards%20and%20crystals%20on%20traditional%20chinese%20scroll%20background%2C%20soft%20golden%20lighting%2C%20mystical%20atmosphere%2C%20high%20quality%20photography&image_size=landscape_16_9";

#[component]
pub fn Hero() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    let backdrop_alt = t!("hero-backdrop-alt");
    let image_alt = t!("hero-image-alt");

    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop",
                img { src: BACKDROP_URL, alt: "{backdrop_alt}" }
            }
            div { class: "hero__inner",
                div { class: "hero__copy",
                    span { class: "hero__badge", {t!("hero-badge")} }
                    h1 { class: "hero__title", {t!("hero-title")} }
                    p { class: "hero__lead", {t!("hero-lead")} }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: "#services", {t!("hero-cta-services")} }
                        a { class: "button button--outline", href: "#contact", {t!("hero-cta-contact")} }
                    }
                }
                div { class: "hero__figure",
                    img { src: PORTRAIT_URL, alt: "{image_alt}" }
                }
            }
        }
    }
}
