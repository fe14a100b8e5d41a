use dioxus::prelude::*;

use crate::i18n;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-name", {t!("brand-name")} }
                    p { {t!("footer-blurb")} }
                }
                div { class: "footer__links",
                    h4 { {t!("footer-links-title")} }
                    a { href: "#services", {t!("nav-services")} }
                    a { href: "#cases", {t!("nav-cases")} }
                    a { href: "#blog", {t!("nav-blog")} }
                    a { href: "#contact", {t!("nav-contact")} }
                }
                div { class: "footer__contact",
                    h4 { {t!("footer-contact-title")} }
                    p { "studio@lingxiao-mysticism.com" }
                    p { {t!("footer-hours")} }
                }
            }
            p { class: "footer__copyright", {t!("footer-copyright")} }
        }
    }
}
