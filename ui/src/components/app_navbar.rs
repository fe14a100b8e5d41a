use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Sticky site header: brand, in-page anchor navigation, the language
/// toggle and the free-reading call to action. The mobile menu lives behind
/// a local open/closed signal; the rest is stateless.
///
/// Every label is pulled through `t!` on each render, so flipping the
/// language signal re-renders the whole header in the other locale.
#[component]
pub fn AppNavbar() -> Element {
    let language = i18n::use_language();
    let current = language();
    let mut menu_open = use_signal(|| false);

    let brand_name = t!("brand-name");
    let toggle_label = t!("nav-toggle-label");

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                a { class: "navbar__brand", href: "/",
                    span { class: "navbar__brand-mark", aria_hidden: "true", {t!("brand-mark")} }
                    span { class: "navbar__brand-name", "{brand_name}" }
                }

                // Desktop navigation
                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "/", {t!("nav-home")} }
                    a { class: "navbar__link", href: "#services", {t!("nav-services")} }
                    a { class: "navbar__link", href: "#cases", {t!("nav-cases")} }
                    a { class: "navbar__link", href: "#blog", {t!("nav-blog")} }
                    a { class: "navbar__link", href: "#contact", {t!("nav-contact")} }

                    button {
                        r#type: "button",
                        class: "navbar__lang-toggle",
                        aria_label: "{toggle_label}",
                        onclick: move |_| i18n::toggle_language(language),
                        "{current.native_name()}"
                    }

                    a { class: "navbar__cta", href: "#contact", {t!("nav-cta")} }
                }

                // Mobile menu button
                button {
                    r#type: "button",
                    class: "navbar__menu-button",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                nav { class: "navbar__mobile",
                    a { class: "navbar__link", href: "/", onclick: move |_| menu_open.set(false), {t!("nav-home")} }
                    a { class: "navbar__link", href: "#services", onclick: move |_| menu_open.set(false), {t!("nav-services")} }
                    a { class: "navbar__link", href: "#cases", onclick: move |_| menu_open.set(false), {t!("nav-cases")} }
                    a { class: "navbar__link", href: "#blog", onclick: move |_| menu_open.set(false), {t!("nav-blog")} }
                    a { class: "navbar__link", href: "#contact", onclick: move |_| menu_open.set(false), {t!("nav-contact")} }
                    a { class: "navbar__cta", href: "#contact", onclick: move |_| menu_open.set(false), {t!("nav-cta")} }
                    button {
                        r#type: "button",
                        class: "navbar__lang-toggle",
                        onclick: move |_| i18n::toggle_language(language),
                        {t!("nav-toggle-mobile")}
                    }
                }
            }
        }
    }
}
