use dioxus::prelude::*;

use crate::catalog;
use crate::i18n;
use crate::t;

/// Blog teaser card grid.
#[component]
pub fn Blog() -> Element {
    let language = i18n::use_language();
    let _lang = language();

    rsx! {
        section { id: "blog", class: "blog",
            div { class: "section-heading",
                h2 { {t!("blog-title")} }
                p { {t!("blog-lead")} }
            }

            div { class: "card-grid",
                {catalog::BLOG_POSTS.iter().map(|post| {
                    let title = post.title();
                    let excerpt = post.excerpt();
                    rsx! {
                        article { key: "{post.key}", class: "card blog-card",
                            img { class: "blog-card__image", src: post.image, alt: "{title}" }
                            span { class: "blog-card__date", "{post.date}" }
                            h3 { "{title}" }
                            p { "{excerpt}" }
                            a { class: "blog-card__more", href: "#blog", {t!("blog-read-more")} }
                        }
                    }
                })}
            }
        }
    }
}
