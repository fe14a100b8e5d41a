//! Static content catalogs: services, success cases, testimonials and blog
//! teasers. Records are build-time literals and never mutated; the bilingual
//! text lives in the FTL files, addressed by the per-record `key` stem, so
//! translation completeness is enforced by the i18n tests rather than by
//! hand-maintained string pairs.

use crate::i18n;

/// A bookable service offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Stable identifier, also used as the contact form's option value.
    pub id: &'static str,
    /// FTL key stem: `{key}-title`, `{key}-description`, `{key}-duration`,
    /// `{key}-feature-1..=feature_count`.
    pub key: &'static str,
    pub image: &'static str,
    pub price: &'static str,
    pub feature_count: usize,
    pub popular: bool,
}

impl Service {
    pub fn title(&self) -> String {
        i18n::text(&format!("{}-title", self.key))
    }

    pub fn description(&self) -> String {
        i18n::text(&format!("{}-description", self.key))
    }

    pub fn duration(&self) -> String {
        i18n::text(&format!("{}-duration", self.key))
    }

    pub fn features(&self) -> Vec<String> {
        (1..=self.feature_count)
            .map(|n| i18n::text(&format!("{}-feature-{n}", self.key)))
            .collect()
    }
}

/// A success-case write-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    /// FTL key stem: `{key}-title`, `{key}-description`, `{key}-result`.
    pub key: &'static str,
    pub image: &'static str,
}

impl Case {
    pub fn title(&self) -> String {
        i18n::text(&format!("{}-title", self.key))
    }

    pub fn description(&self) -> String {
        i18n::text(&format!("{}-description", self.key))
    }

    pub fn result(&self) -> String {
        i18n::text(&format!("{}-result", self.key))
    }
}

/// A client testimonial. Names render as-is in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    /// FTL key stem: `{key}-role`, `{key}-quote`.
    pub key: &'static str,
    pub avatar: &'static str,
}

impl Testimonial {
    pub fn role(&self) -> String {
        i18n::text(&format!("{}-role", self.key))
    }

    pub fn quote(&self) -> String {
        i18n::text(&format!("{}-quote", self.key))
    }
}

/// A blog teaser card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    /// FTL key stem: `{key}-title`, `{key}-excerpt`.
    pub key: &'static str,
    pub image: &'static str,
    /// ISO date shown on the card, locale-independent.
    pub date: &'static str,
}

impl BlogPost {
    pub fn title(&self) -> String {
        i18n::text(&format!("{}-title", self.key))
    }

    pub fn excerpt(&self) -> String {
        i18n::text(&format!("{}-excerpt", self.key))
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "fengshui",
        key: "service-fengshui",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=feng%20shui%20consultation%20room%20with%20traditional%20chinese%20elements%2C%20compass%2C%20feng%20shui%20items%2C%20harmonious%20space%2C%20professional%20setting&image_size=square",
        price: "$99",
        feature_count: 4,
        popular: true,
    },
    Service {
        id: "mingli",
        key: "service-mingli",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=chinese%20astrology%20birth%20chart%2C%20eight%20characters%2C%20traditional%20chinese%20calendar%2C%20fortune%20telling%20tools%2C%20mystical%20atmosphere&image_size=square",
        price: "$149",
        feature_count: 5,
        popular: false,
    },
    Service {
        id: "tarot",
        key: "service-tarot",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=tarot%20card%20reading%20session%2C%20tarot%20cards%20spread%20on%20table%2C%20mystical%20lighting%2C%20oriental%20influences%2C%20professional%20setting&image_size=square",
        price: "$79",
        feature_count: 5,
        popular: false,
    },
    Service {
        id: "relationship",
        key: "service-relationship",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=relationship%20compatibility%20analysis%2C%20two%20people%20silhouette%2C%20tarot%20cards%2C%20chinese%20astrology%20elements%2C%20harmonious%20atmosphere&image_size=square",
        price: "$129",
        feature_count: 5,
        popular: true,
    },
    Service {
        id: "crystal",
        key: "service-crystal",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=crystal%20healing%20session%2C%20various%20crystals%20arranged%20on%20table%2C%20soft%20lighting%2C%20peaceful%20atmosphere%2C%20oriental%20elements&image_size=square",
        price: "$89",
        feature_count: 5,
        popular: false,
    },
    Service {
        id: "date",
        key: "service-date",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=chinese%20calendar%20with%20auspicious%20dates%2C%20traditional%20chinese%20elements%2C%20red%20envelopes%2C%20lucky%20symbols%2C%20joyful%20atmosphere&image_size=square",
        price: "$49",
        feature_count: 5,
        popular: false,
    },
];

pub const CASES: &[Case] = &[
    Case {
        key: "case-office",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=modern%20office%20space%20with%20feng%20shui%20elements%2C%20plants%2C%20harmonious%20layout%2C%20professional%20atmosphere&image_size=square",
    },
    Case {
        key: "case-home",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=harmonious%20home%20interior%20with%20feng%20shui%20elements%2C%20plants%2C%20natural%20light%2C%20peaceful%20atmosphere&image_size=square",
    },
    Case {
        key: "case-career",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=person%20analyzing%20career%20options%2C%20professional%20setting%2C%20chinese%20astrology%20elements%2C%20mystical%20atmosphere&image_size=square",
    },
    Case {
        key: "case-tarot",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=tarot%20cards%20spread%20for%20relationship%20advice%2C%20mystical%20lighting%2C%20emotional%20atmosphere%2C%20oriental%20elements&image_size=square",
    },
    Case {
        key: "case-crystal",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=person%20receiving%20crystal%20healing%2C%20crystals%20arranged%20around%2C%20peaceful%20atmosphere%2C%20soft%20lighting&image_size=square",
    },
    Case {
        key: "case-opening",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=new%20business%20opening%20ceremony%2C%20traditional%20chinese%20elements%2C%20red%20decorations%2C%20lucky%20symbols%2C%20joyful%20atmosphere&image_size=square",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "张先生",
        key: "testimonial-zhang",
        avatar: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=asian%20businessman%20portrait%2C%20professional%20headshot%2C%20confident%20expression&image_size=square",
    },
    Testimonial {
        name: "李女士",
        key: "testimonial-li",
        avatar: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=asian%20woman%20portrait%2C%20professional%20headshot%2C%20warm%20smile&image_size=square",
    },
    Testimonial {
        name: "王先生",
        key: "testimonial-wang",
        avatar: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=middle%20aged%20asian%20man%20portrait%2C%20professional%20headshot%2C%20serious%20expression&image_size=square",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        key: "post-wuxing",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=five%20elements%20symbols%2C%20metal%20wood%20water%20fire%20earth%2C%20traditional%20chinese%20art%20style%2C%20balanced%20composition&image_size=landscape_4_3",
        date: "2026-07-18",
    },
    BlogPost {
        key: "post-fengshui",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=bright%20living%20room%20with%20plants%20and%20natural%20light%2C%20feng%20shui%20arrangement%2C%20cozy%20atmosphere&image_size=landscape_4_3",
        date: "2026-06-30",
    },
    BlogPost {
        key: "post-tarot",
        image: "https://trae-api-cn.mchost.guru/api/ide/v1/text_to_image?prompt=single%20tarot%20card%20on%20wooden%20table%2C%20candle%20light%2C%20mysterious%20calm%20atmosphere&image_size=landscape_4_3",
        date: "2026-06-12",
    },
];

/// FTL keys for the free-reading explainer bullet list.
pub const READING_SCOPE_KEYS: &[&str] = &[
    "reading-scope-1",
    "reading-scope-2",
    "reading-scope-3",
    "reading-scope-4",
    "reading-scope-5",
    "reading-scope-6",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{self, Language};

    fn all_catalog_keys() -> Vec<String> {
        let mut keys = Vec::new();
        for service in SERVICES {
            keys.push(format!("{}-title", service.key));
            keys.push(format!("{}-description", service.key));
            keys.push(format!("{}-duration", service.key));
            for n in 1..=service.feature_count {
                keys.push(format!("{}-feature-{n}", service.key));
            }
        }
        for case in CASES {
            keys.push(format!("{}-title", case.key));
            keys.push(format!("{}-description", case.key));
            keys.push(format!("{}-result", case.key));
        }
        for testimonial in TESTIMONIALS {
            keys.push(format!("{}-role", testimonial.key));
            keys.push(format!("{}-quote", testimonial.key));
        }
        for post in BLOG_POSTS {
            keys.push(format!("{}-title", post.key));
            keys.push(format!("{}-excerpt", post.key));
        }
        keys.extend(READING_SCOPE_KEYS.iter().map(|k| k.to_string()));
        keys
    }

    #[test]
    fn service_ids_are_unique() {
        let mut ids: Vec<_> = SERVICES.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SERVICES.len());
    }

    /// An unresolved Fluent message echoes its own id in the output.
    fn resolves(key: &str) -> bool {
        let value = i18n::text(key);
        !value.is_empty() && !value.contains(key)
    }

    #[test]
    fn every_catalog_key_resolves_in_both_languages() {
        let _guard = i18n::TEST_LANG_LOCK.lock().expect("language lock poisoned");
        i18n::init();
        for language in [Language::Zh, Language::En] {
            i18n::set_language(language).expect("select language");
            for key in all_catalog_keys() {
                assert!(resolves(&key), "missing or empty {key} in {}", language.tag());
            }
        }
        i18n::set_language(Language::default()).expect("restore default");
    }

    #[test]
    fn feature_counts_match_embedded_features() {
        let _guard = i18n::TEST_LANG_LOCK.lock().expect("language lock poisoned");
        i18n::init();
        for service in SERVICES {
            assert_eq!(service.features().len(), service.feature_count);
            // One past the declared count must not exist.
            let overflow = format!("{}-feature-{}", service.key, service.feature_count + 1);
            assert!(!resolves(&overflow), "unexpected extra feature {overflow}");
        }
    }
}
