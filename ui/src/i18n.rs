//! Localization support for `lingxiao-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   zh-CN/lingxiao-ui.ftl   (fallback/primary)
//!   en-US/lingxiao-ui.ftl   (secondary)
//! ```
//!
//! The site is strictly bilingual: `Language` is a two-value enum and the
//! navbar exposes a single toggle. The active value lives in a Dioxus
//! `Signal<Language>` provided at the app root; sections read it through
//! [`use_language`] so a toggle re-renders every subscribed section. The
//! signal is the reactive half, [`LOADER`] is the string-lookup half, and
//! [`set_language`] keeps the two in step.
//!
//! Reading the context outside the provider is a programming error and
//! panics immediately rather than silently falling back to the default
//! locale. The selection is never persisted; a reload starts over in Chinese.
use std::sync::Once;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("brand-name")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/zh-CN/{DOMAIN}.ftl`
const DOMAIN: &str = "lingxiao-ui";

/// The two display locales. Chinese is the primary language and the
/// default on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    /// BCP 47 tag backing the corresponding locale folder.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en-US",
        }
    }

    /// The other language of the pair.
    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    /// Native-script name shown on the navbar toggle button.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Language::Zh
        .tag()
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Tests that re-select the loader language must hold this so they do not
/// interleave across test threads.
#[cfg(test)]
pub(crate) static TEST_LANG_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Initialize i18n (idempotent). Loads the bundles for the primary language;
/// browser locale lists are deliberately ignored so every visitor starts in
/// Chinese, matching the site's default.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = set_language(Language::default()) {
            tracing::warn!("i18n: failed selecting default language ({err}); continuing with fallback");
        }
    });
}

/// Switch the loader to `language`. Callers that hold the global language
/// signal update it alongside this so subscribed components re-render.
pub fn set_language(language: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = language
        .tag()
        .parse()
        .expect("valid language identifier for enum variant");
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Dynamic lookup for catalog-driven keys (`fl!` needs literals; catalog
/// records carry key stems assembled at runtime).
pub fn text(key: &str) -> String {
    LOADER.get(key)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Install the global language signal at the app root. Returns the signal so
/// the root can also subscribe if it wants to.
pub fn provide_language() -> Signal<Language> {
    use_context_provider(|| Signal::new(Language::default()))
}

/// Read the global language signal. Panics when called outside a tree that
/// ran [`provide_language`]; wrong-language content rendered from a silent
/// default would be much harder to notice than a crash at integration time.
pub fn use_language() -> Signal<Language> {
    try_use_context::<Signal<Language>>()
        .expect("use_language called outside provider; call i18n::provide_language() at the app root")
}

/// Flip the language pair: re-select the loader bundles, then update the
/// signal so every section re-renders in the other locale.
pub fn toggle_language(mut language: Signal<Language>) {
    let next = language().toggled();
    if set_language(next).is_ok() {
        language.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;
    use super::TEST_LANG_LOCK as LANG_LOCK;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "zh-CN"));
        assert!(langs.iter().any(|l| l == "en-US"));
        assert_eq!(langs.len(), 2);
    }

    #[test]
    fn default_is_primary_chinese() {
        assert_eq!(Language::default(), Language::Zh);
        assert_eq!(Language::default().tag(), "zh-CN");
    }

    #[test]
    fn toggle_parity_over_many_flips() {
        // After N toggles from the default: even N => Zh, odd N => En.
        let mut lang = Language::default();
        for n in 1..=16 {
            lang = lang.toggled();
            if n % 2 == 0 {
                assert_eq!(lang, Language::Zh, "after {n} toggles");
            } else {
                assert_eq!(lang, Language::En, "after {n} toggles");
            }
        }
    }

    #[test]
    fn basic_lookup_works_in_both_languages() {
        let _guard = LANG_LOCK.lock().expect("language lock poisoned");
        init();
        set_language(Language::Zh).expect("select zh-CN");
        assert_eq!(fl!(&*LOADER, "nav-home"), "首页");
        set_language(Language::En).expect("select en-US");
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");
        set_language(Language::default()).expect("restore default");
    }

    #[test]
    fn dynamic_lookup_matches_macro_lookup() {
        let _guard = LANG_LOCK.lock().expect("language lock poisoned");
        init();
        set_language(Language::default()).expect("select default");
        assert_eq!(text("nav-home"), fl!(&*LOADER, "nav-home"));
    }
}
