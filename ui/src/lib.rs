//! Shared UI crate for the LingXiao Mysticism site. All cross-platform
//! logic, content and views live here; platform crates only launch it.

pub mod catalog;
pub mod core;
pub mod forms;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
