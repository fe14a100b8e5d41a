//! Presentational page sections. Each one subscribes to the global language
//! signal and renders static catalog content; the two form sections also own
//! their local submission state.

mod about;
mod blog;
mod cases;
mod contact;
mod footer;
mod free_reading;
mod hero;
mod services;

pub use about::About;
pub use blog::Blog;
pub use cases::Cases;
pub use contact::Contact;
pub use footer::Footer;
pub use free_reading::FreeReading;
pub use hero::Hero;
pub use services::Services;
