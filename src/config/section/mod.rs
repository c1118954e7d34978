//! Configuration section definitions.

mod critical;
mod hover;
mod instrument;
mod routes;
mod site;

pub use critical::CriticalConfig;
pub use hover::HoverConfig;
pub use instrument::InstrumentConfig;
pub use routes::RoutesConfig;
pub use site::SiteConfig;
