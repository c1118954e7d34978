//! Eager loading of critical resources.

mod critical;

pub use critical::CriticalLoader;
