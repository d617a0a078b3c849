//! Configuration section definitions.
//!
//! | Section   | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `[paths]` | Component, work, static and output locations   |
//! | `[bundle]`| External bundler command, minification         |
//! | `[types]` | Type declaration output                        |
//! | `[watch]` | Watch mode debounce                            |

mod bundle;
mod paths;
mod types;
mod watch;

pub use bundle::BundleConfig;
pub use paths::PathsConfig;
pub use types::TypesConfig;
pub use watch::WatchConfig;
