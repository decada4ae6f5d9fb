mod core;
mod tunables;

pub use self::core::Config;
pub use tunables::{Tunables, TunablesError};
