pub mod fetch;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod types;

pub use registry::{CustomIcon, IconSet, IconSetRegistry};
pub use resolver::{IconResolver, ResolvedIcon};
pub use types::{Config, IconName, IconRecord};
