pub(crate) mod config;
pub use config::{Config, Tunables, TunablesError};

pub(crate) mod deprecation;
pub use deprecation::{DeprecatedIcon, deprecation_for};

pub(crate) mod icon;
pub use icon::{
    BUILTIN_PREFIXES, IconName, IconNameError, MAX_ICON_NAME_LENGTH, is_builtin_prefix, split_icon,
};

pub(crate) mod manifest;
pub use manifest::{ChunkManifest, ChunkPart};

pub(crate) mod record;
pub use record::{IconRecord, StoredIcon};
