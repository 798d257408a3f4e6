//! Linkflow Core — member record type, configuration, errors, privacy helpers.

pub mod config;
pub mod error;
pub mod member;
pub mod privacy;

pub use config::{DataPaths, LinkflowConfig, ProviderCredentials};
pub use error::{Error, Result};
pub use member::{Member, UNSPECIFIED_CATEGORY};
