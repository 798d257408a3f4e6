//! Linkflow Auth — social-login token exchange for Kakao and Naver.
//!
//! Both providers follow the same authorization-code flow and differ only in
//! endpoints, credentials, and profile payload shape, so a single adapter
//! handles both; `ProviderKind` selects the configuration and the profile
//! mapping.

pub mod flow;
pub mod provider;
pub mod session;

pub use flow::{AuthOutcome, IdentityProvider};
pub use provider::{ProviderKind, UserProfile};
pub use session::mint_session_token;
