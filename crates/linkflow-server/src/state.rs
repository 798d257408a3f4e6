//! Shared application state.

use linkflow_auth::{IdentityProvider, ProviderKind};
use linkflow_core::LinkflowConfig;
use linkflow_store::{IdentityRegistry, RosterStore};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: LinkflowConfig,
    pub roster: RosterStore,
    pub identities: IdentityRegistry,
    kakao: IdentityProvider,
    naver: IdentityProvider,
}

impl AppState {
    pub fn new(config: LinkflowConfig) -> Self {
        let roster = RosterStore::open(&config.data_paths.roster_file);
        let identities = IdentityRegistry::open(&config.data_paths.identities_file);

        // One outbound client shared by both providers.
        let client = reqwest::Client::new();
        let kakao = IdentityProvider::new(
            ProviderKind::Kakao,
            config.kakao.clone(),
            &config.session_secret,
            client.clone(),
        );
        let naver = IdentityProvider::new(
            ProviderKind::Naver,
            config.naver.clone(),
            &config.session_secret,
            client,
        );

        Self {
            config,
            roster,
            identities,
            kakao,
            naver,
        }
    }

    pub fn provider(&self, kind: ProviderKind) -> &IdentityProvider {
        match kind {
            ProviderKind::Kakao => &self.kakao,
            ProviderKind::Naver => &self.naver,
        }
    }
}
