use std::sync::Arc;

use crate::api::allow_list::RouteTable;
use crate::api::assets::AssetTree;
use crate::config::Config;
use crate::csp::ContentSecurityPolicy;
use crate::nonce::{NonceSource, OsNonceSource};
use crate::shell::Shell;

/// Read-only state shared by every request. Nothing per-request lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub routes: Arc<RouteTable>,
    pub csp: Arc<ContentSecurityPolicy>,
    pub nonces: Arc<dyn NonceSource>,
    pub shell: Shell,
    pub assets: AssetTree,
}

impl AppState {
    pub fn new(config: Config, assets: AssetTree) -> Self {
        Self::with_nonce_source(config, assets, Arc::new(OsNonceSource))
    }

    pub fn with_nonce_source(
        config: Config,
        assets: AssetTree,
        nonces: Arc<dyn NonceSource>,
    ) -> Self {
        let routes = RouteTable::for_profile(config.profile);
        let csp = ContentSecurityPolicy::new(&config.connect_sources);

        Self {
            config: Arc::new(config),
            routes: Arc::new(routes),
            csp: Arc::new(csp),
            nonces,
            shell: Shell,
            assets,
        }
    }

    /// Replaces the profile-derived allow-list.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = Arc::new(routes);
        self
    }
}
