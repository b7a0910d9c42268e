use std::sync::Arc;

use crate::client::SpendingClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::Settings;
use crate::psc::CategoryNameTable;
use crate::store::{self, KeyValueStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: SpendingClient,
    pub settings: Arc<dyn KeyValueStore>,
    pub psc_names: Arc<CategoryNameTable>,
}

impl AppState {
    pub fn new(
        config: Config,
        client: SpendingClient,
        settings: Arc<dyn KeyValueStore>,
        psc_names: CategoryNameTable,
    ) -> Self {
        Self {
            config: Arc::new(config),
            client,
            settings,
            psc_names: Arc::new(psc_names),
        }
    }

    pub fn load_settings(&self) -> AppResult<Settings> {
        store::load_settings(self.settings.as_ref())
    }
}
