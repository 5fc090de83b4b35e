use std::env;

use focsit_content::API_BASE_URL_ENV_VAR;

use crate::config::{Api, Settings};

pub const ENV_API_BASE_URL: &str = API_BASE_URL_ENV_VAR;
pub const ENV_PAGE_URL: &str = "FOCSIT_PAGE_URL";

impl Settings {
    pub fn from_env(mut self) -> Self {
        self.api = self.api.from_env();
        self
    }
}

impl Api {
    pub fn from_env(mut self) -> Self {
        if let Ok(base_url) = env::var(ENV_API_BASE_URL) {
            self.base_url = Some(base_url);
        }

        if let Ok(page_url) = env::var(ENV_PAGE_URL) {
            self.page_url = Some(page_url);
        }

        self
    }
}
