use actix_web::web;

use crate::api::ActivitiesApi;
use crate::config::{Locale, PortalConfig};

/// Shared by all workers: the upstream client and the page locale.
#[derive(Clone)]
pub struct PortalState {
    pub api: ActivitiesApi,
    pub locale: Locale,
}

impl PortalState {
    pub fn new(api: ActivitiesApi, locale: Locale) -> Self {
        Self { api, locale }
    }

    pub fn from_config(config: &PortalConfig) -> Result<Self, reqwest::Error> {
        let api = ActivitiesApi::new(&config.api_base_url, config.connect_timeout)?;
        Ok(Self::new(api, config.locale))
    }

    pub fn into_data(self) -> web::Data<Self> {
        web::Data::new(self)
    }
}
