pub mod provision_service;

pub use provision_service::ProvisionService;

use crate::config::Settings;

pub struct AppServices {
    pub provision_service: ProvisionService,
}

impl AppServices {
    pub fn new(settings: &Settings) -> Self {
        Self {
            provision_service: ProvisionService::new(settings.clone()),
        }
    }
}
