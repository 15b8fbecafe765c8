pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

use std::sync::Arc;

use crate::database::opening_repository::OpeningRepository;
use crate::services::opening_service::OpeningService;

#[derive(Clone)]
pub struct AppState {
    pub opening_service: OpeningService,
}

impl AppState {
    pub fn new(repo: Arc<dyn OpeningRepository>) -> Self {
        Self {
            opening_service: OpeningService::new(repo),
        }
    }
}
