//! Domain layer: models, errors and the services implementing the store's
//! operation surface.

pub mod admin_service;
pub mod errors;
pub mod models;
pub mod price_service;
pub mod record_service;
pub mod report_service;
pub mod seed_service;

pub use admin_service::AdminService;
pub use errors::StoreError;
pub use price_service::PriceService;
pub use record_service::RecordService;
pub use report_service::ReportService;
pub use seed_service::SeedService;
