#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod events;
pub mod passport_service;
pub mod points;
pub mod progress_service;
pub mod reader;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressError, ReadError};
pub use events::{
    HOME_SIGNALS, ProgressEvents, ProgressNotice, ProgressSignal, ProgressSubscription,
};
pub use passport_service::PassportService;
pub use points::parse_points;
pub use progress_service::{HomeProgress, ProgressService};
pub use reader::StorageReader;
