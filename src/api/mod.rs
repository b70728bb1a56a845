//! HTTP access to the classification service.
//!
//! The service exposes three endpoints (`/healthz`, `/model`, `/predict_url`)
//! that all answer with JSON of an unspecified shape. [`ApiClient`] performs
//! the calls, [`ResponseBody`] classifies what comes back.

mod body;
mod client;
mod error;

pub use body::{extract_summary, ResponseBody};
pub use client::{ApiClient, HEALTH_PATH, MODEL_PATH, PREDICT_URL_PATH};
pub use error::ApiError;
