pub mod activity;
pub mod roster_api_models;

pub use activity::{Activity, Catalog, Participant};
pub use roster_api_models::{ErrorDetail, MessageResponse, SignupRequest, UnregisterQuery};
