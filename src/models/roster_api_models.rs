use serde::{Deserialize, Serialize};

use super::Participant;

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
}

impl From<SignupRequest> for Participant {
    fn from(req: SignupRequest) -> Self {
        Participant::new(req.name, req.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnregisterQuery {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
