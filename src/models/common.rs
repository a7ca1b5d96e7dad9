use serde::{Deserialize, Serialize};

// Plain `{"message": ...}` body used for acknowledgements and errors
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
