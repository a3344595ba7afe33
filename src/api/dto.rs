use serde::Deserialize;

/// Response for a successful job creation
#[derive(Debug, Deserialize)]
pub struct CreateMashupResponse {
    pub job_id: String,
}

/// Error body returned by the server on a rejected request
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
