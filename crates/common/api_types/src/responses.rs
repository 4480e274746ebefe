use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const JSON_ACCEPT_PRIORITY: &str = "application/json;q=1";

/// A DataResponse data struct that can be used to wrap data type
/// used for json rpc responses
///
/// # Example
/// {
///  "data": json!(T)
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// An explorer response whose `data` may be absent, used by endpoints that report
/// failures in-band through `status`.
///
/// # Example
/// {
///  "status": "OK",
///  "data": json!(T)
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse<T> {
    pub status: String,
    #[serde(default)]
    pub data: Option<T>,
}
