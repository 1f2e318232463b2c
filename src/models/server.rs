use serde::{Deserialize, Serialize};

/// Version and identity information reported by the server root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    pub version_major: i32,
    pub version_minor: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub build_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub build_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub internal_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub web_url: String,
}
