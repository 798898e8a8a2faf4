use serde::{Deserialize, Serialize};

/// Confirmation and diagnostic strings are in the language of the phone
/// client that consumes them.
pub(crate) const MSG_COPIED: &str = "已复制到剪贴板";
pub(crate) const MSG_MISSING_FIELD: &str = "缺少latex参数";
pub(crate) const MSG_NOT_FOUND: &str = "路径不存在";
pub(crate) const MSG_CLIPBOARD_UNAVAILABLE: &str = "无法访问剪贴板";

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct CopyRequest {
    /// `None` when the field is absent from the body; the handler turns
    /// that into a 400 rather than letting deserialization reject.
    pub(crate) latex: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    Success,
    Error,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct StatusResponse {
    pub(crate) status: Status,
    pub(crate) message: String,
}

impl StatusResponse {
    pub(crate) fn success(message: &str) -> Self {
        StatusResponse {
            status: Status::Success,
            message: message.to_string(),
        }
    }

    pub(crate) fn error(message: &str) -> Self {
        StatusResponse {
            status: Status::Error,
            message: message.to_string(),
        }
    }
}
