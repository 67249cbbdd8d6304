use serde::{Deserialize, Serialize};

/// Account usage for the current API key, from `/info`.
///
/// The API answers `null` for keys it does not recognise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInfo {
    pub patron_level: i32,
    pub remaining_calls: i64,
}
