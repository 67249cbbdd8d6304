use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::UserInfo;

impl CfbdClient {
    /// Patron level and remaining call quota for the configured key (`/info`).
    ///
    /// Returns `None` when the service answers with `null`.
    pub async fn user_info(&self) -> Result<Option<UserInfo>> {
        self.fetch_one("/info", &()).await
    }
}
