//! NFL draft

use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{DraftPick, DraftPosition, DraftTeam};
use crate::query::{Query, QueryParams};

/// Filter for `/draft/picks`.
///
/// `team` is the NFL franchise, `school` the college.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPicksRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub school: Option<String>,
    pub conference: Option<String>,
    pub position: Option<String>,
}

impl QueryParams for DraftPicksRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("school", self.school.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("position", self.position.as_deref());
        q
    }
}

impl CfbdClient {
    /// NFL franchises (`/draft/teams`)
    pub async fn draft_teams(&self) -> Result<Vec<DraftTeam>> {
        self.fetch_list("/draft/teams", &()).await
    }

    /// Draft position names (`/draft/positions`)
    pub async fn draft_positions(&self) -> Result<Vec<DraftPosition>> {
        self.fetch_list("/draft/positions", &()).await
    }

    /// Draft picks (`/draft/picks`)
    pub async fn draft_picks(&self, req: &DraftPicksRequest) -> Result<Vec<DraftPick>> {
        self.fetch_list("/draft/picks", req).await
    }
}
