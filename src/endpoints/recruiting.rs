//! Recruiting

use super::require_year_or_team;
use crate::client::CfbdClient;
use crate::error::Result;
use crate::models::{AggregatedTeamRecruiting, Recruit, TeamRecruitingRanking};
use crate::query::{Query, QueryParams};

/// Filter for `/recruiting/players`; needs `year` or `team`.
///
/// `recruit_type` is one of `HighSchool`, `JUCO` or `PrepSchool`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruitingPlayersRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub state: Option<String>,
    pub recruit_type: Option<String>,
}

impl QueryParams for RecruitingPlayersRequest {
    fn validate(&self, endpoint: &'static str) -> Result<()> {
        require_year_or_team(endpoint, self.year, self.team.as_deref())
    }

    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref())
            .push_opt("position", self.position.as_deref())
            .push_opt("state", self.state.as_deref())
            .push_opt("classification", self.recruit_type.as_deref());
        q
    }
}

/// Filter for `/recruiting/teams`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruitingTeamsRequest {
    pub year: Option<i32>,
    pub team: Option<String>,
}

impl QueryParams for RecruitingTeamsRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("year", self.year)
            .push_opt("team", self.team.as_deref());
        q
    }
}

/// Filter for `/recruiting/groups`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruitingGroupsRequest {
    pub team: Option<String>,
    pub conference: Option<String>,
    pub recruit_type: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl QueryParams for RecruitingGroupsRequest {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_opt("team", self.team.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("recruitType", self.recruit_type.as_deref())
            .push_opt("startYear", self.start_year)
            .push_opt("endYear", self.end_year);
        q
    }
}

impl CfbdClient {
    /// Individual recruits (`/recruiting/players`)
    pub async fn recruits(&self, req: &RecruitingPlayersRequest) -> Result<Vec<Recruit>> {
        self.fetch_list("/recruiting/players", req).await
    }

    /// Team class rankings (`/recruiting/teams`)
    pub async fn recruiting_rankings(
        &self,
        req: &RecruitingTeamsRequest,
    ) -> Result<Vec<TeamRecruitingRanking>> {
        self.fetch_list("/recruiting/teams", req).await
    }

    /// Position group aggregates (`/recruiting/groups`)
    pub async fn recruiting_groups(
        &self,
        req: &RecruitingGroupsRequest,
    ) -> Result<Vec<AggregatedTeamRecruiting>> {
        self.fetch_list("/recruiting/groups", req).await
    }
}
