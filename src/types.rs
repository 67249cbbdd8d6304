//! Common types used throughout the client
//!
//! Filter enums shared by several endpoints, with their API wire names.

use serde::{Deserialize, Serialize};

// ============================================================================
// Season Type
// ============================================================================

/// Portion of a season a game belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonType {
    #[default]
    Regular,
    Postseason,
    /// Regular season and postseason together
    Both,
    Allstar,
    SpringRegular,
    SpringPostseason,
}

impl SeasonType {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Regular => "regular",
            SeasonType::Postseason => "postseason",
            SeasonType::Both => "both",
            SeasonType::Allstar => "allstar",
            SeasonType::SpringRegular => "spring_regular",
            SeasonType::SpringPostseason => "spring_postseason",
        }
    }
}

impl std::str::FromStr for SeasonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(SeasonType::Regular),
            "postseason" => Ok(SeasonType::Postseason),
            "both" => Ok(SeasonType::Both),
            "allstar" => Ok(SeasonType::Allstar),
            "spring_regular" => Ok(SeasonType::SpringRegular),
            "spring_postseason" => Ok(SeasonType::SpringPostseason),
            other => Err(format!("unknown season type: {other}")),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// NCAA division classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Fbs,
    Fcs,
    Ii,
    Iii,
}

impl Classification {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Fbs => "fbs",
            Classification::Fcs => "fcs",
            Classification::Ii => "ii",
            Classification::Iii => "iii",
        }
    }
}

// ============================================================================
// Media Type
// ============================================================================

/// Broadcast outlet type for game media listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Tv,
    Radio,
    Web,
    Ppv,
    Mobile,
}

impl MediaType {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Tv => "tv",
            MediaType::Radio => "radio",
            MediaType::Web => "web",
            MediaType::Ppv => "ppv",
            MediaType::Mobile => "mobile",
        }
    }
}

// ============================================================================
// Home / Away
// ============================================================================

/// Which side of a game a team played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeAway::Home => "home",
            HomeAway::Away => "away",
        }
    }
}
