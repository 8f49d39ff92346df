use serde::{Deserialize, Serialize};

/// One physical record of the TV Time `seen_episode.csv` export, all text.
///
/// Fields are declared in column order; the source maps records onto them
/// by position.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub created_at: String,
    pub tv_show_name: String,
    pub episode_season_number: String,
    pub episode_number: String,
    pub episode_id: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRecord {
    pub created_at: String,
    pub show_name: String,
    pub season_number: i64,
    pub episode_number: i64,
    pub episode_id: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Episode {
    pub created_at: String,
    pub number: i64,
    pub id: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Season {
    pub number: i64,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Show {
    pub name: String,
    pub seasons: Vec<Season>,
}

impl From<EpisodeRecord> for Episode {
    fn from(record: EpisodeRecord) -> Self {
        Self {
            created_at: record.created_at,
            number: record.episode_number,
            id: record.episode_id,
            updated_at: record.updated_at,
        }
    }
}
