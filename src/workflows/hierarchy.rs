use std::collections::HashMap;

use crate::domain::error::HistoryError;
use crate::domain::models::{Episode, EpisodeRecord, RawRow, Season, Show};
use crate::workflows::normalize::normalize_row;

/// Folds episode records into shows, seasons and episodes in first-seen order.
///
/// The indices only speed up lookups; `shows` alone carries the ordering.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    shows: Vec<Show>,
    show_index: HashMap<String, usize>, // show name -> position in shows
    season_index: Vec<HashMap<i64, usize>>, // per show: season number -> position in seasons
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistorySummary {
    pub shows: usize,
    pub seasons: usize,
    pub episodes: usize,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EpisodeRecord) {
        let show_name = record.show_name.clone();
        let season_number = record.season_number;
        let episode = Episode::from(record);

        let Some(show_idx) = self.show_index.get(&show_name).copied() else {
            tracing::trace!(show = %show_name, season = season_number, "new show");
            self.show_index.insert(show_name.clone(), self.shows.len());
            self.season_index.push(HashMap::from([(season_number, 0)]));
            self.shows.push(Show {
                name: show_name,
                seasons: vec![Season {
                    number: season_number,
                    episodes: vec![episode],
                }],
            });
            return;
        };

        let show = &mut self.shows[show_idx];
        let seasons = &mut self.season_index[show_idx];
        match seasons.get(&season_number) {
            Some(&season_idx) => show.seasons[season_idx].episodes.push(episode),
            None => {
                tracing::trace!(show = %show.name, season = season_number, "new season");
                seasons.insert(season_number, show.seasons.len());
                show.seasons.push(Season {
                    number: season_number,
                    episodes: vec![episode],
                });
            }
        }
    }

    pub fn finish(self) -> Vec<Show> {
        self.shows
    }
}

/// Normalizes and folds every row of the export, stopping at the first error.
pub fn build_hierarchy<I>(rows: I) -> Result<Vec<Show>, HistoryError>
where
    I: IntoIterator<Item = Result<(u64, RawRow), HistoryError>>,
{
    let mut builder = HierarchyBuilder::new();
    for row in rows {
        let (row_number, raw) = row?;
        match normalize_row(row_number, raw)? {
            Some(record) => builder.push(record),
            None => tracing::debug!(row = row_number, "skipping header row"),
        }
    }
    Ok(builder.finish())
}

pub fn first_show(shows: &[Show]) -> Result<&Show, HistoryError> {
    shows.first().ok_or(HistoryError::EmptyResult)
}

pub fn summarize(shows: &[Show]) -> HistorySummary {
    shows.iter().fold(
        HistorySummary {
            shows: shows.len(),
            ..Default::default()
        },
        |mut summary, show| {
            summary.seasons += show.seasons.len();
            summary.episodes += show
                .seasons
                .iter()
                .map(|season| season.episodes.len())
                .sum::<usize>();
            summary
        },
    )
}
