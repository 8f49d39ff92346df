use crate::domain::error::HistoryError;
use crate::domain::models::{EpisodeRecord, RawRow};

/// Show-name column label. A row carrying it is the export's own header.
pub const HEADER_LABEL: &str = "tv_show_name";

/// Turns one raw export row into a typed record.
///
/// Returns `Ok(None)` for a header row. `row` is the 1-based file line the
/// record starts on and only feeds error reporting.
pub fn normalize_row(row: u64, raw: RawRow) -> Result<Option<EpisodeRecord>, HistoryError> {
    if raw.tv_show_name == HEADER_LABEL {
        return Ok(None);
    }

    let season_number = parse_number(row, "episode_season_number", &raw.episode_season_number)?;
    let episode_number = parse_number(row, "episode_number", &raw.episode_number)?;

    Ok(Some(EpisodeRecord {
        created_at: raw.created_at,
        show_name: raw.tv_show_name,
        season_number,
        episode_number,
        episode_id: raw.episode_id,
        updated_at: raw.updated_at,
    }))
}

fn parse_number(row: u64, field: &'static str, value: &str) -> Result<i64, HistoryError> {
    value
        .parse()
        .map_err(|source| HistoryError::MalformedNumericField {
            row,
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
pub(crate) fn raw(show: &str, season: &str, episode: &str, id: &str) -> RawRow {
    RawRow {
        created_at: "2023-01-01 10:00:00".to_string(),
        tv_show_name: show.to_string(),
        episode_season_number: season.to_string(),
        episode_number: episode.to_string(),
        episode_id: id.to_string(),
        updated_at: "2023-01-02 10:00:00".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_parses_numbers() {
        let record = normalize_row(2, raw("Breaking Bad", "1", "12", "ep-012"))
            .unwrap()
            .unwrap();
        assert_eq!(record.show_name, "Breaking Bad");
        assert_eq!(record.season_number, 1);
        assert_eq!(record.episode_number, 12);
        assert_eq!(record.episode_id, "ep-012");
        assert_eq!(record.created_at, "2023-01-01 10:00:00");
        assert_eq!(record.updated_at, "2023-01-02 10:00:00");
    }

    #[test]
    fn test_normalize_skips_header_row() {
        let header = raw(
            "tv_show_name",
            "episode_season_number",
            "episode_number",
            "episode_id",
        );
        assert!(normalize_row(1, header).unwrap().is_none());
    }

    #[test]
    fn test_header_match_is_exact() {
        // Only the exact label is a header; anything else must parse.
        let err = normalize_row(4, raw("TV_SHOW_NAME", "season", "1", "x")).unwrap_err();
        assert!(matches!(err, HistoryError::MalformedNumericField { row: 4, .. }));
    }

    #[test]
    fn test_malformed_season_number() {
        let err = normalize_row(7, raw("The Wire", "one", "1", "ep-900")).unwrap_err();
        match err {
            HistoryError::MalformedNumericField {
                row, field, value, ..
            } => {
                assert_eq!(row, 7);
                assert_eq!(field, "episode_season_number");
                assert_eq!(value, "one");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_episode_number() {
        let err = normalize_row(3, raw("The Wire", "1", "", "ep-900")).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::MalformedNumericField {
                field: "episode_number",
                ..
            }
        ));
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let err = normalize_row(5, raw("The Wire", " 1", "1", "ep-900")).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::MalformedNumericField {
                field: "episode_season_number",
                ..
            }
        ));
    }

    #[test]
    fn test_signed_numbers_are_accepted() {
        let record = normalize_row(1, raw("Specials", "+0", "-1", "sp"))
            .unwrap()
            .unwrap();
        assert_eq!(record.season_number, 0);
        assert_eq!(record.episode_number, -1);
    }
}
