// src/players.rs
// Helpers for presenting player rows: names, ranking columns, search.

use crate::csv::Row;

const SEARCH_FIELDS: [&str; 4] = ["name", "player_id", "first_name", "last_name"];

/// `name`, else "first last", else `player_id`, else "Unknown".
pub fn display_name(row: &Row) -> String {
    let name = row.field("name");
    if !name.is_empty() {
        return s!(name);
    }

    let full = join!(row.field("first_name"), " ", row.field("last_name"));
    let full = full.trim();
    if !full.is_empty() {
        return s!(full);
    }

    let id = row.field("player_id");
    if !id.is_empty() { s!(id) } else { s!("Unknown") }
}

/// Ranking value from whichever of `rank` / `ranking` is filled in.
pub fn ranking_of(row: &Row) -> Option<&str> {
    ["rank", "ranking"]
        .into_iter()
        .map(|k| row.field(k))
        .find(|v| !v.is_empty())
}

/// Case-insensitive substring match over the filled-in name and id columns.
/// The term is not trimmed; an empty term matches any row with one of them set.
pub fn matches_search(row: &Row, term: &str) -> bool {
    let needle = term.to_lowercase();
    SEARCH_FIELDS
        .iter()
        .map(|k| row.field(k))
        .any(|v| !v.is_empty() && v.to_lowercase().contains(&needle))
}

pub fn filter_players(rows: Vec<Row>, term: &str) -> Vec<Row> {
    rows.into_iter().filter(|r| matches_search(r, term)).collect()
}
