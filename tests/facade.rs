// tests/facade.rs
//
// Façade queries against an in-memory mirror: lookups, the stats window,
// the top-players fallback chain, and soft failure.
//
mod common;

use std::sync::Arc;

use atp_stats::{AggregateStats, ApiConfig, AtpApi, Resource, TopSource};
use atp_stats::progress::Progress;
use common::{FakeMirror, PLAYERS_CSV};

const YEAR: i32 = 2026;

fn setup(mirror: FakeMirror) -> (AtpApi<Arc<FakeMirror>>, Arc<FakeMirror>) {
    let mirror = Arc::new(mirror);
    let cfg = ApiConfig::default().with_current_year(YEAR);
    (AtpApi::with_fetcher(Arc::clone(&mirror), cfg), mirror)
}

fn matches_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut out = String::from("tourney_id,winner_id,loser_id,round\n");
    for (i, (w, l, r)) in rows.iter().enumerate() {
        out.push_str(&format!("T{i},{w},{l},{r}\n"));
    }
    out
}

/* ---------------- players / details ---------------- */

#[tokio::test]
async fn players_decoded_in_file_order() {
    let (api, _) = setup(FakeMirror::new().with(Resource::Players, PLAYERS_CSV));
    let players = api.players().await;
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].field("player_id"), "104745");
    assert_eq!(players[2].field("country"), "RUS");
}

#[tokio::test]
async fn details_first_exact_match() {
    let csv = format!("{PLAYERS_CSV}104925,Duplicate,,,,,\n");
    let (api, _) = setup(FakeMirror::new().with(Resource::Players, &csv));

    let p = api.player_details("104925").await.expect("found");
    assert_eq!(p.field("last_name"), "Djokovic");

    // prefix only, not equal
    assert!(api.player_details("1049").await.is_none());
}

#[tokio::test]
async fn details_missing_id_is_none_even_when_fetch_succeeds() {
    let (api, _) = setup(FakeMirror::new().with(Resource::Players, PLAYERS_CSV));
    assert!(api.player_details("999999").await.is_none());
    assert!(api.try_player_details("999999").await.unwrap().is_none());
}

#[tokio::test]
async fn details_none_when_players_file_fails() {
    let (api, _) = setup(FakeMirror::new().failing(Resource::Players));
    assert!(api.player_details("104745").await.is_none());
    assert!(api.try_player_details("104745").await.is_err());
}

/* ---------------- per-year files ---------------- */

#[tokio::test]
async fn tournaments_and_rankings_by_year() {
    let (api, mirror) = setup(
        FakeMirror::new()
            .with(Resource::Matches(2019), &matches_csv(&[("A", "B", "F")]))
            .with(Resource::Rankings(2019), "ranking_date,rank,player,points\n20191230,1,104745,9985\n"),
    );
    assert_eq!(api.tournaments(2019).await.len(), 1);
    let r = api.player_rankings(2019).await;
    assert_eq!(r[0].field("points"), "9985");
    assert_eq!(mirror.calls(), vec![Resource::Matches(2019), Resource::Rankings(2019)]);
}

#[tokio::test]
async fn missing_year_is_empty_not_error() {
    let (api, _) = setup(FakeMirror::new());
    assert!(api.tournaments(1970).await.is_empty());
    assert!(api.player_rankings(1970).await.is_empty());
    assert!(api.try_tournaments(1970).await.is_err());
}

/* ---------------- stats ---------------- */

#[tokio::test]
async fn stats_fold_counts_wins_losses_titles() {
    let (api, _) = setup(FakeMirror::new().with(
        Resource::Matches(YEAR),
        &matches_csv(&[("P1", "P2", "F"), ("P2", "P1", "R16")]),
    ));
    let s = api.player_stats("P1").await;
    assert_eq!(s, AggregateStats { wins: 1, losses: 1, titles: 1 });
}

#[tokio::test]
async fn stats_window_covers_six_years_and_excludes_seventh() {
    let (api, mirror) = setup(
        FakeMirror::new()
            .with(Resource::Matches(YEAR), &matches_csv(&[("P1", "P2", "R32")]))
            .with(Resource::Matches(YEAR - 5), &matches_csv(&[("P1", "P3", "F")]))
            .with(Resource::Matches(YEAR - 6), &matches_csv(&[("P1", "P4", "F"), ("P5", "P1", "SF")])),
    );
    let s = api.player_stats("P1").await;
    assert_eq!(s, AggregateStats { wins: 2, losses: 0, titles: 1 });

    // sequential, newest first, never touching YEAR-6
    let expected: Vec<Resource> = (YEAR - 5..=YEAR).rev().map(Resource::Matches).collect();
    assert_eq!(mirror.calls(), expected);
}

#[tokio::test]
async fn stats_partial_failure_keeps_other_years() {
    let (api, _) = setup(
        FakeMirror::new()
            .with(Resource::Matches(YEAR), &matches_csv(&[("P1", "P2", "F")]))
            .failing(Resource::Matches(YEAR - 1))
            .with(Resource::Matches(YEAR - 2), &matches_csv(&[("P9", "P1", "QF")])),
    );
    let report = api.player_stats_report("P1", None).await;
    assert_eq!(report.stats, AggregateStats { wins: 1, losses: 1, titles: 1 });
    assert_eq!(report.years.len(), 6);
    // YEAR-1 is a 503, YEAR-3..=YEAR-5 are 404s
    assert_eq!(report.failed.len(), 4);
    assert!(report.failed.iter().any(|(y, _)| *y == YEAR - 1));
}

#[tokio::test]
async fn stats_zeroed_when_everything_fails() {
    let mut mirror = FakeMirror::new();
    for y in YEAR - 5..=YEAR {
        mirror = mirror.failing(Resource::Matches(y));
    }
    let (api, _) = setup(mirror);
    assert_eq!(api.player_stats("P1").await, AggregateStats::default());
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(i32, usize)>,
    failed: Vec<i32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, year: i32, rows: usize) { self.done.push((year, rows)); }
    fn item_failed(&mut self, year: i32, _reason: &str) { self.failed.push(year); }
    fn finish(&mut self) { self.finished = true; }
}

#[tokio::test]
async fn stats_progress_reports_each_year() {
    let (api, _) = setup(
        FakeMirror::new().with(Resource::Matches(YEAR), &matches_csv(&[("P1", "P2", "F"), ("P3", "P4", "F")])),
    );
    let mut rec = Recorder::default();
    api.player_stats_with_progress("P1", Some(&mut rec)).await;
    assert_eq!(rec.total, 6);
    assert_eq!(rec.done, vec![(YEAR, 2)]);
    assert_eq!(rec.failed, (YEAR - 5..YEAR).rev().collect::<Vec<_>>());
    assert!(rec.finished);
}

/* ---------------- top players ---------------- */

fn rankings_csv(n: usize) -> String {
    let mut out = String::from("ranking_date,rank,player,points\n");
    for i in 1..=n {
        out.push_str(&format!("20260101,{i},P{i},{}\n", 10_000 - i));
    }
    out
}

#[tokio::test]
async fn top_uses_current_year_rankings_and_limits() {
    let (api, mirror) = setup(FakeMirror::new().with(Resource::Rankings(YEAR), &rankings_csv(150)));
    let top = api.try_top_players(100).await.unwrap();
    assert_eq!(top.source, TopSource::Rankings(YEAR));
    assert_eq!(top.rows.len(), 100);
    assert_eq!(top.rows[0].field("player"), "P1");
    assert_eq!(mirror.calls(), vec![Resource::Rankings(YEAR)]);
}

#[tokio::test]
async fn top_falls_back_to_prior_year() {
    let (api, _) = setup(
        FakeMirror::new()
            .with(Resource::Rankings(YEAR), "ranking_date,rank,player,points\n")
            .with(Resource::Rankings(YEAR - 1), &rankings_csv(5)),
    );
    let top = api.try_top_players(3).await.unwrap();
    assert_eq!(top.source, TopSource::Rankings(YEAR - 1));
    assert_eq!(top.rows.len(), 3);
}

#[tokio::test]
async fn top_falls_back_to_players_in_dataset_order() {
    let (api, mirror) = setup(
        FakeMirror::new()
            .failing(Resource::Rankings(YEAR))
            .with(Resource::Players, PLAYERS_CSV),
    );
    let top = api.try_top_players(2).await.unwrap();
    assert_eq!(top.source, TopSource::Players);
    let ids: Vec<&str> = top.rows.iter().map(|r| r.field("player_id")).collect();
    assert_eq!(ids, vec!["104745", "104925"]);
    assert_eq!(
        mirror.calls(),
        vec![Resource::Rankings(YEAR), Resource::Rankings(YEAR - 1), Resource::Players]
    );
}

#[tokio::test]
async fn top_empty_when_all_sources_fail() {
    let (api, _) = setup(FakeMirror::new());
    assert!(api.top_players(100).await.is_empty());
    assert!(api.try_top_players(100).await.is_err());
}

#[tokio::test]
async fn top_limit_larger_than_source() {
    let (api, _) = setup(FakeMirror::new().with(Resource::Players, PLAYERS_CSV));
    assert_eq!(api.top_players_default().await.len(), 3);
}

/* ---------------- records ---------------- */

#[tokio::test]
async fn records_is_an_empty_placeholder() {
    let (api, mirror) = setup(FakeMirror::new().with(Resource::Players, PLAYERS_CSV));
    let rec = api.records().await;
    assert!(rec.is_empty());
    assert_eq!(mirror.calls(), vec![Resource::Players]);

    let (api, _) = setup(FakeMirror::new());
    assert!(api.records().await.is_empty());
}
