// src/records.rs
use serde::Serialize;

/// Who holds a record and with what value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordHolder {
    pub player_id: String,
    pub name: String,
    pub value: u32,
}

/// All-time records aggregate. Not computed yet: every field stays `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Records {
    pub most_grand_slams: Option<RecordHolder>,
    pub longest_streak: Option<RecordHolder>,
    pub highest_ranking: Option<RecordHolder>,
    pub most_tournaments: Option<RecordHolder>,
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.most_grand_slams.is_none()
            && self.longest_streak.is_none()
            && self.highest_ranking.is_none()
            && self.most_tournaments.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecordCategory {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static catalogue of record categories shown to users.
pub const CATALOGUE: &[RecordCategory] = &[
    RecordCategory {
        title: "Most Grand Slam Titles",
        description: "Players with the most Grand Slam tournament wins",
    },
    RecordCategory {
        title: "Highest Career Win-Loss Record",
        description: "Players with the best win-loss percentages",
    },
    RecordCategory {
        title: "Most ATP Masters 1000 Titles",
        description: "Players with the most Masters 1000 titles",
    },
    RecordCategory {
        title: "Consecutive Weeks at World No. 1",
        description: "Players with the longest #1 rankings",
    },
    RecordCategory {
        title: "Best Singles Record in One Year",
        description: "Highest win totals in single calendar year",
    },
    RecordCategory {
        title: "ATP Race Rankings",
        description: "Current year ATP race to the Finals",
    },
];
