//! League tiers
//!
//! Score thresholds and titles shown next to the player's score.

use serde::Serialize;

/// League definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub name: &'static str,
    pub tier: &'static str,
    pub min_score: u64,
}

/// All leagues (must be sorted by min_score)
pub static LEAGUES: &[League] = &[
    League {
        name: "Digital Noob",
        tier: "Beginner",
        min_score: 0,
    },
    League {
        name: "Script Kiddie",
        tier: "Intermediate",
        min_score: 500,
    },
    League {
        name: "Code Breaker",
        tier: "Advanced",
        min_score: 1000,
    },
    League {
        name: "Neural Hacker",
        tier: "Expert",
        min_score: 1500,
    },
    League {
        name: "Cyber Master",
        tier: "Master",
        min_score: 2000,
    },
    League {
        name: "Quantum Elite",
        tier: "Elite",
        min_score: 2500,
    },
];

impl League {
    /// League for the given score
    pub fn for_score(score: u64) -> &'static League {
        LEAGUES
            .iter()
            .rev()
            .find(|l| score >= l.min_score)
            .unwrap_or(&LEAGUES[0])
    }

    /// The next league above `score` (None at the top)
    pub fn next_after(score: u64) -> Option<&'static League> {
        LEAGUES.iter().find(|l| l.min_score > score)
    }

    pub fn is_top(&self) -> bool {
        LEAGUES.last().is_some_and(|l| l == self)
    }
}

/// A score change that moved the player into a higher league
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaguePromotion {
    pub from: &'static League,
    pub to: &'static League,
}

impl LeaguePromotion {
    /// Compare leagues before and after a score change
    pub fn between(old_score: u64, new_score: u64) -> Option<Self> {
        let from = League::for_score(old_score);
        let to = League::for_score(new_score);
        (to.min_score > from.min_score).then_some(Self { from, to })
    }
}

/// Where a score sits within the league table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStanding {
    pub score: u64,
    pub league: &'static League,
    /// Score where the next league starts (None at the top)
    pub next_league_score: Option<u64>,
}

impl LeagueStanding {
    pub fn new(score: u64) -> Self {
        Self {
            score,
            league: League::for_score(score),
            next_league_score: League::next_after(score).map(|l| l.min_score),
        }
    }

    /// Points still missing for the next league (0 at the top)
    pub fn points_to_next(&self) -> u64 {
        self.next_league_score
            .map(|next| next - self.score)
            .unwrap_or(0)
    }

    /// Progress through the current league (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        match self.next_league_score {
            Some(next) => {
                let span = next - self.league.min_score;
                if span == 0 {
                    1.0
                } else {
                    (self.score - self.league.min_score) as f32 / span as f32
                }
            }
            None => 1.0,
        }
    }
}
