use crate::scoring::{recommend, score};
use crate::types::{EnrichedPlayer, RawPlayerRow, Recommendation};

/// Derives the secondary ratios for one player and attaches KES plus
/// recommendation. All raw fields are carried forward unchanged.
///
/// Every ratio with a player-derived denominator is zero-guarded: a
/// denominator of 0 yields a ratio of 0 rather than an infinity or NaN.
pub fn enrich(raw: RawPlayerRow) -> EnrichedPlayer {
    let trend_ratio = if raw.market_value != 0.0 {
        raw.trend / raw.market_value
    } else {
        0.0
    };
    let euro_per_point = if raw.total_points != 0.0 {
        raw.market_value / raw.total_points
    } else {
        0.0
    };
    let value_efficiency = if euro_per_point != 0.0 {
        (raw.avg_points / euro_per_point) * 1000.0
    } else {
        0.0
    };

    let kes = score(
        euro_per_point,
        raw.avg_points,
        value_efficiency,
        trend_ratio,
        &raw.position,
    );

    EnrichedPlayer {
        name: raw.name,
        position: raw.position,
        total_points: raw.total_points,
        avg_points: raw.avg_points,
        market_value: raw.market_value,
        trend: raw.trend,
        trend_ratio,
        euro_per_point,
        value_efficiency,
        kes,
        recommendation: recommend(kes),
    }
}

/// Merges the rows of both dashboards (first source first, no
/// deduplication), enriches every player and sorts by KES descending.
/// Either input may be empty.
pub fn rank_players(
    kickly: Vec<RawPlayerRow>,
    fabilous: Vec<RawPlayerRow>,
) -> Vec<EnrichedPlayer> {
    let mut players: Vec<EnrichedPlayer> = kickly
        .into_iter()
        .chain(fabilous)
        .map(enrich)
        .collect();
    players.sort_by(|a, b| b.kes.total_cmp(&a.kes));
    players
}

#[derive(Debug)]
pub struct RankingStats {
    pub buy: usize,
    pub hold: usize,
    pub watch: usize,
    pub sell: usize,
    pub total: usize,
}

impl RankingStats {
    pub fn from_players(players: &[EnrichedPlayer]) -> RankingStats {
        let count = |r: Recommendation| {
            players
                .iter()
                .filter(|p| p.recommendation == r)
                .count()
        };
        RankingStats {
            buy: count(Recommendation::Buy),
            hold: count(Recommendation::Hold),
            watch: count(Recommendation::Watch),
            sell: count(Recommendation::Sell),
            total: players.len(),
        }
    }
}

impl std::fmt::Display for RankingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nRecommendations:")?;
        writeln!(f, "  Buy:   {}", self.buy)?;
        writeln!(f, "  Hold:  {}", self.hold)?;
        writeln!(f, "  Watch: {}", self.watch)?;
        writeln!(f, "  Sell:  {}", self.sell)?;
        writeln!(f, "  Total: {}", self.total)
    }
}
