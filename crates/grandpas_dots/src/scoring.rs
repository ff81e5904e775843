//! Scores, standings and the tie policy for ranks.

use super::phases::Outcome;
use super::roster::Roster;
use super::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Box counts per player.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Scores {
    boxes: BTreeMap<PlayerId, usize>,
}

impl Scores {
    /// Zero scores for every player in the roster.
    pub fn new(roster: &Roster) -> Self {
        Self {
            boxes: roster.players().iter().map(|p| (*p, 0)).collect(),
        }
    }

    /// Adds completed boxes to a player's score.
    pub fn award(&mut self, player: PlayerId, boxes: usize) {
        *self.boxes.entry(player).or_insert(0) += boxes;
    }

    /// Score of one player; zero for players not in the game.
    pub fn get(&self, player: PlayerId) -> usize {
        self.boxes.get(&player).copied().unwrap_or(0)
    }

    /// Sum of all scores.
    pub fn total(&self) -> usize {
        self.boxes.values().sum()
    }

    /// Scores in ascending player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, usize)> + '_ {
        self.boxes.iter().map(|(p, s)| (*p, *s))
    }

    /// Number of players scored.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if nobody is scored.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// How equal scores are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RankPolicy {
    /// Rank is the position in the sorted list, so equal scores get
    /// consecutive ranks (1, 2, 3).
    #[default]
    Positional,
    /// Equal scores share the best rank and the next score skips (1, 1, 3).
    Shared,
}

/// One row of the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// The player.
    pub player: PlayerId,
    /// Boxes owned.
    pub score: usize,
    /// 1-based rank under the chosen policy.
    pub rank: usize,
}

/// Players sorted by score, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    policy: RankPolicy,
    entries: Vec<RankEntry>,
}

impl Standings {
    /// Ranks the scores under a policy.
    ///
    /// Equal scores keep ascending player order.
    #[instrument(skip(scores))]
    pub fn new(scores: &Scores, policy: RankPolicy) -> Self {
        let mut sorted: Vec<(PlayerId, usize)> = scores.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));

        let mut entries: Vec<RankEntry> = Vec::with_capacity(sorted.len());
        for (position, (player, score)) in sorted.into_iter().enumerate() {
            let rank = match (policy, entries.last()) {
                (RankPolicy::Shared, Some(prev)) if prev.score == score => prev.rank,
                _ => position + 1,
            };
            entries.push(RankEntry { player, score, rank });
        }
        Self { policy, entries }
    }

    /// The policy used for ranks.
    pub fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Rows, best first.
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Highest score, zero when empty.
    pub fn top_score(&self) -> usize {
        self.entries.first().map_or(0, |e| e.score)
    }

    /// Players sharing the highest score.
    pub fn leaders(&self) -> Vec<PlayerId> {
        let top = self.top_score();
        self.entries
            .iter()
            .take_while(|e| e.score == top)
            .map(|e| e.player)
            .collect()
    }

    /// Returns true when two or more players share the highest score.
    pub fn is_draw(&self) -> bool {
        self.leaders().len() > 1
    }

    /// The player whose score beats every other, if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.leaders().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Winner or draw among the leaders.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw(self.leaders()),
        }
    }

    /// Rank of one player.
    pub fn rank_of(&self, player: PlayerId) -> Option<usize> {
        self.entries.iter().find(|e| e.player == player).map(|e| e.rank)
    }
}
