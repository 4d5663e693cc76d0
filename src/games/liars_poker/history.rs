//! Public record of who bid and who challenged.
//!
//! Two `total_bids x player_count` binary matrices, stored row-major:
//! row `b` of the bid matrix marks the player who bid `b`, row `b` of the
//! challenge matrix marks every player who challenged `b`. Rows are only
//! ever set, never cleared.
//!
//! Alongside the matrices the ledger keeps the full action log (chance
//! draws included) in a persistent vector, so states clone cheaply and any
//! game can be replayed from its log.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionRecord, Actor, Bid, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLedger {
    total_bids: usize,
    player_count: usize,
    bids: Vec<bool>,
    challenges: Vec<bool>,
    log: Vector<ActionRecord>,
}

impl HistoryLedger {
    #[must_use]
    pub fn new(total_bids: usize, player_count: usize) -> Self {
        Self {
            total_bids,
            player_count,
            bids: vec![false; total_bids * player_count],
            challenges: vec![false; total_bids * player_count],
            log: Vector::new(),
        }
    }

    /// Matrix shape as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.total_bids, self.player_count)
    }

    // === Recording ===

    pub fn record_deal(&mut self, action: Action) {
        self.append(Actor::Chance, action);
    }

    pub fn record_bid(&mut self, bid: Bid, player: PlayerId) {
        let cell = self.cell(bid, player);
        self.bids[cell] = true;
        self.append(Actor::Player(player), Action::Bid(bid));
    }

    pub fn record_challenge(&mut self, bid: Bid, player: PlayerId) {
        let cell = self.cell(bid, player);
        self.challenges[cell] = true;
        self.append(Actor::Player(player), Action::Challenge);
    }

    fn append(&mut self, actor: Actor, action: Action) {
        let sequence = self.log.len() as u32;
        self.log.push_back(ActionRecord::new(actor, action, sequence));
    }

    fn cell(&self, bid: Bid, player: PlayerId) -> usize {
        bid.index() * self.player_count + player.index()
    }

    // === Queries ===

    #[must_use]
    pub fn has_bid(&self, bid: Bid, player: PlayerId) -> bool {
        self.bids[self.cell(bid, player)]
    }

    #[must_use]
    pub fn has_challenged(&self, bid: Bid, player: PlayerId) -> bool {
        self.challenges[self.cell(bid, player)]
    }

    /// Bid matrix, row-major.
    #[must_use]
    pub fn bid_matrix(&self) -> &[bool] {
        &self.bids
    }

    /// Challenge matrix, row-major.
    #[must_use]
    pub fn challenge_matrix(&self) -> &[bool] {
        &self.challenges
    }

    /// Bids that somebody made, ascending.
    pub fn bid_rows(&self) -> impl Iterator<Item = Bid> + '_ {
        Self::marked_rows(&self.bids, self.player_count)
    }

    /// Bids that somebody challenged, ascending.
    pub fn challenge_rows(&self) -> impl Iterator<Item = Bid> + '_ {
        Self::marked_rows(&self.challenges, self.player_count)
    }

    fn marked_rows(matrix: &[bool], width: usize) -> impl Iterator<Item = Bid> + '_ {
        matrix
            .chunks(width)
            .enumerate()
            .filter(|(_, row)| row.iter().any(|&cell| cell))
            .map(|(row, _)| Bid(row as u32))
    }

    /// Every applied action, in order.
    #[must_use]
    pub fn records(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// The applied actions alone, ready for replay.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.log.iter().map(|record| record.action).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
