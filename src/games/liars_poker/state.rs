//! Liar's Poker turn state machine.
//!
//! ```text
//! Dealing (chance) ──all hands full──▶ Bidding ──challenge quorum──▶ Terminal
//! ```
//!
//! ## Bidding rules
//!
//! - Anyone but the standing bidder may raise to any stronger bid.
//! - Anyone may challenge once a bid stands.
//! - When every other player has challenged, the turn returns to the
//!   bidder, who may *rebid* (raise again) or challenge to let it stand.
//! - Resolution: `player_count` challenges on an ordinary bid, or
//!   `player_count - 1` on a rebid. The bidder wins if the claimed digit
//!   occurs at least the claimed number of times across all hands.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bid::{BidCodec, Claim};
use super::dealer::{Hand, HandDealer};
use super::history::HistoryLedger;
use crate::core::{Action, Actor, Bid, Digit, GameError, LiarsPokerConfig, PlayerId, PlayerMap};
use crate::rules::{GameResult, RulesEngine};

/// The standing bid and the player who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingBid {
    pub bid: Bid,
    pub bidder: PlayerId,
}

/// How a finished game resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The claim held; the bidder collects from everyone.
    BidderWon(PlayerId),
    /// The claim failed; the bidder pays everyone.
    BidderLost(PlayerId),
}

impl Outcome {
    #[must_use]
    pub const fn bidder(self) -> PlayerId {
        match self {
            Outcome::BidderWon(p) | Outcome::BidderLost(p) => p,
        }
    }
}

/// Full game state, including every private hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiarsPokerState {
    config: LiarsPokerConfig,
    codec: BidCodec,
    dealer: HandDealer,
    hands: PlayerMap<Hand>,
    current_player: PlayerId,
    standing: Option<StandingBid>,
    num_challenges: usize,
    is_rebid: bool,
    history: HistoryLedger,
    outcome: Option<Outcome>,
}

impl LiarsPokerState {
    /// Fresh state awaiting the deal.
    pub fn new(config: &LiarsPokerConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Fresh state for a configuration already known to be valid.
    pub(super) fn fresh(config: &LiarsPokerConfig) -> Self {
        Self {
            config: *config,
            codec: BidCodec::new(config),
            dealer: HandDealer::new(config),
            hands: PlayerMap::with_default(config.player_count),
            current_player: PlayerId::new(0),
            standing: None,
            num_challenges: 0,
            is_rebid: false,
            history: HistoryLedger::new(config.total_bids(), config.player_count),
            outcome: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &LiarsPokerConfig {
        &self.config
    }

    #[must_use]
    pub fn codec(&self) -> &BidCodec {
        &self.codec
    }

    /// A player's digits in draw order (possibly still being dealt).
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Digit] {
        &self.hands[player]
    }

    #[must_use]
    pub fn is_hand_complete(&self, player: PlayerId) -> bool {
        self.hands[player].len() == self.config.hand_length
    }

    #[must_use]
    pub fn standing_bid(&self) -> Option<StandingBid> {
        self.standing
    }

    #[must_use]
    pub fn current_bid(&self) -> Option<Bid> {
        self.standing.map(|s| s.bid)
    }

    #[must_use]
    pub fn bid_originator(&self) -> Option<PlayerId> {
        self.standing.map(|s| s.bidder)
    }

    #[must_use]
    pub fn num_challenges(&self) -> usize {
        self.num_challenges
    }

    /// Whether the standing bid is the bidder's own raise after a full challenge.
    #[must_use]
    pub fn is_rebid(&self) -> bool {
        self.is_rebid
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(Outcome::BidderWon(p)) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(Outcome::BidderLost(p)) => Some(p),
            _ => None,
        }
    }

    /// Occurrences of `digit` across every hand.
    #[must_use]
    pub fn occurrences(&self, digit: Digit) -> usize {
        self.hands
            .values()
            .flat_map(|hand| hand.iter())
            .filter(|&&d| d == digit)
            .count()
    }

    // === Rules ===

    /// A challenge needs something to challenge.
    #[must_use]
    pub fn is_challenge_possible(&self) -> bool {
        self.standing.is_some()
    }

    /// Every other player has challenged and no rebid is under way.
    #[must_use]
    pub fn is_rebid_possible(&self) -> bool {
        !self.is_rebid && self.num_challenges == self.config.player_count - 1
    }

    fn may_raise(&self, player: PlayerId) -> bool {
        self.bid_originator() != Some(player) || self.is_rebid_possible()
    }

    fn is_legal_bid(&self, player: PlayerId, bid: Bid) -> bool {
        self.may_raise(player)
            && bid.index() < self.config.total_bids()
            && self.current_bid().map_or(true, |current| bid > current)
    }

    fn challenge_quorum(&self) -> usize {
        if self.is_rebid {
            self.config.player_count - 1
        } else {
            self.config.player_count
        }
    }

    // === Transitions ===

    fn deal(&mut self, digit: Digit) {
        if let Some(seat) = self.dealer.seat_to_deal(&self.hands) {
            self.hands[seat].push(digit);
            self.history.record_deal(Action::Deal(digit));
        }
    }

    fn bid(&mut self, player: PlayerId, bid: Bid) {
        if self.bid_originator() == Some(player) {
            self.is_rebid = true;
            debug!(%player, bid = bid.id(), "rebid");
        } else {
            self.is_rebid = false;
        }
        self.standing = Some(StandingBid { bid, bidder: player });
        self.history.record_bid(bid, player);
        self.num_challenges = 0;
        self.current_player = player.next(self.config.player_count);
    }

    fn challenge(&mut self, player: PlayerId, standing: StandingBid) -> Result<(), GameError> {
        let claim = self.codec.decode(standing.bid)?;

        self.history.record_challenge(standing.bid, player);
        self.num_challenges += 1;

        if self.num_challenges == self.challenge_quorum() {
            self.resolve(standing.bidder, claim);
        } else {
            self.current_player = player.next(self.config.player_count);
        }
        Ok(())
    }

    fn resolve(&mut self, bidder: PlayerId, claim: Claim) {
        let occurrences = self.occurrences(claim.digit);
        let outcome = if occurrences >= claim.count as usize {
            Outcome::BidderWon(bidder)
        } else {
            Outcome::BidderLost(bidder)
        };
        debug!(
            %bidder,
            claim = %claim,
            occurrences,
            rebid = self.is_rebid,
            ?outcome,
            "bid resolved"
        );
        self.outcome = Some(outcome);
    }

    fn reject(&self, action: Action) -> GameError {
        let actor = self.current_actor();
        debug!(%actor, %action, "rejected illegal action");
        GameError::IllegalAction { action, actor }
    }
}

impl RulesEngine for LiarsPokerState {
    type Action = Action;

    fn player_count(&self) -> usize {
        self.config.player_count
    }

    fn current_actor(&self) -> Actor {
        if self.outcome.is_some() {
            Actor::Terminal
        } else if self.dealer.seat_to_deal(&self.hands).is_some() {
            Actor::Chance
        } else {
            Actor::Player(self.current_player)
        }
    }

    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.current_actor() != Actor::Player(player) {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.may_raise(player) {
            actions.extend(self.codec.bids_above(self.current_bid()).map(Action::Bid));
        }
        if self.is_challenge_possible() {
            actions.push(Action::Challenge);
        }
        actions
    }

    fn chance_outcomes(&self) -> Vec<(Action, f64)> {
        if !self.is_chance_node() {
            return Vec::new();
        }
        self.dealer
            .chance_outcomes()
            .into_iter()
            .map(|(digit, p)| (Action::Deal(digit), p))
            .collect()
    }

    fn apply_action(&mut self, action: Action) -> Result<(), GameError> {
        let actor = self.current_actor();
        match (actor, action) {
            (Actor::Chance, Action::Deal(digit)) if self.dealer.is_outcome(digit) => {
                self.deal(digit);
            }
            (Actor::Player(player), Action::Bid(bid)) if self.is_legal_bid(player, bid) => {
                self.bid(player, bid);
            }
            (Actor::Player(player), Action::Challenge) => {
                let standing = self.standing.ok_or_else(|| self.reject(action))?;
                self.challenge(player, standing)?;
            }
            _ => return Err(self.reject(action)),
        }
        trace!(%actor, %action, sequence = self.history.len() - 1, "applied action");
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    fn returns(&self) -> PlayerMap<f64> {
        let n = self.config.player_count;
        let stake = (n - 1) as f64;
        match self.outcome {
            Some(Outcome::BidderWon(bidder)) => {
                PlayerMap::new(n, |p| if p == bidder { stake } else { -1.0 })
            }
            Some(Outcome::BidderLost(bidder)) => {
                PlayerMap::new(n, |p| if p == bidder { -stake } else { 1.0 })
            }
            None => PlayerMap::with_value(n, 0.0),
        }
    }

    fn result(&self) -> Option<GameResult> {
        match self.outcome? {
            Outcome::BidderWon(bidder) => Some(GameResult::Winner(bidder)),
            Outcome::BidderLost(bidder) => Some(GameResult::Winners(
                PlayerId::all(self.config.player_count)
                    .filter(|&p| p != bidder)
                    .collect(),
            )),
        }
    }

    fn action_to_string(&self, _actor: Actor, action: Action) -> String {
        match action {
            Action::Deal(digit) => format!("Deal:{digit}"),
            Action::Challenge => "Challenge".to_string(),
            Action::Bid(bid) => match self.codec.decode(bid) {
                Ok(claim) => format!("Bid:{claim}"),
                Err(_) => format!("{action}"),
            },
        }
    }
}

impl std::fmt::Display for LiarsPokerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hands: Vec<Vec<u8>> = self
            .hands
            .values()
            .map(|hand| hand.iter().map(|d| d.value()).collect())
            .collect();
        let bidder = self
            .bid_originator()
            .map_or_else(|| "-".to_string(), |p| p.0.to_string());
        let bid = self
            .current_bid()
            .map_or_else(|| "-".to_string(), |b| b.id().to_string());
        let actor = match self.current_actor() {
            Actor::Player(p) => p.0.to_string(),
            Actor::Chance => "chance".to_string(),
            Actor::Terminal => "terminal".to_string(),
        };
        write!(
            f,
            "Hands: {hands:?}, Bidder: {bidder}, Current Player: {actor}, Current Bid: {bid}, Rebid: {}",
            self.is_rebid
        )
    }
}
