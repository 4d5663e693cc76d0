//! Information-state observer for Liar's Poker.
//!
//! The tensor is a concatenation of named blocks, laid out once when the
//! observer is built:
//!
//! | block               | size                      | present when                      |
//! |---------------------|---------------------------|-----------------------------------|
//! | `player`            | `player_count`            | always                            |
//! | `private_hand`      | `hand_length`             | `private_info == SinglePlayer`    |
//! | `rebid_state`       | 1                         | `public_info`                     |
//! | `counts_state`      | 1                         | `public_info`                     |
//! | `bid_history`       | `total_bids * player_count` | `public_info && perfect_recall` |
//! | `challenge_history` | `total_bids * player_count` | `public_info && perfect_recall` |
//!
//! Encoding only reads the state. The private hand stays zero until the
//! viewer's hand is fully dealt.

use serde::{Deserialize, Serialize};

use crate::core::{LiarsPokerConfig, PlayerId};
use crate::games::liars_poker::LiarsPokerState;
use crate::nn::traits::{EncodedState, StateEncoder};
use crate::rules::RulesEngine;

/// Whose private information the viewer sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivateInfo {
    None,
    #[default]
    SinglePlayer,
}

/// What an observer includes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationType {
    pub private_info: PrivateInfo,
    pub public_info: bool,
    /// Include the full bid and challenge history.
    pub perfect_recall: bool,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self {
            private_info: PrivateInfo::SinglePlayer,
            public_info: true,
            perfect_recall: false,
        }
    }
}

impl ObservationType {
    /// Own hand, public flags and full history.
    #[must_use]
    pub fn information_state() -> Self {
        Self {
            perfect_recall: true,
            ..Self::default()
        }
    }

    /// Public flags only, no private hand.
    #[must_use]
    pub fn public_observation() -> Self {
        Self {
            private_info: PrivateInfo::None,
            ..Self::default()
        }
    }

    fn includes_history(self) -> bool {
        self.public_info && self.perfect_recall
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum BlockKind {
    Player,
    PrivateHand,
    RebidState,
    CountsState,
    BidHistory,
    ChallengeHistory,
}

impl BlockKind {
    fn name(self) -> &'static str {
        match self {
            BlockKind::Player => "player",
            BlockKind::PrivateHand => "private_hand",
            BlockKind::RebidState => "rebid_state",
            BlockKind::CountsState => "counts_state",
            BlockKind::BidHistory => "bid_history",
            BlockKind::ChallengeHistory => "challenge_history",
        }
    }
}

/// A named slice of the observation tensor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorBlock {
    #[serde(rename = "name")]
    kind: BlockKind,
    pub offset: usize,
    pub shape: Vec<usize>,
}

impl TensorBlock {
    /// Block name as listed in the module table.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.size()
    }
}

/// Fixed block layout for one configuration and observation type.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Layout {
    observation_type: ObservationType,
    blocks: Vec<TensorBlock>,
    size: usize,
}

impl Layout {
    fn new(config: &LiarsPokerConfig, observation_type: ObservationType) -> Self {
        let mut shapes = vec![(BlockKind::Player, vec![config.player_count])];
        if observation_type.private_info == PrivateInfo::SinglePlayer {
            shapes.push((BlockKind::PrivateHand, vec![config.hand_length]));
        }
        if observation_type.public_info {
            shapes.push((BlockKind::RebidState, vec![1]));
            shapes.push((BlockKind::CountsState, vec![1]));
        }
        if observation_type.includes_history() {
            let matrix = vec![config.total_bids(), config.player_count];
            shapes.push((BlockKind::BidHistory, matrix.clone()));
            shapes.push((BlockKind::ChallengeHistory, matrix));
        }

        let mut offset = 0;
        let blocks = shapes
            .into_iter()
            .map(|(kind, shape)| {
                let block = TensorBlock { kind, offset, shape };
                offset += block.size();
                block
            })
            .collect();

        Self {
            observation_type,
            blocks,
            size: offset,
        }
    }

    fn block(&self, name: &str) -> Option<&TensorBlock> {
        self.blocks.iter().find(|block| block.name() == name)
    }

    fn has(&self, kind: BlockKind) -> bool {
        self.blocks.iter().any(|block| block.kind == kind)
    }

    /// Zero `out`, then write every configured block.
    fn write(&self, state: &LiarsPokerState, player: PlayerId, out: &mut [f32]) {
        out.fill(0.0);
        for block in &self.blocks {
            let Some(cells) = out.get_mut(block.range()) else {
                continue;
            };
            match block.kind {
                BlockKind::Player => cells[player.index()] = 1.0,
                BlockKind::PrivateHand => {
                    if state.is_hand_complete(player) {
                        for (cell, digit) in cells.iter_mut().zip(state.hand(player)) {
                            *cell = f32::from(digit.value());
                        }
                    }
                }
                BlockKind::RebidState => cells[0] = flag(state.is_rebid()),
                BlockKind::CountsState => cells[0] = flag(state.is_terminal()),
                BlockKind::BidHistory => copy_matrix(cells, state.history().bid_matrix()),
                BlockKind::ChallengeHistory => {
                    copy_matrix(cells, state.history().challenge_matrix());
                }
            }
        }
    }
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn copy_matrix(cells: &mut [f32], matrix: &[bool]) {
    for (cell, &marked) in cells.iter_mut().zip(matrix) {
        *cell = flag(marked);
    }
}

/// Builds observation tensors and strings for one player at a time.
///
/// The layout is fixed at construction. `set_from` rewrites the tensor in
/// place, so one observer can be reused across states of the same game.
///
/// ```
/// use liars_poker::core::PlayerId;
/// use liars_poker::games::liars_poker::LiarsPoker;
/// use liars_poker::nn::ObservationType;
/// use liars_poker::rules::Game;
///
/// let game = LiarsPoker::default();
/// let mut observer = game.make_observer(Some(ObservationType::information_state()));
/// let state = game.new_initial_state();
///
/// observer.set_from(&state, PlayerId::new(1));
/// assert_eq!(observer.block_values("player"), Some(&[0.0, 1.0][..]));
/// assert_eq!(observer.string_from(&state, PlayerId::new(1)), "p1 rebid:false counts:false");
/// ```
#[derive(Clone, Debug)]
pub struct InformationStateObserver {
    config: LiarsPokerConfig,
    layout: Layout,
    tensor: Vec<f32>,
}

impl InformationStateObserver {
    #[must_use]
    pub fn new(config: &LiarsPokerConfig, observation_type: ObservationType) -> Self {
        let layout = Layout::new(config, observation_type);
        let tensor = vec![0.0; layout.size];
        Self {
            config: *config,
            layout,
            tensor,
        }
    }

    #[must_use]
    pub fn observation_type(&self) -> ObservationType {
        self.layout.observation_type
    }

    /// Total tensor length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.layout.size
    }

    /// Blocks in tensor order.
    #[must_use]
    pub fn blocks(&self) -> &[TensorBlock] {
        &self.layout.blocks
    }

    #[must_use]
    pub fn block(&self, name: &str) -> Option<&TensorBlock> {
        self.layout.block(name)
    }

    /// Current contents of one block.
    #[must_use]
    pub fn block_values(&self, name: &str) -> Option<&[f32]> {
        self.layout.block(name).and_then(|block| self.tensor.get(block.range()))
    }

    /// The last tensor written by [`set_from`](Self::set_from).
    #[must_use]
    pub fn tensor(&self) -> &[f32] {
        &self.tensor
    }

    fn check_viewer(&self, state: &LiarsPokerState, player: PlayerId) {
        assert_eq!(state.config(), &self.config, "observer built for another configuration");
        assert!(
            player.index() < self.config.player_count,
            "player {} is not seated at a {}-player table",
            player.0,
            self.config.player_count
        );
    }

    /// Overwrite the tensor with `state` as seen by `player`.
    ///
    /// # Panics
    ///
    /// If `state` comes from a different configuration than the observer,
    /// or `player` is not seated at the table. The same holds for
    /// [`string_from`](Self::string_from) and `encode`.
    pub fn set_from(&mut self, state: &LiarsPokerState, player: PlayerId) {
        self.check_viewer(state, player);
        self.layout.write(state, player, &mut self.tensor);
    }

    /// Human-readable view using the same visibility rules as the tensor.
    #[must_use]
    pub fn string_from(&self, state: &LiarsPokerState, player: PlayerId) -> String {
        self.check_viewer(state, player);
        let mut pieces = vec![format!("p{}", player.0)];

        if self.layout.has(BlockKind::PrivateHand) && state.is_hand_complete(player) {
            let digits: Vec<u8> = state.hand(player).iter().map(|d| d.value()).collect();
            pieces.push(format!("hand:{digits:?}"));
        }
        if self.layout.has(BlockKind::RebidState) {
            pieces.push(format!("rebid:{}", state.is_rebid()));
        }
        if self.layout.has(BlockKind::CountsState) {
            pieces.push(format!("counts:{}", state.is_terminal()));
        }
        if self.layout.has(BlockKind::BidHistory) {
            pieces.extend(state.history().bid_rows().map(|bid| format!("b:{}.", bid.id())));
        }
        if self.layout.has(BlockKind::ChallengeHistory) {
            pieces.extend(
                state
                    .history()
                    .challenge_rows()
                    .map(|bid| format!("c:{}.", bid.id())),
            );
        }

        pieces.join(" ")
    }
}

impl StateEncoder<LiarsPokerState> for InformationStateObserver {
    fn encode(&self, state: &LiarsPokerState, perspective: PlayerId) -> EncodedState {
        self.check_viewer(state, perspective);
        let mut tensor = vec![0.0; self.layout.size];
        self.layout.write(state, perspective, &mut tensor);
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.layout.size]
    }

    /// Every bid plus challenge, indexed by `Action::index`.
    fn action_space_size(&self) -> usize {
        self.config.total_bids() + 1
    }

    fn player_count(&self) -> usize {
        self.config.player_count
    }
}
