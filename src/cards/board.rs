use super::card::Card;
use super::histogram::Histogram;
use super::rank::Rank;
use super::suit::Suit;

/// Board feature columns: ranks high to low, then suits.
const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
];
const SUITS: [Suit; 4] = [Suit::S, Suit::H, Suit::D, Suit::C];

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board(Histogram);

impl Board {
    pub fn names() -> [&'static str; 17] {
        [
            "board_ace_amount",
            "board_king_amount",
            "board_queen_amount",
            "board_jack_amount",
            "board_10_amount",
            "board_9_amount",
            "board_8_amount",
            "board_7_amount",
            "board_6_amount",
            "board_5_amount",
            "board_4_amount",
            "board_3_amount",
            "board_2_amount",
            "board_spades_amount",
            "board_hearts_amount",
            "board_diamonds_amount",
            "board_clubs_amount",
        ]
    }
    /// Per-rank then per-suit card counts, in [`Board::names`] order.
    pub fn features(&self) -> [u8; 17] {
        let mut features = [0; 17];
        for (i, rank) in RANKS.iter().enumerate() {
            features[i] = self.0.count(*rank);
        }
        for (i, suit) in SUITS.iter().enumerate() {
            features[RANKS.len() + i] = self.0.suits()[*suit as usize];
        }
        features
    }
}

impl From<&[Card]> for Board {
    fn from(cards: &[Card]) -> Self {
        debug_assert!(cards.len() != 1);
        debug_assert!(cards.len() != 2);
        debug_assert!(cards.len() <= 5);
        Self(Histogram::from(cards))
    }
}
