use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Rank and suit bucket counts over a set of cards.
///
/// Every pattern the classifier looks for (pairs, trips, flushes, straight
/// windows) is a predicate over these buckets, so a histogram is built once
/// per card set and queried many times.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Histogram {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
}

impl Histogram {
    pub fn ranks(&self) -> &[u8; Rank::COUNT] {
        &self.ranks
    }
    pub fn suits(&self) -> &[u8; Suit::COUNT] {
        &self.suits
    }
    pub fn count(&self, rank: Rank) -> u8 {
        self.ranks[rank as usize]
    }
    pub fn size(&self) -> usize {
        self.ranks.iter().map(|&n| n as usize).sum()
    }
    pub fn highest(&self) -> Option<Rank> {
        self.ranks
            .iter()
            .rposition(|&n| n > 0)
            .map(|i| Rank::from(i as u8))
    }

    /// Rank buckets with the ace copied in front of the deuce,
    /// so A-2-3-4-5 reads as five consecutive buckets.
    pub fn wheel(&self) -> [u8; Rank::COUNT + 1] {
        let mut wheel = [0; Rank::COUNT + 1];
        wheel[0] = self.ranks[Rank::Ace as usize];
        wheel[1..].copy_from_slice(&self.ranks);
        wheel
    }
    /// All ten 5-bucket windows of the wheel, low to high.
    pub fn windows(&self) -> impl Iterator<Item = [u8; 5]> {
        let wheel = self.wheel();
        (0..=wheel.len() - 5).map(move |i| {
            let mut window = [0; 5];
            window.copy_from_slice(&wheel[i..i + 5]);
            window
        })
    }
    /// Longest run of consecutive non-empty wheel buckets.
    pub fn run(&self) -> usize {
        self.wheel()
            .iter()
            .fold((0, 0), |(best, run), &n| match n {
                0 => (best, 0),
                _ => (best.max(run + 1), run + 1),
            })
            .0
    }
}

impl From<&[Card]> for Histogram {
    fn from(cards: &[Card]) -> Self {
        cards.iter().fold(Self::default(), |mut histogram, card| {
            histogram.ranks[card.rank() as usize] += 1;
            histogram.suits[card.suit() as usize] += 1;
            histogram
        })
    }
}
