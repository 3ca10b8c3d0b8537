use super::card::Card;
use super::draw::Draw;
use super::histogram::Histogram;
use super::made::MadeHand;
use super::suit::Suit;

/// Classifies a player's holding against the visible board.
///
/// Three histograms are kept: the whole seven-card (or fewer) set, the board
/// alone, and the hole cards alone. Made-hand and draw searches walk their
/// patterns strongest first and stop at the first hit, the same way a full
/// evaluator short-circuits from straight flush down to high card.
#[derive(Debug, Clone)]
pub struct Combination {
    all: Histogram,
    board: Histogram,
    hole: Histogram,
}

impl Combination {
    /// `board` holds 0..=5 community cards, `hole` the player's two cards.
    pub fn new(board: &[Card], hole: &[Card]) -> Self {
        debug_assert!(board.len() <= 5);
        debug_assert!(!hole.is_empty());
        let cards = board.iter().chain(hole.iter()).copied().collect::<Vec<_>>();
        Self {
            all: Histogram::from(cards.as_slice()),
            board: Histogram::from(board),
            hole: Histogram::from(hole),
        }
    }

    pub fn names() -> [&'static str; 1] {
        ["ready_combination"]
    }

    pub fn made(&self) -> MadeHand {
        None.or_else(|| self.is_straight_flush().then_some(MadeHand::StraightFlush))
            .or_else(|| self.is_four_oak().then_some(MadeHand::FourOAK))
            .or_else(|| self.is_full_house().then_some(MadeHand::FullHouse))
            .or_else(|| self.is_flush().then_some(MadeHand::Flush))
            .or_else(|| self.is_straight().then_some(MadeHand::Straight))
            .or_else(|| self.is_three_oak().then_some(MadeHand::ThreeOAK))
            .or_else(|| self.is_two_pair().then_some(MadeHand::TwoPair))
            .or_else(|| self.is_one_pair().then_some(MadeHand::OnePair))
            .or_else(|| self.is_high_card().then_some(MadeHand::HighCard))
            .unwrap_or(MadeHand::Air)
    }

    pub fn draw(&self) -> Draw {
        None.or_else(|| self.is_flush_draw().then_some(Draw::FlushDraw))
            .or_else(|| {
                (self.is_backdoor_straight() && self.is_backdoor_flush())
                    .then_some(Draw::DoubleBackdoor)
            })
            .or_else(|| self.is_double_straight_draw().then_some(Draw::DoubleStraightDraw))
            .or_else(|| self.is_gutshot().then_some(Draw::Gutshot))
            .or_else(|| self.is_backdoor_straight().then_some(Draw::BackdoorStraight))
            .or_else(|| self.is_backdoor_flush().then_some(Draw::BackdoorFlush))
            .unwrap_or(Draw::Nothing)
    }

    fn flush_suit(&self) -> Option<Suit> {
        self.all
            .suits()
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    fn n_oak(&self, n: u8) -> usize {
        self.all.ranks().iter().filter(|&&c| c >= n).count()
    }

    /// flush and straight over all seven cards, not necessarily the same five
    fn is_straight_flush(&self) -> bool {
        self.is_flush() && self.is_straight()
    }
    fn is_four_oak(&self) -> bool {
        self.n_oak(4) > 0
    }
    /// a set plus a distinct paired rank; a second set or quads count as the pair
    fn is_full_house(&self) -> bool {
        self.n_oak(3) > 0 && self.n_oak(2) >= 2
    }
    fn is_flush(&self) -> bool {
        self.flush_suit().is_some()
    }
    fn is_straight(&self) -> bool {
        self.all.run() >= 5
    }
    fn is_three_oak(&self) -> bool {
        self.n_oak(3) > 0
    }
    fn is_two_pair(&self) -> bool {
        self.n_oak(2) >= 2
    }
    fn is_one_pair(&self) -> bool {
        self.n_oak(2) > 0
    }
    /// only with a board, and only when a hole card outranks all of it
    fn is_high_card(&self) -> bool {
        match (self.board.highest(), self.hole.highest()) {
            (Some(board), Some(hole)) => hole > board,
            _ => false,
        }
    }

    fn is_flush_draw(&self) -> bool {
        self.all.suits().iter().any(|&n| n == 4)
    }
    /// four of five ranks present with an open end
    fn is_double_straight_draw(&self) -> bool {
        self.all
            .windows()
            .any(|w| present(&w) == 4 && (w[0] == 0 || w[4] == 0))
    }
    /// four of five ranks present with the gap inside
    fn is_gutshot(&self) -> bool {
        self.all
            .windows()
            .any(|w| present(&w) == 4 && w[0] == 1 && w[4] == 1)
    }
    fn is_backdoor_straight(&self) -> bool {
        self.board.size() == 3
            && !self.board.windows().any(|w| present(&w) == 3)
            && self.all.windows().any(|w| present(&w) == 3)
    }
    fn is_backdoor_flush(&self) -> bool {
        self.board.size() == 3
            && !self.board.suits().iter().any(|&n| n == 3)
            && self.all.suits().iter().any(|&n| n == 3)
    }
}

fn present(window: &[u8; 5]) -> usize {
    window.iter().filter(|&&n| n > 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn combination(board: &str, hole: &str) -> Combination {
        Combination::new(&Card::parse(board).unwrap(), &Card::parse(hole).unwrap())
    }
    fn made(board: &str, hole: &str) -> MadeHand {
        combination(board, hole).made()
    }
    fn draw(board: &str, hole: &str) -> Draw {
        combination(board, hole).draw()
    }

    #[test]
    fn straight_flush() {
        assert_eq!(made("Ts Js Qs 2d", "Ks As"), MadeHand::StraightFlush);
        assert_eq!(made("2s 3s 4s 9d", "5s As"), MadeHand::StraightFlush);
    }

    #[test]
    fn flush_and_straight_in_different_cards() {
        assert_eq!(made("9h Th Jh 2h", "Qd Kh"), MadeHand::StraightFlush);
    }

    #[test]
    fn four_oak_over_full_house() {
        assert_eq!(made("As Ah Ad Ks", "Ac Kh"), MadeHand::FourOAK);
    }

    #[test]
    fn full_house_from_two_sets() {
        assert_eq!(made("As Ah Ks Kh 2d", "Ad Kd"), MadeHand::FullHouse);
    }

    #[test]
    fn full_house_over_flush() {
        assert_eq!(made("Kh Ah Ad 9h 2h", "As Kd"), MadeHand::FullHouse);
    }

    #[test]
    fn trips_alone_is_not_full_house() {
        assert_eq!(made("7s 7h 2d", "7d Kc"), MadeHand::ThreeOAK);
    }

    #[test]
    fn flush_over_straight() {
        assert_eq!(made("4h 6h 7h 8h", "9h Ts"), MadeHand::Flush);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(made("2h 3d 4c", "5s Ah"), MadeHand::Straight);
    }

    #[test]
    fn broadway_straight() {
        assert_eq!(made("Td Jc Qh 3s", "Ks Ah"), MadeHand::Straight);
    }

    #[test]
    fn pairs() {
        assert_eq!(made("As Kd 7c", "Ah Kh"), MadeHand::TwoPair);
        assert_eq!(made("As Kd 7c", "Ah 2h"), MadeHand::OnePair);
        assert_eq!(made("6h 4c Kc", "3s 3c"), MadeHand::OnePair);
    }

    #[test]
    fn pocket_pair_preflop() {
        assert_eq!(made("", "3s 3c"), MadeHand::OnePair);
    }

    #[test]
    fn high_card_needs_overcard() {
        assert_eq!(made("9s 5d 2c", "Ah 7h"), MadeHand::HighCard);
        assert_eq!(made("Ks 5d 2c", "Qh 7h"), MadeHand::Air);
    }

    #[test]
    fn preflop_without_pair_is_air() {
        assert_eq!(made("", "5c Kc"), MadeHand::Air);
        assert_eq!(made("", "Ac Kd"), MadeHand::Air);
    }

    #[test]
    fn flush_draw_first() {
        assert_eq!(draw("2h 7h Kc", "9h Ah"), Draw::FlushDraw);
        assert_eq!(draw("2h 7h Kc Jh", "9h 3h"), Draw::Nothing);
    }

    #[test]
    fn open_ended_straight_draw() {
        assert_eq!(draw("5d 6c Kh", "7s 8h"), Draw::DoubleStraightDraw);
    }

    #[test]
    fn gutshot() {
        assert_eq!(draw("5d 6c Kh 2s", "8s 9h"), Draw::Gutshot);
    }

    #[test]
    fn broadway_gutshot() {
        assert_eq!(draw("Td Jc 3h 2s", "Qs Ah"), Draw::Gutshot);
    }

    #[test]
    fn backdoors() {
        assert_eq!(draw("2d 7c Kh", "8h 9h"), Draw::DoubleBackdoor);
        assert_eq!(draw("2d 7c Kh", "8s 9s"), Draw::BackdoorStraight);
        assert_eq!(draw("2d 7c Kh", "Ac 9c"), Draw::BackdoorFlush);
    }

    #[test]
    fn backdoor_needs_exactly_flop() {
        assert_eq!(draw("2d 7c Kh 3s", "Ac 9c"), Draw::Nothing);
    }

    #[test]
    fn backdoor_rejected_when_board_already_has_shape() {
        assert_eq!(draw("2d 3c 4h", "Js Qd"), Draw::Nothing);
        assert_eq!(draw("2d 7d Kd", "Js 4h"), Draw::Nothing);
    }

    #[test]
    fn made_hand_takes_highest_precedence() {
        let ref mut rng = rand::rng();
        let mut deck = Card::deck();
        for _ in 0..2_000 {
            deck.shuffle(rng);
            let n = [0, 3, 4, 5][rand::random_range(0..4)];
            let board = &deck[..n];
            let hole = &deck[n..n + 2];
            let combination = Combination::new(board, hole);
            let hits = [
                combination.is_straight_flush(),
                combination.is_four_oak(),
                combination.is_full_house(),
                combination.is_flush(),
                combination.is_straight(),
                combination.is_three_oak(),
                combination.is_two_pair(),
                combination.is_one_pair(),
                combination.is_high_card(),
                true,
            ];
            let expected = hits
                .iter()
                .position(|&hit| hit)
                .map(|i| MadeHand::all()[i])
                .unwrap();
            assert_eq!(combination.made(), expected);
        }
    }
}
