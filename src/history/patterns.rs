use super::*;
use crate::Chips;
use crate::cards::Street;
use regex::Regex;
use std::sync::LazyLock;

/// Chip amount with optional currency sign and thousands separators.
const MONEY: &str = r"[$€£]?[\d,]+(?:\.\d+)?";

/// Line prefixes that open each section of a hand.
#[derive(Debug, Clone)]
pub struct Markers {
    pub hole_cards: &'static str,
    pub flop: &'static str,
    pub turn: &'static str,
    pub river: &'static str,
    pub summary: &'static str,
    /// Opens a run-it-twice runout; streets after it are not recorded.
    pub runout: Option<&'static str>,
    /// Optional line right after the summary total.
    pub board: Option<&'static str>,
}

impl Markers {
    /// Prefix of the line that opens `street`.
    pub fn street(&self, street: Street) -> &'static str {
        match street {
            Street::Pref => self.hole_cards,
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::Rive => self.river,
        }
    }
}

/// Every regular expression the parser needs for one log format.
///
/// Capture groups are named so that both formats can share one parser:
/// `id`, `game`, `sb`, `bb` for headers and stakes; `seat`, `name`,
/// `chips` for seats; `name`, `amount` for actions; `cards` for boards and
/// reveals; `pot`, `rake` for the summary total. Groups that a format
/// lacks (an 888 header has no stakes, an 888 total has no rake) are
/// simply absent.
#[derive(Debug)]
pub struct Patterns {
    pub boundary: Regex,
    pub separator: Option<Regex>,
    pub header: Regex,
    pub stakes: Option<Regex>,
    pub button: Regex,
    pub seat: Regex,
    pub small_blind: Regex,
    pub big_blind: Regex,
    pub reveal: Regex,
    pub fold: Regex,
    pub check: Regex,
    pub call: Regex,
    pub bet: Regex,
    pub raise: Regex,
    pub flop: Regex,
    pub turn: Regex,
    pub river: Regex,
    pub total: Regex,
    /// Per-player lines closing the summary; the first other line ends the hand.
    pub roster: Regex,
    pub showdown: Regex,
    pub markers: Markers,
    /// Positional annotations appended to names in summary lines.
    pub suffixes: &'static [&'static str],
    pub noise: Vec<(Noise, Regex)>,
}

impl Patterns {
    /// PokerStars cash-game logs.
    pub fn pokerstars() -> Self {
        Self {
            boundary: re(r"^[\w ]*Hand #\d+:"),
            separator: Some(re(r"^Hand #\d+$")),
            header: re(&format!(
                r"Hand #(?P<id>\d+):\s+(?P<game>[^(]+?)\s+\((?P<sb>{MONEY})/(?P<bb>{MONEY})"
            )),
            stakes: None,
            button: re(r"^Table .*Seat #(?P<seat>\d+) is the button"),
            seat: re(&format!(
                r"^Seat (?P<seat>\d+): (?P<name>.*) \((?P<chips>{MONEY}) in chips"
            )),
            small_blind: re(r"^(?P<name>.*): posts small blind"),
            big_blind: re(r"^(?P<name>.*): posts big blind"),
            reveal: re(r"^Dealt to (?P<name>.*) \[(?P<cards>[^\]]*)\]"),
            fold: re(r"^(?P<name>.*): folds"),
            check: re(r"^(?P<name>.*): checks"),
            call: re(&format!(r"^(?P<name>.*): calls (?P<amount>{MONEY})")),
            bet: re(&format!(r"^(?P<name>.*): bets (?P<amount>{MONEY})")),
            raise: re(&format!(r"^(?P<name>.*): raises {MONEY} to (?P<amount>{MONEY})")),
            flop: re(r"^\*\*\* FLOP \*\*\* \[(?P<cards>[^\]]*)\]"),
            turn: re(r"^\*\*\* TURN \*\*\* \[[^\]]*\] \[(?P<cards>[^\]]*)\]"),
            river: re(r"^\*\*\* RIVER \*\*\* \[[^\]]*\] \[(?P<cards>[^\]]*)\]"),
            total: re(&format!(r"^Total pot (?P<pot>{MONEY}).*?Rake (?P<rake>{MONEY})")),
            roster: re(r"^Seat \d+: "),
            showdown: re(r"^Seat \d+: (?P<name>.*) showed \[(?P<cards>[^\]]*)\]"),
            markers: Markers {
                hole_cards: "*** HOLE CARDS ***",
                flop: "*** FLOP ***",
                turn: "*** TURN ***",
                river: "*** RIVER ***",
                summary: "*** SUMMARY ***",
                runout: Some("*** FIRST FLOP ***"),
                board: Some("Board"),
            },
            suffixes: &[" (button)", " (small blind)", " (big blind)"],
            noise: vec![
                (Noise::Chat, re(r#"^[^:]+ said, ""#)),
                (Noise::DoesNotShow, re(r"doesn't show hand")),
                (Noise::LeavesTable, re(r"leaves the table")),
                (Noise::UncalledBet, re(r"^Uncalled bet")),
                (Noise::Disconnected, re(r"is disconnected")),
                (Noise::Connected, re(r"is connected")),
                (Noise::Collected, re(r" collected ")),
                (Noise::TimedOut, re(r"has timed out")),
                (Noise::JoinsTable, re(r"joins the table at seat")),
                (Noise::Removed, re(r"was removed from the table for failing to post")),
                (Noise::WaitsForButton, re(r"will be allowed to play after the button")),
                (Noise::SitsOut, re(r"(?:sits out|is sitting out)")),
                (Noise::Shows, re(r": shows \[")),
                (Noise::Mucks, re(r": mucks hand")),
                (Noise::Marker, re(r"^\*\*\*")),
            ],
        }
    }

    /// 888poker ("Pacific") cash-game logs.
    pub fn pacific() -> Self {
        Self {
            boundary: re(r"^#Game No : \d+"),
            separator: None,
            header: re(r"^#Game No : (?P<id>\d+)"),
            stakes: Some(re(&format!(
                r"^(?P<sb>{MONEY})/(?P<bb>{MONEY}) Blinds (?P<game>.+?) -"
            ))),
            button: re(r"^Seat (?P<seat>\d+) is the button"),
            seat: re(&format!(
                r"^Seat (?P<seat>\d+): (?P<name>.*) \( (?P<chips>{MONEY}) \)"
            )),
            small_blind: re(r"^(?P<name>.*) posts small blind"),
            big_blind: re(r"^(?P<name>.*) posts big blind"),
            reveal: re(r"^(?P<name>.*) shows \[(?P<cards>[^\]]*)\]"),
            fold: re(r"^(?P<name>.*) folds"),
            check: re(r"^(?P<name>.*) checks"),
            call: re(&format!(r"^(?P<name>.*) calls \[?(?P<amount>{MONEY})")),
            bet: re(&format!(r"^(?P<name>.*) bets \[?(?P<amount>{MONEY})")),
            raise: re(&format!(r"^(?P<name>.*) raises \[?(?P<amount>{MONEY})")),
            flop: re(r"^\*\* Dealing flop \*\* \[(?P<cards>[^\]]*)\]"),
            turn: re(r"^\*\* Dealing turn \*\* \[(?P<cards>[^\]]*)\]"),
            river: re(r"^\*\* Dealing river \*\* \[(?P<cards>[^\]]*)\]"),
            total: re(&format!(r"^.* collected \[ ?(?P<pot>{MONEY}) ?\]")),
            roster: re(r"^.+ (?:collected \[|did not show|shows \[|showed \[|mucks )"),
            showdown: re(r"^(?P<name>.*) (?:shows|showed) \[(?P<cards>[^\]]*)\]"),
            markers: Markers {
                hole_cards: "** Dealing down cards **",
                flop: "** Dealing flop **",
                turn: "** Dealing turn **",
                river: "** Dealing river **",
                summary: "** Summary **",
                runout: None,
                board: None,
            },
            suffixes: &[],
            noise: vec![
                (Noise::DoesNotShow, re(r"did not show his hand")),
                (Noise::LeavesTable, re(r"has left the table")),
                (Noise::JoinsTable, re(r"has joined the table")),
                (Noise::SitsOut, re(r"is sitting out")),
                (Noise::Mucks, re(r" mucks ")),
                (Noise::Shows, re(r" shows \[")),
                (Noise::Collected, re(r" collected ")),
                (Noise::Marker, re(r"^\*\*")),
            ],
        }
    }

    /// Sorts one in-street line into an action, known noise, or neither.
    ///
    /// Chat goes first, since quoted text may look like an action. Other
    /// noise is only tried once no action matches.
    pub fn classify(&self, line: &str) -> Line {
        None.or_else(|| self.noise(line, |noise| noise == Noise::Chat))
            .or_else(|| self.action(line).map(Line::Action))
            .or_else(|| self.noise(line, |noise| noise != Noise::Chat))
            .unwrap_or(Line::Unrecognized)
    }

    fn action(&self, line: &str) -> Option<Action> {
        None.or_else(|| self.passive(&self.fold, line, ActionKind::Fold))
            .or_else(|| self.wager(&self.call, line, ActionKind::Call))
            .or_else(|| self.wager(&self.bet, line, ActionKind::Bet))
            .or_else(|| self.passive(&self.check, line, ActionKind::Check))
            .or_else(|| self.wager(&self.raise, line, ActionKind::Raise))
    }
    fn noise(&self, line: &str, only: impl Fn(Noise) -> bool) -> Option<Line> {
        self.noise
            .iter()
            .filter(|(noise, _)| only(*noise))
            .find(|(_, re)| re.is_match(line))
            .map(|(noise, _)| Line::Noise(*noise))
    }

    /// Removes positional annotations, which may be stacked.
    pub fn strip<'a>(&self, mut name: &'a str) -> &'a str {
        while let Some(shorter) = self
            .suffixes
            .iter()
            .find_map(|suffix| name.strip_suffix(suffix))
        {
            name = shorter;
        }
        name
    }

    /// The pattern that reads the cards dealt on `street`.
    pub fn board(&self, street: Street) -> Option<&Regex> {
        match street {
            Street::Pref => None,
            Street::Flop => Some(&self.flop),
            Street::Turn => Some(&self.turn),
            Street::Rive => Some(&self.river),
        }
    }

    fn passive(&self, re: &Regex, line: &str, kind: ActionKind) -> Option<Action> {
        re.captures(line)
            .map(|caps| Action::passive(self.strip(&caps["name"]), kind))
    }
    fn wager(&self, re: &Regex, line: &str, kind: ActionKind) -> Option<Action> {
        let caps = re.captures(line)?;
        let amount = money(&caps["amount"]).ok()?;
        Some(Action::new(self.strip(&caps["name"]), kind, amount))
    }
}

/// Parses a logged amount, ignoring currency sign and thousands separators.
pub fn money(s: &str) -> Result<Chips, ParseError> {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .parse::<Chips>()
        .map_err(|_| ParseError::MalformedLine(s.to_string()))
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid hand-history pattern")
}

static POKERSTARS: LazyLock<Patterns> = LazyLock::new(Patterns::pokerstars);
static PACIFIC: LazyLock<Patterns> = LazyLock::new(Patterns::pacific);

/// Supported log formats.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    #[cfg_attr(feature = "cli", value(name = "pokerstars"))]
    PokerStars,
    #[cfg_attr(feature = "cli", value(name = "pacific"))]
    Pacific,
}

impl Format {
    /// Compiled once per process and shared by every parser.
    pub fn patterns(&self) -> &'static Patterns {
        match self {
            Self::PokerStars => &POKERSTARS,
            Self::Pacific => &PACIFIC,
        }
    }
    /// Namespaces hand ids so that sources never collide.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::PokerStars => "ps",
            Self::Pacific => "pp",
        }
    }
}
