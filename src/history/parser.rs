use super::*;
use crate::Chips;
use crate::cards::Card;
use crate::cards::Street;

/// Read position within one hand's lines.
struct Cursor<'a, S> {
    lines: &'a [S],
    index: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        Self { lines, index: 0 }
    }
    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.index).map(AsRef::as_ref)
    }
    fn advance(&mut self) {
        self.index += 1;
    }
    /// Moves to the first line satisfying `stop`, leaving the cursor on it.
    fn seek(&mut self, stop: impl Fn(&str) -> bool) -> Option<&'a str> {
        while let Some(line) = self.peek() {
            if stop(line) {
                return Some(line);
            }
            self.advance();
        }
        None
    }
}

/// Turns the lines of exactly one hand into a [`Hand`].
///
/// Walks the record top to bottom in a single pass:
/// header and stakes, seats, blind posts, hole-card marker and an optional
/// reveal, one action block per dealt street, then the summary with its
/// total and showdown reveals. Anything unrecognized inside an action block
/// is skipped; anything missing from the mandatory sections fails the hand.
pub struct HandParser<'p> {
    patterns: &'p Patterns,
    prefix: String,
}

impl From<Format> for HandParser<'static> {
    fn from(format: Format) -> Self {
        Self::new(format.patterns(), format.prefix())
    }
}

impl<'p> HandParser<'p> {
    pub fn new(patterns: &'p Patterns, prefix: impl Into<String>) -> Self {
        Self {
            patterns,
            prefix: prefix.into(),
        }
    }

    pub fn patterns(&self) -> &'p Patterns {
        self.patterns
    }

    /// `lines` must start with the header and carry no blank lines.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Hand, ParseError> {
        let ref mut cursor = Cursor::new(lines);
        let mut hand = self.header(cursor)?;
        self.seats(cursor, &mut hand)?;
        self.blinds(cursor, &mut hand)?;
        self.hole(cursor, &mut hand)?;
        self.streets(cursor, &mut hand)?;
        self.summary(cursor, &mut hand)?;
        Ok(hand)
    }

    /// Header line plus everything up to the first seat: stakes when the
    /// header lacks them, and the button seat.
    fn header<S: AsRef<str>>(&self, cursor: &mut Cursor<S>) -> Result<Hand, ParseError> {
        let first = cursor.peek().unwrap_or_default();
        let malformed = || ParseError::MalformedHeader(first.to_string());
        let caps = self.patterns.header.captures(first).ok_or_else(malformed)?;
        let id = format!("{}_{}", self.prefix, &caps["id"]);
        let mut game = caps.name("game").map(|m| GameType::from(m.as_str()));
        let mut stakes = Self::stakes(&caps)?;
        let mut button = None;
        cursor.advance();
        while let Some(line) = cursor.peek() {
            if self.patterns.seat.is_match(line) {
                break;
            }
            if let Some(caps) = self.patterns.button.captures(line) {
                button = Some(seat(&caps["seat"], line)?);
            }
            if let Some(caps) = stakes
                .is_none()
                .then_some(self.patterns.stakes.as_ref())
                .flatten()
                .and_then(|re| re.captures(line))
            {
                stakes = Self::stakes(&caps)?;
                game = caps.name("game").map(|m| GameType::from(m.as_str()));
            }
            cursor.advance();
        }
        let (small, big) = stakes.ok_or_else(malformed)?;
        let mut hand = Hand::new(id, game.unwrap_or(GameType::Unknown), small, big);
        hand.button = button;
        Ok(hand)
    }

    fn stakes(caps: &regex::Captures) -> Result<Option<(Chips, Chips)>, ParseError> {
        match (caps.name("sb"), caps.name("bb")) {
            (Some(sb), Some(bb)) => Ok(Some((money(sb.as_str())?, money(bb.as_str())?))),
            _ => Ok(None),
        }
    }

    fn seats<S: AsRef<str>>(&self, cursor: &mut Cursor<S>, hand: &mut Hand) -> Result<(), ParseError> {
        while let Some(caps) = cursor.peek().and_then(|line| self.patterns.seat.captures(line)) {
            let line = cursor.peek().unwrap_or_default();
            let seat = seat(&caps["seat"], line)?;
            let chips = money(&caps["chips"])?;
            hand.seat(Player::new(seat, &caps["name"], chips));
            cursor.advance();
        }
        match hand.players.is_empty() {
            true => Err(ParseError::MissingSection(Section::Seats)),
            false => Ok(()),
        }
    }

    /// Synthesizes the two forced bets that open every preflop list.
    fn blinds<S: AsRef<str>>(&self, cursor: &mut Cursor<S>, hand: &mut Hand) -> Result<(), ParseError> {
        for (re, kind, amount, section) in [
            (&self.patterns.small_blind, ActionKind::SmallBlind, hand.small_blind, Section::SmallBlind),
            (&self.patterns.big_blind, ActionKind::BigBlind, hand.big_blind, Section::BigBlind),
        ] {
            let line = cursor
                .seek(|line| re.is_match(line))
                .ok_or(ParseError::MissingSection(section))?;
            let caps = re
                .captures(line)
                .ok_or_else(|| ParseError::MalformedLine(line.to_string()))?;
            hand.act(Street::Pref, Action::new(&caps["name"], kind, amount));
            cursor.advance();
        }
        Ok(())
    }

    fn hole<S: AsRef<str>>(&self, cursor: &mut Cursor<S>, hand: &mut Hand) -> Result<(), ParseError> {
        let marker = self.patterns.markers.hole_cards;
        cursor
            .seek(|line| line.starts_with(marker))
            .ok_or(ParseError::MissingSection(Section::HoleCards))?;
        cursor.advance();
        if let Some(caps) = cursor.peek().and_then(|line| self.patterns.reveal.captures(line)) {
            hand.reveal(self.patterns.strip(&caps["name"]), cards(&caps["cards"])?)?;
            cursor.advance();
        }
        Ok(())
    }

    /// Preflop actions, then each dealt street in order. A runout marker
    /// after preflop skips straight to the summary with boards left empty.
    fn streets<S: AsRef<str>>(&self, cursor: &mut Cursor<S>, hand: &mut Hand) -> Result<(), ParseError> {
        self.actions(cursor, hand, Street::Pref);
        if let Some(runout) = self.patterns.markers.runout {
            if cursor.peek().is_some_and(|line| line.starts_with(runout)) {
                log::trace!("{:<32}{:<32}", "skipping runout", hand.id());
                let summary = self.patterns.markers.summary;
                cursor.seek(|line| line.starts_with(summary));
                return Ok(());
            }
        }
        for &street in &Street::all()[1..] {
            let marker = self.patterns.markers.street(street);
            match cursor.peek() {
                Some(line) if line.starts_with(marker) => {
                    self.deal(line, hand, street)?;
                    cursor.advance();
                    self.actions(cursor, hand, street);
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Reads the new cards of `street` and stores the cumulative board.
    fn deal(&self, line: &str, hand: &mut Hand, street: Street) -> Result<(), ParseError> {
        let malformed = || ParseError::MalformedLine(line.to_string());
        let caps = self
            .patterns
            .board(street)
            .and_then(|re| re.captures(line))
            .ok_or_else(malformed)?;
        let previous: &[Card] = match street {
            Street::Turn => hand.flop(),
            Street::Rive => hand.turn(),
            _ => &[],
        };
        let board = previous
            .iter()
            .copied()
            .chain(cards(&caps["cards"])?)
            .collect::<Vec<Card>>();
        if board.len() != street.n_observed() {
            return Err(malformed());
        }
        hand.deal(street, board);
        Ok(())
    }

    /// Collects actions until the next section marker, dropping noise.
    fn actions<S: AsRef<str>>(&self, cursor: &mut Cursor<S>, hand: &mut Hand, street: Street) {
        let markers = &self.patterns.markers;
        let stops = [
            Some(markers.summary),
            markers.runout,
            street.next().map(|next| markers.street(next)),
        ];
        let stops = stops.into_iter().flatten().collect::<Vec<&str>>();
        while let Some(line) = cursor.peek() {
            if stops.iter().any(|stop| line.starts_with(stop)) {
                break;
            }
            match self.patterns.classify(line) {
                Line::Action(action) => hand.act(street, action),
                Line::Noise(_) => {}
                Line::Unrecognized => log::trace!("{:<32}{:<32}", "unrecognized line", line),
            }
            cursor.advance();
        }
    }

    /// Total pot and rake, an optional board line, then showdown reveals.
    fn summary<S: AsRef<str>>(&self, cursor: &mut Cursor<S>, hand: &mut Hand) -> Result<(), ParseError> {
        let markers = &self.patterns.markers;
        match cursor.peek() {
            Some(line) if line.starts_with(markers.summary) => cursor.advance(),
            _ => return Err(ParseError::MissingSection(Section::Summary)),
        }
        let caps = cursor
            .peek()
            .and_then(|line| self.patterns.total.captures(line))
            .ok_or(ParseError::MissingSection(Section::SummaryTotal))?;
        hand.total_pot = money(&caps["pot"])?;
        hand.rake = match caps.name("rake") {
            Some(rake) => money(rake.as_str())?,
            None => 0.,
        };
        cursor.advance();
        if let Some(board) = markers.board {
            if cursor.peek().is_some_and(|line| line.starts_with(board)) {
                cursor.advance();
            }
        }
        while let Some(line) = cursor.peek().filter(|line| self.patterns.roster.is_match(line)) {
            if let Some(caps) = self.patterns.showdown.captures(line) {
                hand.reveal(self.patterns.strip(&caps["name"]), cards(&caps["cards"])?)?;
            }
            cursor.advance();
        }
        Ok(())
    }
}

fn seat(s: &str, line: &str) -> Result<usize, ParseError> {
    s.parse::<usize>()
        .map_err(|_| ParseError::MalformedLine(line.to_string()))
}

fn cards(s: &str) -> Result<Vec<Card>, ParseError> {
    Card::parse(s).map_err(ParseError::Card)
}
