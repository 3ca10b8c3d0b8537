use super::*;
use std::collections::BTreeMap;

/// Cuts a raw log stream into per-hand segments and parses each one.
///
/// A segment opens at every boundary line and runs to the next one. Blank
/// lines, separator lines and anything before the first boundary are
/// dropped. A segment that fails to parse is logged and counted, never
/// fatal. Hands sharing an id are kept side by side in arrival order.
pub struct Splitter<'p> {
    parser: HandParser<'p>,
    hands: BTreeMap<String, Vec<Hand>>,
    failures: usize,
}

impl From<Format> for Splitter<'static> {
    fn from(format: Format) -> Self {
        Self::new(HandParser::from(format))
    }
}

impl<'p> Splitter<'p> {
    pub fn new(parser: HandParser<'p>) -> Self {
        Self {
            parser,
            hands: BTreeMap::new(),
            failures: 0,
        }
    }

    /// Feeds one source, e.g. one file. Segments never span two calls.
    pub fn add_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = self.parser.patterns();
        let mut segment = Vec::<String>::new();
        for line in lines {
            let line = line
                .as_ref()
                .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
            if line.is_empty() {
                continue;
            }
            if patterns.separator.as_ref().is_some_and(|re| re.is_match(line)) {
                continue;
            }
            if patterns.boundary.is_match(line) {
                self.flush(&mut segment);
            } else if segment.is_empty() {
                log::trace!("{:<32}{:<32}", "dropping preamble", line);
                continue;
            }
            segment.push(line.to_string());
        }
        self.flush(&mut segment);
    }

    fn flush(&mut self, segment: &mut Vec<String>) {
        if segment.is_empty() {
            return;
        }
        match self.parser.parse(segment.as_slice()) {
            Ok(hand) => self
                .hands
                .entry(hand.id().to_string())
                .or_default()
                .push(hand),
            Err(e) => {
                self.failures += 1;
                log::debug!("{:<32}{:<32}", "dropping hand", e);
                log::trace!("{:<32}{:<32}", "dropped header", segment[0]);
            }
        }
        segment.clear();
    }

    /// Parsed hands by id.
    pub fn hands(&self) -> &BTreeMap<String, Vec<Hand>> {
        &self.hands
    }
    pub fn into_hands(self) -> BTreeMap<String, Vec<Hand>> {
        self.hands
    }
    /// Segments that failed to parse so far.
    pub fn failures(&self) -> usize {
        self.failures
    }
    /// Number of parsed hands, counting duplicates.
    pub fn len(&self) -> usize {
        self.hands.values().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}
