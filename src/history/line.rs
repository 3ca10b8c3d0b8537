use super::*;

/// Everything a line between two street markers can turn out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Action(Action),
    Noise(Noise),
    Unrecognized,
}

/// Recognized lines that carry nothing for feature replay.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Noise {
    Chat,
    Collected,
    Connected,
    Disconnected,
    DoesNotShow,
    JoinsTable,
    LeavesTable,
    Marker,
    Mucks,
    Removed,
    Shows,
    SitsOut,
    TimedOut,
    UncalledBet,
    WaitsForButton,
}
