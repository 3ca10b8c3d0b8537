use super::*;
use crate::Chips;
use crate::cards::Board;
use crate::cards::Combination;
use crate::cards::MadeHand;
use crate::cards::Street;
use crate::history::ActionKind;

/// One observed decision of a tracked player, ready for a dataset.
///
/// Everything is captured before the decision is applied: the pack
/// snapshot, the board counts of the street it was taken on (zero
/// preflop), and the made hand the player was holding at that point.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FeatureRow {
    pub hand_id: String,
    pub player_name: String,
    pub street: Street,
    pub action: ActionKind,
    /// Logged amount in big blinds.
    pub player_bet_size: Chips,
    #[serde(flatten)]
    pub features: Snapshot,
    pub board: [u8; 17],
    pub ready_combination: MadeHand,
}

impl FeatureRow {
    /// Column names in [`FeatureRow::record`] order.
    pub fn header() -> Vec<&'static str> {
        FeaturePack::names()
            .into_iter()
            .chain(Board::names())
            .chain(Combination::names())
            .collect()
    }

    /// Column values, stringified.
    pub fn record(&self) -> Vec<String> {
        [
            self.hand_id.clone(),
            self.player_name.clone(),
            self.street.label().to_string(),
            self.action.label().to_string(),
            self.player_bet_size.to_string(),
        ]
        .into_iter()
        .chain(self.features.values().map(|x| x.to_string()))
        .chain(self.board.map(|n| n.to_string()))
        .chain(std::iter::once(self.ready_combination.label().to_string()))
        .collect()
    }

    pub fn csv_header() -> String {
        Self::header().join(",")
    }

    pub fn to_csv(&self) -> String {
        self.record()
            .iter()
            .map(|field| quote(field))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// RFC 4180 quoting, only where a field needs it.
fn quote(field: &str) -> String {
    match field.contains([',', '"', '\n']) {
        true => format!("\"{}\"", field.replace('"', "\"\"")),
        false => field.to_string(),
    }
}
