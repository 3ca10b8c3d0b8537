use super::*;
use crate::cards::Street;
use crate::history::ActionKind;

/// How long a count lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Hand,
    Street,
}

/// Counts actions of one kind, for the whole hand or the current street.
#[derive(Debug, Clone)]
pub struct Tally {
    kind: ActionKind,
    scope: Scope,
    count: usize,
}

impl Tally {
    pub fn new(kind: ActionKind, scope: Scope) -> Self {
        Self {
            kind,
            scope,
            count: 0,
        }
    }
    /// One tally per voluntary action kind, in feature-column order.
    pub fn each(scope: Scope) -> [Self; 5] {
        ActionKind::choices().map(|kind| Self::new(kind, scope))
    }
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
    pub fn value(&self) -> usize {
        self.count
    }
}

impl Feature for Tally {
    fn street_start(&mut self, _: Street) {
        if self.scope == Scope::Street {
            self.count = 0;
        }
    }
    fn handle_action(&mut self, event: &Event) {
        if event.action.kind() == self.kind {
            self.count += 1;
        }
    }
}
