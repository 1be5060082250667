use yonmoku_core::{COLS, Column, MOVES_PER_TURN, Moves};

/// Local accumulation of one player's column picks before they are
/// broadcast as a turn submission. Drafting is purely local: nothing
/// reaches the shared stream until the completed draft is taken.
///
/// A column may be picked at most twice per turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveDraft {
    picks: Moves,
}

impl MoveDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picks(&self) -> &[Column] {
        &self.picks
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() == MOVES_PER_TURN
    }

    /// Adds a column pick, returning whether it was accepted.
    pub fn pick(&mut self, column: Column) -> bool {
        if self.is_complete() || column >= COLS {
            return false;
        }

        let repeats = self.picks.iter().filter(|&&pick| pick == column).count();
        if repeats >= MOVES_PER_TURN - 1 {
            return false;
        }

        self.picks.push(column);
        true
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Hands the completed submission to the caller and empties the
    /// draft; `None` while picks are still missing.
    pub fn take(&mut self) -> Option<Moves> {
        self.is_complete().then(|| core::mem::take(&mut self.picks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_up_to_three_picks() {
        let mut draft = MoveDraft::new();

        assert!(draft.pick(0));
        assert!(draft.pick(3));
        assert!(!draft.is_complete());
        assert!(draft.pick(6));

        assert!(draft.is_complete());
        assert!(!draft.pick(1));
        assert_eq!(draft.picks(), [0, 3, 6]);
    }

    #[test]
    fn rejects_a_third_pick_of_the_same_column() {
        let mut draft = MoveDraft::new();

        assert!(draft.pick(2));
        assert!(draft.pick(2));
        assert!(!draft.pick(2));
        assert!(draft.pick(4));
    }

    #[test]
    fn rejects_out_of_range_columns() {
        let mut draft = MoveDraft::new();

        assert!(!draft.pick(COLS));
        assert!(draft.picks().is_empty());
    }

    #[test]
    fn take_returns_only_a_complete_draft() {
        let mut draft = MoveDraft::new();
        draft.pick(1);

        assert_eq!(draft.take(), None);

        draft.pick(1);
        draft.pick(5);

        assert_eq!(draft.take(), Some(Moves::from_slice(&[1, 1, 5])));
        assert!(draft.picks().is_empty());
    }

    #[test]
    fn clear_discards_partial_picks() {
        let mut draft = MoveDraft::new();
        draft.pick(0);
        draft.pick(1);

        draft.clear();

        assert!(draft.picks().is_empty());
        assert!(draft.pick(0));
    }
}
