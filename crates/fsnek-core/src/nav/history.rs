//! Cursor history across directory descents.

/// Stack of saved cursor rows, one per directory descent.
///
/// Every descent pushes the cursor row the user left behind; every ascent
/// pops it so the highlight can be restored. The stack depth therefore
/// always equals the browsing depth below the navigation floor. Every
/// mutation returns a **new** `CursorHistory`, following the project-wide
/// immutability convention.
#[derive(Debug, Clone, Default)]
pub struct CursorHistory {
    rows: Vec<usize>,
}

impl CursorHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the cursor row being left behind. Returns a new history.
    pub fn push(&self, row: usize) -> Self {
        let mut rows = self.rows.clone();
        rows.push(row);
        Self { rows }
    }

    /// Pops the most recently saved row. Returns the new history and the
    /// row to restore, or `None` if the stack is empty (the browser falls
    /// back to row 0 in that case).
    pub fn pop(&self) -> Option<(Self, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let mut rows = self.rows.clone();
        let row = rows.pop()?;
        Some((Self { rows }, row))
    }

    /// Number of saved rows — the browsing depth below the floor.
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when no rows are saved.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = CursorHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.depth(), 0);
    }

    #[test]
    fn push_does_not_mutate_original() {
        let history = CursorHistory::new();
        let _new_history = history.push(3);
        assert!(history.is_empty());
    }

    #[test]
    fn pop_returns_pushed_row() {
        let history = CursorHistory::new().push(7);

        let (history, row) = history.pop().unwrap();
        assert_eq!(row, 7);
        assert!(history.is_empty());
    }

    #[test]
    fn pop_on_empty_returns_none() {
        assert!(CursorHistory::new().pop().is_none());
    }

    #[test]
    fn rows_pop_in_reverse_push_order() {
        let history = CursorHistory::new().push(1).push(4).push(9);
        assert_eq!(history.depth(), 3);

        let (history, row) = history.pop().unwrap();
        assert_eq!(row, 9);
        let (history, row) = history.pop().unwrap();
        assert_eq!(row, 4);
        let (history, row) = history.pop().unwrap();
        assert_eq!(row, 1);
        assert!(history.pop().is_none());
    }
}
