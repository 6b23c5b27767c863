//! User-triggerable actions.
//!
//! Every key binding resolves to an [`Action`]. TOML keymap files use the
//! snake-case identifiers returned by [`Action::id`]; [`Action::from_id`]
//! resolves them at load time.

/// Every user-triggerable action in fsnek.
///
/// Variants carry no parameters. Context (cursor row, visual range, gesture
/// state) is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    /// Jump to the first row. Bound to `g`, which only fires on a double tap.
    CursorTop,
    CursorBottom,
    Activate,
    Ascend,
    // Selection
    VisualToggle,
    Cancel,
    // File operations
    /// Queue a delete. Double tap on the cursor row, single press in visual mode.
    Delete,
    /// Yank flash. Double tap on the cursor row, single press in visual mode.
    Yank,
    RenameInsert,
    RenameAppend,
    RenameAppendEnd,
    // System
    Quit,
}

impl Action {
    /// Snake-case identifier used in `keymap.toml`.
    pub fn id(self) -> &'static str {
        match self {
            Self::CursorUp => "cursor_up",
            Self::CursorDown => "cursor_down",
            Self::CursorTop => "cursor_top",
            Self::CursorBottom => "cursor_bottom",
            Self::Activate => "activate",
            Self::Ascend => "ascend",
            Self::VisualToggle => "visual_toggle",
            Self::Cancel => "cancel",
            Self::Delete => "delete",
            Self::Yank => "yank",
            Self::RenameInsert => "rename_insert",
            Self::RenameAppend => "rename_append",
            Self::RenameAppendEnd => "rename_append_end",
            Self::Quit => "quit",
        }
    }

    /// Resolves a snake-case identifier back to an action.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL.iter().copied().find(|a| a.id() == id)
    }
}

/// Every action, in declaration order.
pub const ALL: &[Action] = &[
    Action::CursorUp,
    Action::CursorDown,
    Action::CursorTop,
    Action::CursorBottom,
    Action::Activate,
    Action::Ascend,
    Action::VisualToggle,
    Action::Cancel,
    Action::Delete,
    Action::Yank,
    Action::RenameInsert,
    Action::RenameAppend,
    Action::RenameAppendEnd,
    Action::Quit,
];
