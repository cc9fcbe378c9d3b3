// Defines the actions a key press can produce in the TUI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the month cursor by a signed number of months.
    MoveBy(i64),
    First,
    Last,
    /// Jump to the month containing today.
    Today,
    ToggleHelp,
    Quit,
}
