/// All possible actions in the application (command pattern)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // Navigation
    GoBack,
    Quit,

    // List navigation (quiz list and answer list)
    ListUp,
    ListDown,
    ListSelect,

    // Quiz flow
    Submit,
    Next,
    Restart,

    // UI toggles
    ToggleHelp,

    // Error handling
    ShowError(String),
    DismissError,

    // Render request
    Render,
}
