//! Message types for the application (TEA pattern)

use bizdash_core::ViewId;

use crate::input_key::InputKey;
use crate::views::FormInput;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick from the event loop
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Navigation
    // ─────────────────────────────────────────────────────────
    SwitchView(ViewId),
    NextView,
    PreviousView,

    // ─────────────────────────────────────────────────────────
    // Command Palette
    // ─────────────────────────────────────────────────────────
    OpenCommandPalette,
    CloseCommandPalette,
    PaletteInput(char),
    PaletteBackspace,
    PaletteUp,
    PaletteDown,
    /// Dispatch the highlighted entry (or the query as `ai-query`)
    PaletteSubmit,

    /// Run a shell command by action id
    DispatchCommand {
        action: String,
        payload: Option<String>,
    },

    // ─────────────────────────────────────────────────────────
    // Project / Task Modals
    // ─────────────────────────────────────────────────────────
    OpenProjectModal,
    CloseProjectModal,
    ProjectFormInput(FormInput),
    SubmitProject,

    OpenTaskModal,
    CloseTaskModal,
    TaskFormInput(FormInput),
    SubmitTask,

    // ─────────────────────────────────────────────────────────
    // Feature View (Finance / Reports)
    // ─────────────────────────────────────────────────────────
    NextTab,
    PreviousTab,
    /// 1-based tab number
    SelectTab(usize),

    SelectNext,
    SelectPrevious,

    /// Give the list filter keyboard focus
    StartFilter,
    /// Leave filter input, keeping the query
    EndFilter,
    ClearFilter,
    FilterInput(char),
    FilterBackspace,

    /// Cycle the category (finance) or kind (reports) filter
    CycleRecordFilter,

    OpenCreateForm,
    CloseCreateForm,
    CreateFormInput(FormInput),
    SubmitCreateForm,

    /// Finance: pending -> completed. Reports: generating -> ready.
    CompleteSelected,
    DeleteSelected,

    DismissNotice,
}
