//! # TUI Components
//!
//! All UI components for the terminal page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built each frame from `App` fields:
//! - `TitleBar`: app name, model, loading status, theme hint
//! - `ActionBar`: suggestions and shortcuts, dimmed when unavailable
//! - `ToastOverlay`: the transient notification
//!
//! ### Stateful Components
//!
//! Persistent state in `TuiState`, borrowed by a per-frame wrapper:
//! - `InputBox`: the notes editor (owns its working buffer and cursor)
//! - `ResponsePanel`: scrollable response (`ScrollViewState`)
//! - `EntryList`: history and saved notes (`EntryListState`)
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (header row)
//! ├── action_bar.rs      (suggestions + actions)
//! ├── input_box/         (notes editor)
//! ├── response_panel.rs  (AI response)
//! ├── entry_list.rs      (history / saved notes)
//! └── toast.rs           (notification overlay)
//! ```

pub mod action_bar;
pub mod entry_list;
pub mod input_box;
pub mod response_panel;
pub mod title_bar;
pub mod toast;

pub use action_bar::{ACTION_BAR_HEIGHT, ActionBar};
pub use entry_list::{EntryList, EntryListState, HISTORY_PREVIEW_CHARS, NOTE_PREVIEW_CHARS};
pub use input_box::{InputBox, InputEvent};
pub use response_panel::ResponsePanel;
pub use title_bar::TitleBar;
pub use toast::ToastOverlay;
