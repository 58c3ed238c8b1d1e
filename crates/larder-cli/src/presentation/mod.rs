//! # Presentation Layer
//!
//! MVVM split shared by every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! The interactive UI (`renderers::tui`) reuses the same presenters; its
//! components own cursor and form state, never items.
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** `days_until: -2`, not `"2 days ago"`.
//!    The status sentence is the one exception; it is domain output.
//! 2. **Presenters never format.** They group, count and decide which
//!    suggestions apply.
//! 3. **Views own layout, color and escaping.** Every user-provided string
//!    goes through `formatters::text::sanitize` before it reaches a
//!    terminal, and through `formatters::export::escape_html` before it
//!    reaches HTML.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Count, group or pick a suggestion | `presenters/` |
//! | Change a color | `views/` |
//! | Add an export format | `formatters/export.rs` |
//! | Handle a key in the UI | `renderers/tui/components/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel,
    ViewOptions,
};
