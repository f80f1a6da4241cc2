//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled terminal output through composable
//! components, with theme support and search match highlighting.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EditCells, EmptyState, FooterInfo, HeaderInfo, PagerInfo, RowItem, SearchBarInfo, UIViewModel,
};
