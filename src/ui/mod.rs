//! Presentation boundary: view models, their computation, and a text renderer.
//!
//! ```text
//! CollectionState → RenderDispatcher::compute_view_model → ViewModel → Presenter
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Immutable view model types
//! - [`render`]: [`RenderDispatcher`] and the [`Presenter`] trait
//! - [`helpers`]: Rating/date/poster formatting shared by view models and rendering
//! - [`renderer`]: Plain-text rendering used by the binary

pub mod helpers;
pub mod render;
pub mod renderer;
pub mod viewmodel;

pub use render::{Presenter, RenderDispatcher};
pub use renderer::render_text;
pub use viewmodel::{CatalogStats, DisplayEntry, EmptyState, ViewModel};
