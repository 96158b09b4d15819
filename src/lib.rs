//! series-chart: time-series stem and bar charts rendered to SVG.
//!
//! The crate keeps a strict split between pure chart math (`core`), the
//! render pipeline and data-provider seams (`api`), and drawing backends
//! (`render`). Every render pass produces a deterministic `RenderFrame` that a
//! backend turns into pixels or markup.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartRequest};
pub use error::{ChartError, ChartResult};
