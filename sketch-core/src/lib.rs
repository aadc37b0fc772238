//! # Saorsa Sketch Core
//!
//! Drawing state machine for a freehand sketch surface: colored strokes,
//! linear undo/redo and clear.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  Input Adapter   │  Controls                       │
//! │  pointer events  │  swatches, undo/redo/clear      │
//! ├────────────────────────────────────────────────────┤
//! │           dispatch(Action)                         │
//! │  DrawingMachine / SharedMachine                    │
//! │  - DrawingState reducer (total, never fails)       │
//! │  - committed strokes = undo stack, redo buffer     │
//! ├────────────────────────────────────────────────────┤
//! │  Observers / broadcast snapshots -> Renderer       │
//! └────────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod input;
pub mod machine;
pub mod render;
pub mod shared;
pub mod state;
pub mod stroke;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use action::Action;
pub use color::Color;
pub use config::SketchConfig;
pub use controls::{Control, Palette};
pub use error::{SketchError, SketchResult};
pub use input::{InputAdapter, PointerEvent, PointerPhase};
pub use machine::{DrawingMachine, Observer, Subscription};
pub use render::{RenderList, RenderObserver, Renderer};
pub use shared::{SharedMachine, Snapshot};
pub use state::{DrawingState, Transition};
pub use stroke::{Point, Stroke, StrokeId, StrokeIdGenerator};

/// Sketch core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
