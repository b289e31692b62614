//! Sheetkit
//!
//! A bottom-sheet modal widget: spring-animated open/close, drag-to-dismiss,
//! backdrop dimming derived from the sheet offset, and keyboard avoidance.
//!
//! # Architecture
//!
//! The widget is built from three cooperating pieces:
//!
//! 1. **Visibility state machine**: an explicit `Closed -> Opening -> Open ->
//!    Closing` lifecycle. Mount and content flags are observations of this
//!    machine, so an exit animation can play before content leaves the
//!    render tree without ever representing an illegal combination.
//!
//! 2. **Animation binding**: one animated scalar - the vertical offset -
//!    carries every motion. Backdrop opacity is a clamped interpolation of
//!    the same scalar, evaluated at read time.
//!
//! 3. **Gesture recognizer**: downward drags drive the offset 1:1; release
//!    past a quarter of the sheet height commits the close, anything less
//!    springs back open. The gesture and springs take exclusive turns
//!    driving the scalar.
//!
//! The host runtime supplies a frame tick, input events, a transparent
//! modal-presentation primitive, and the keyboard inset; the sheet hands
//! back a [`SheetFrame`] snapshot to draw each frame.
//!
//! # Example
//!
//! ```
//! use sheetkit::prelude::*;
//!
//! let layer = SheetLayer::new();
//! let (_handle, sheet) = layer
//!     .sheet()
//!     .height(300.0)
//!     .close_on_drag(true)
//!     .on_close(|_| println!("dismissed"))
//!     .show();
//!
//! // Host frame loop
//! layer.tick(1.0 / 60.0);
//! assert!(sheet.is_mounted());
//!
//! let frame = sheet.frame();
//! assert!(frame.content_rendered);
//! ```

pub mod config;
pub mod gesture;
pub mod layer;
pub mod sheet;
pub mod state;
pub mod style;

pub use config::{ModalPresentation, Orientation, PresentationAnimation, SheetConfig};
pub use gesture::{DragRecognizer, ReleaseDecision};
pub use layer::{SheetBuilder, SheetHandle, SheetLayer};
pub use sheet::{Sheet, SheetCallback, SheetFrame};
pub use state::{sheet_events, SheetVisibility};
pub use style::{RegionStyle, ResolvedRegion, ResolvedSheetStyle, SheetStyle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{Orientation, PresentationAnimation, SheetConfig};
    pub use crate::layer::{SheetBuilder, SheetHandle, SheetLayer};
    pub use crate::sheet::{Sheet, SheetFrame};
    pub use crate::state::SheetVisibility;
    pub use crate::style::{RegionStyle, SheetStyle};
}
