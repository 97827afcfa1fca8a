//! Navbar measurement and CSS custom property synchronization.
//!
//! Reads the rendered outer size of a navigation bar and publishes two
//! derived values (`--navbar-width`, `--navbar-height`) into document-wide
//! style state so other style rules can reference them.
//!
//! The host environment is reached only through two seams:
//!
//! - [`GeometrySource`]: looks an element up by id and reports its outer size
//! - [`StyleSink`]: accepts custom property writes on the root style scope
//!
//! Both have in-memory implementations ([`StaticGeometry`], [`MemoryStyle`])
//! so the logic runs without a rendering environment.
//!
//! # Example
//!
//! ```
//! use navsync_core::{synchronize, MemoryStyle, OuterSize, StaticGeometry, SyncOptions};
//!
//! let mut dom = StaticGeometry::new();
//! dom.insert("navbar", OuterSize::new(201, 50));
//!
//! let mut style = MemoryStyle::new();
//! synchronize(&dom, &mut style, &SyncOptions::default()).unwrap();
//!
//! assert_eq!(style.get("--navbar-width"), Some("200px"));
//! assert_eq!(style.get("--navbar-height"), Some("50px"));
//! ```

pub mod errors;
pub mod geometry;
pub mod options;
pub mod style;
pub mod sync;

pub use errors::{ConfigError, SinkError, SyncError};
pub use geometry::{format_px, measure, Measurement, OuterSize};
pub use options::SyncOptions;
pub use style::{GeometrySource, MemoryStyle, StaticGeometry, StyleSink};
pub use sync::{synchronize, SyncOutcome, Synchronizer, Trigger};
