//! # Zoetrope runtime
//!
//! The small reactive core the widget crates stand on. Three pieces matter:
//!
//! - [`Signal`]: observable, cloneable value; the two-way binding
//!   primitive between a host-owned collection and the widgets.
//! - [`remember`] / [`remember_with_key`]: composition-slot storage, so a
//!   widget function can keep state across compose passes.
//! - [`AnimatedValue`] and the replaceable animation [`Clock`]: declarative
//!   transitions advanced once per frame, deterministic under [`TestClock`].
//!
//! ```rust
//! use zoetrope_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Widgets are plain functions returning a [`View`] tree; hosts layout and
//! paint the tree and feed input back through the callbacks stored on it.
//! Ambient parameters (theme colors, dp→px density) are composition locals,
//! see [`locals`].

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod signal;
pub mod view;


pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use signal::*;
pub use view::*;
