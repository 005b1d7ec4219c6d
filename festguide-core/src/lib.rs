//! Core types for festguide.
//!
//! This crate turns a flat catalog of festival events into the views a guide
//! needs, and keeps track of which events the user has liked:
//! - `catalog` loads the event fixture
//! - `temporal`, `grouping`, `tags` and `search` derive read-only views
//! - `likes` persists the liked set through a `kv` store
//! - `view` holds per-screen state that used to be global

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod grouping;
pub mod kv;
pub mod likes;
pub mod search;
pub mod tags;
pub mod temporal;
pub mod view;

pub use catalog::EventCatalog;
pub use error::{GuideError, GuideResult};
pub use event::Event;
