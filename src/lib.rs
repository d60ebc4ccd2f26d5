pub mod catalog;
pub mod engine;
pub mod error;
pub mod insertion;
pub mod key;
pub mod layout;
pub mod session;
pub mod traits;
pub mod types;

pub use crate::catalog::{AlternateTable, Catalog};
pub use crate::engine::{Keyboard, KeyboardBuilder, KeyboardSnapshot};
pub use crate::error::CatalogError;
pub use crate::insertion::InsertionMap;
pub use crate::key::InputEvent;
pub use crate::layout::LayoutStateMachine;
pub use crate::session::{AlternatesSession, SessionSnapshot, SessionView};
pub use crate::traits::{HitTest, TextSink};
pub use crate::types::{Feedback, Key, KeyRole, KeyStyle, Layout, Mode, ModeEvent, Point};
