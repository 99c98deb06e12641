//! Item data model, item sources, and slug generation.
//!
//! This crate has no knowledge of CSV. It defines what an item looks like
//! when it comes out of the item database and how to enumerate a collection
//! of them, so `wow-items-export` can map and write them.

pub mod error;
pub mod item;
pub mod slug;
pub mod source;

pub use error::SourceError;
pub use item::Item;
pub use slug::slugify;
pub use source::{FileSource, ItemSource, SourceFormat, load_items, parse_items};
