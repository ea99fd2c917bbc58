// ABOUTME: In-memory HTML tree for the datahold generator.
// ABOUTME: Elements are built by value and serialized once, compactly.

pub mod document;
pub mod element;
pub mod render;
pub mod tags;

pub use document::Document;
pub use element::{Element, Node};
