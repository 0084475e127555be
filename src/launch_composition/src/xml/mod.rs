//! XML parsing module

pub mod entity;

pub use entity::{Entity, XmlEntity};
