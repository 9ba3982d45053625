//! Application layer: table build and render orchestration

pub mod service;

pub use service::RelationTableService;
