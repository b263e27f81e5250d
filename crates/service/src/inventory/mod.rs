//! Inventory stack, shaped like `food` with an extra capacity field.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::InventoryService;
