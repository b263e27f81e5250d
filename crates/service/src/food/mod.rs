//! Food stack: domain input, repository abstraction and service.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::FoodService;
