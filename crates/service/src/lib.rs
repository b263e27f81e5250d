//! Service layer providing the CRUD contract for foods and inventories.
//! - Repositories abstract persistence behind traits (SeaORM and in-memory).
//! - Services validate input, stamp timestamps and map absence to `NotFound`.
//! - Entity definitions and field rules live in the `models` crate.

pub mod errors;
pub mod ids;
pub mod food;
pub mod inventory;
#[cfg(test)]
pub mod test_support;
