pub mod errors;
pub mod db;
pub mod validation;
pub mod food;
pub mod inventory;

#[cfg(test)]
mod tests;
