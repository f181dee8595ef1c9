pub mod error;
pub mod panic;
pub mod result;
pub mod test_types;
