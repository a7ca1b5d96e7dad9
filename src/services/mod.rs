pub mod matcher;
pub mod store;
