pub mod common;
pub mod event;
pub mod participant;
pub mod recommendation;
pub mod slot;
