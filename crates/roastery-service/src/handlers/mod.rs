//! API handlers.

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod forms;
pub mod health;
