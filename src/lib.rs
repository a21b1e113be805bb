//! Search, favorites and comparison core for a property marketplace.

pub mod config;
pub mod data;
pub mod favorites;
pub mod map;
pub mod models;
pub mod mortgage;
pub mod providers;
pub mod search;
