//! Nutrient Intake Calculator library
//!
//! Body and nutrition metric formulas, their record store, and the REST and
//! GraphQL surfaces that expose them.

pub mod api;
pub mod build_info;
pub mod config;
pub mod db;
pub mod error;
pub mod formulas;
pub mod models;
pub mod services;
