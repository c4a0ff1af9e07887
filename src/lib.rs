//! Mergington High School activities API: view extracurricular activities,
//! sign students up, and unregister them again.

pub mod database;
pub mod models;
pub mod services;
pub mod web;
