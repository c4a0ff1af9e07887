pub mod catalog_service;
pub mod enrollment_service;
