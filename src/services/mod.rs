pub mod schedule_service;
pub mod signup_service;
