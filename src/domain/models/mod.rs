pub mod booking;
pub mod business;
pub mod schedule;
pub mod service;
