pub mod booking;
pub mod business;
pub mod category;
pub mod health;
pub mod schedule;
pub mod service;
