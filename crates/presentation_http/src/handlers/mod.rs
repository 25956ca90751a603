//! HTTP request handlers

pub mod health;
pub mod home;
pub mod observations;
pub mod temperature;
