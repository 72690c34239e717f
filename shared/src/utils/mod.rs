//! Utility functions shared by the services

pub mod email;
