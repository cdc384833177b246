//! Use-case services

pub mod cache_admin_service;
pub mod login_service;
