//! Authentication module for managing user accounts and sessions.
//!
//! This module provides the public interface for signup, login, logout,
//! session cookie handling and the middleware that protects authenticated routes.

pub mod cookie;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod validation;
