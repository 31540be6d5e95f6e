//! Read-only catalogue browsing API for the mobile e-catalogue screen.
//!
//! Layers follow the usual split: `domain` holds entities, filters and the
//! repository trait; `application` holds one use case per operation;
//! `infrastructure` provides the Postgres store and asset URL building;
//! `presentation` exposes everything over axum.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
