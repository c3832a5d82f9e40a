//! # SalonFlow Backend
//!
//! Booking and scheduling engine for a multi-tenant salon platform.
//!
//! This crate computes appointment slot availability for the public booking
//! flow, stores bookings with a write-time reservation check, and serves
//! the surrounding catalog and finance reads over a REST API via Axum.
//!
//! ## Features
//!
//! - **Availability Resolution**: candidate slot generation over staff
//!   shifts and conflict filtering under per-professional or shared-salon
//!   isolation
//! - **Booking**: reservation-checked appointment writes
//! - **Catalog**: tenants, services, and staff schedules behind a
//!   repository abstraction
//! - **Finance**: commission reporting over completed appointments
//! - **HTTP API**: RESTful endpoints for the booking front end
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the shared type surface
//! - [`models`]: Domain records (times, schedules, catalog, appointments)
//! - [`booking`]: The pure availability engine
//! - [`db`]: Repository pattern and the in-memory store
//! - [`services`]: High-level business logic
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod booking;
pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
