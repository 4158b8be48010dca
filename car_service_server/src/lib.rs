//! # Car service server
//! This crate hosts the HTTP layer of the car-service booking backend. It is responsible for:
//! * Issuing signed session tokens and delivering them as cookies.
//! * Verifying session cookies on protected routes and enforcing the owner-scoping policy on order listings.
//! * Translating the booking site's REST surface into engine calls.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! * `POST /jwt`: issue a session token for the identity in the request body and set it as the `token` cookie.
//! * `GET /services`, `GET /services/{id}`: the public service catalogue.
//! * `POST /orders`, `GET /orders`, `DELETE /orders/{id}`: order booking, owner-scoped listing, and removal.
//! * `GET /` and `GET /health`: availability probes.

pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;

pub mod data_objects;
pub mod middleware;
pub mod routes;
pub mod server;
