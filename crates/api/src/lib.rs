//! HTTP surface for the inventory store: routing and request/response mapping.
//!
//! This crate is the external collaborator from the store's point of view: it
//! translates requests into store operations and store outcomes into JSON
//! responses, and never touches the collection directly.

pub mod app;
