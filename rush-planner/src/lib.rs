//! Rush-hour route planner.
//!
//! A library and web service that answers: "starting here at rush hour,
//! can I reach one of these stations before my train leaves, and how do
//! the classic search strategies compare at finding the route?"

pub mod domain;
pub mod graph;
pub mod planner;
pub mod snapshot;
pub mod web;
pub mod workspace;
