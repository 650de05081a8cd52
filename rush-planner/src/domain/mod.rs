//! Domain types for the rush-hour route planner.
//!
//! Nodes, edges, costs, time slots and one-way restrictions. Everything here
//! is plain data; the cost model that combines them lives in
//! [`crate::graph`].

mod cost;
mod edge;
mod error;
mod node;
mod restriction;
mod time_slot;

pub use cost::{Cost, round_tenth};
pub use edge::{Direction, Edge, InvalidDirection};
pub use error::GraphError;
pub use node::{Node, NodeId};
pub use restriction::{Restriction, apply_restrictions};
pub use time_slot::{InvalidTimeSlot, TimeSlot};
