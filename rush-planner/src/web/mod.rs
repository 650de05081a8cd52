//! Web layer for the rush-hour route planner.
//!
//! Provides HTTP endpoints for editing the road graph, changing the search
//! configuration and running the search strategies.

mod config;
mod dto;
mod routes;
mod state;

pub use config::{ConfigError, DEFAULT_ADDR, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
