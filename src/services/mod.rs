//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the repository, the matcher and the report builder. They provide a clean
//! boundary between the MCP handlers and the data access layer.

mod client_service;
mod clock;

pub use client_service::{ClientService, ClientServiceImpl};
pub use clock::{Clock, SystemClock};
