//! Test doubles shared by the integration tests.

mod fixed_clock;
mod mock_client_repository;
mod yielding_client_repository;

pub use fixed_clock::FixedClock;
pub use mock_client_repository::MockClientRepository;
pub use yielding_client_repository::YieldingClientRepository;
