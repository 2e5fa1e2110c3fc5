mod in_memory_client_repository;
mod traits;

pub use in_memory_client_repository::InMemoryClientRepository;
pub use traits::ClientRepository;
