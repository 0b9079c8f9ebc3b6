pub mod association;

pub use association::InMemoryAssociationRepository;
