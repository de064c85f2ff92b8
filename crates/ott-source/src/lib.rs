mod error;
#[cfg(feature = "memory")]
mod memory;
mod mongo;
mod source;

pub use error::SourceError;
#[cfg(feature = "memory")]
pub use memory::MemorySource;
pub use mongo::MongoSource;
pub use source::DocumentSource;
