pub mod document;
pub mod error;
pub mod prelude;
pub mod region {
    pub mod config;
    pub mod regions;
}
pub mod rename {
    pub mod normalizer;
    pub mod pipeline;
}
pub mod service {
    pub mod document_service;
    pub mod var_service;
}
pub mod util {
    pub mod env_service;
    pub mod log_service;
}

pub use document::{Document, Entry};
pub use error::RenameError;
pub use region::config::RegionConfig;
pub use rename::pipeline::transform;
