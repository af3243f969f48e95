pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod filename;
pub mod host;
pub mod mode;
pub mod options;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use filename::{content_hash, filename_pattern, render_filename};
pub use mode::*;
pub use options::*;
pub use resolver::{resolve, resolve_with};

pub use discovery::ConfigDiscovery;
pub use host::{to_host_json, to_host_module, to_host_value};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
