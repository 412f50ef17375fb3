//! Output format implementations for document serialization
//!
//! - treeviz: one line per element, for reading
//! - json / yaml: the full tree through serde, for other tools

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{to_json, to_yaml, JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
