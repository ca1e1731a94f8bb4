//! Layered property resolution engine for Property Manager
//!
//! Collects key/value configuration from sources of differing
//! precedence and merges them into one authoritative property set per
//! project node:
//!
//! - **Source loading**: ancestor project files, the home and user
//!   property files, the project file and its environment-specific
//!   override, prefixed environment variables, prefixed system
//!   properties, and command-line overrides
//! - **Precedence merge**: a single ordered fold where later sources
//!   overwrite earlier ones on key collision
//! - **Propagation**: resolved `systemProp.`-prefixed keys are written
//!   to process-wide system-property state under the stripped name
//! - **Filter tokens**: the resolved set re-exposed for text
//!   substitution, minus propagation keys
//!
//! # Architecture
//!
//! ```text
//!        host build tool
//!              |
//!       PropertyResolver ──> ResolvedProperties, FilterTokenMap,
//!              |              system-property writes
//!        SourceLoader
//!              |
//!          props-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use props_core::{ProjectNode, PropertyResolver};
//!
//! let resolver = PropertyResolver::new();
//! let node = ProjectNode::new("/path/to/project").with_environment("staging");
//! let resolved = resolver.resolve(&node)?;
//! resolved.require("version")?;
//! ```

pub mod error;
pub mod layer;
pub mod loader;
pub mod node;
pub mod properties;
pub mod resolver;
pub mod state;

pub use error::{Error, Result};
pub use layer::{PropertyLayer, SourceKind};
pub use loader::SourceLoader;
pub use node::ProjectNode;
pub use properties::{FilterTokenMap, ResolvedProperties};
pub use resolver::PropertyResolver;
pub use state::{ProcessState, SystemState, system_properties};
