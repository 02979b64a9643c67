pub mod node;

pub use node::{override_present, NodeRuntime};
