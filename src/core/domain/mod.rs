//! Domain types.

mod parameter;
mod task_definition;

pub use parameter::{Parameter, ParameterType};
pub use task_definition::{ContainerDefinition, EnvironmentEntry, Secret, TaskDefinition};
