pub mod event;
pub mod events;
pub mod render;

use crate::modules::{Module, ModuleDefinition};

pub fn module() -> Module {
    Module {
        definition: ModuleDefinition {
            id: "logging",
            description: "Relays guild lifecycle events to the audit channel",
        },
        event_handlers: vec![events::handler],
    }
}
