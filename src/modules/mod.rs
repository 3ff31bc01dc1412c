pub mod logging;

use crate::{Data, Error};
use poise::serenity_prelude as serenity;
use std::sync::OnceLock;
use tracing::{error, info};

pub type EventHandlerFn = for<'a> fn(
    &'a serenity::Context,
    &'a serenity::FullEvent,
    &'a Data,
) -> poise::BoxFuture<'a, Result<(), Error>>;

#[derive(Debug, Clone)]
pub struct ModuleDefinition {
    pub id: &'static str,
    pub description: &'static str,
}

pub struct Module {
    pub definition: ModuleDefinition,
    pub event_handlers: Vec<EventHandlerFn>,
}

fn get_modules() -> Vec<Module> {
    vec![logging::module()]
}

/// Built once, on the first dispatched event.
pub fn registry() -> &'static [Module] {
    static REGISTRY: OnceLock<Vec<Module>> = OnceLock::new();
    REGISTRY.get_or_init(get_modules)
}

pub async fn dispatch_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Ready { data_about_bot, .. } = event {
        info!(
            "Ready as {}: {} guilds, {} cached users",
            data_about_bot.user.name,
            ctx.cache.guild_count(),
            ctx.cache.user_count()
        );
    }

    for module in registry() {
        for handler in &module.event_handlers {
            // A failing handler must never take down the dispatch loop.
            if let Err(e) = handler(ctx, event, data).await {
                error!(
                    "Error in event handler for module {}: {:?}",
                    module.definition.id, e
                );
            }
        }
    }

    Ok(())
}
