use anyhow::Context as _;
use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::info;

mod modules;
mod services;

use services::client::{DiscordClient, PlatformClient};
use services::dispatcher::NoticeDispatcher;

/// Every notice is delivered to this channel, nowhere else.
const AUDIT_CHANNEL_ID: serenity::ChannelId = serenity::ChannelId::new(1449842538344218745);

// Shared handles passed to every event handler
pub struct Data {
    pub client: Arc<dyn PlatformClient>,
    pub dispatcher: Arc<NoticeDispatcher>,
}

pub type Error = anyhow::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    info!("Starting audit notice relay...");

    let token = std::env::var("DISCORD_TOKEN").context("missing DISCORD_TOKEN")?;

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![],
            event_handler: |ctx, event, _framework, data| {
                Box::pin(modules::dispatch_event(ctx, event, data))
            },
            ..Default::default()
        })
        .setup(|ctx, ready, _framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);

                let client: Arc<dyn PlatformClient> =
                    Arc::new(DiscordClient::new(ctx.http.clone()));
                let dispatcher = Arc::new(NoticeDispatcher::new(client.clone(), AUDIT_CHANNEL_ID));

                Ok(Data { client, dispatcher })
            })
        })
        .build();

    // Delete/edit handlers recover content from the message cache, so keep a
    // reasonable backlog around.
    let mut cache_settings = serenity::cache::Settings::default();
    cache_settings.max_messages = 2048;

    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .cache_settings(cache_settings)
        .await
        .context("Failed to create client")?;

    client.start().await.context("Client error")?;

    Ok(())
}
