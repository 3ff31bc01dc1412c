use crate::modules::logging::event::{ChannelSnapshot, GuildEvent};
use crate::modules::logging::events::deliver;
use crate::services::audit;
use crate::services::client::AuditAction;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn channel_created(
    channel: &serenity::GuildChannel,
    data: &Data,
) -> Result<(), Error> {
    let actor = audit::resolve_actor(
        data.client.as_ref(),
        channel.guild_id,
        AuditAction::ChannelCreate,
        channel.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::ChannelCreated {
            channel: ChannelSnapshot::from_channel(channel),
            actor,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn channel_deleted(
    channel: &serenity::GuildChannel,
    data: &Data,
) -> Result<(), Error> {
    let actor = audit::resolve_actor(
        data.client.as_ref(),
        channel.guild_id,
        AuditAction::ChannelDelete,
        channel.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::ChannelDeleted {
            channel: ChannelSnapshot::from_channel(channel),
            actor,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn channel_updated(
    old: &Option<serenity::GuildChannel>,
    new: &serenity::GuildChannel,
    data: &Data,
) -> Result<(), Error> {
    let Some(old) = old else {
        return Ok(());
    };

    let old = ChannelSnapshot::from_channel(old);
    let new_snapshot = ChannelSnapshot::from_channel(new);

    // No-op updates skip the audit lookup entirely.
    if old == new_snapshot {
        return Ok(());
    }

    let actor = audit::resolve_actor(
        data.client.as_ref(),
        new.guild_id,
        AuditAction::ChannelUpdate,
        new.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::ChannelUpdated {
            old,
            new: new_snapshot,
            actor,
        },
        data,
    )
    .await;

    Ok(())
}
