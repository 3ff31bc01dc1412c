use crate::modules::logging::event::{EmojiRef, GuildEvent, GuildSnapshot, InviteRef};
use crate::modules::logging::events::deliver;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;

pub async fn guild_updated(
    old_data_if_available: &Option<serenity::Guild>,
    new_data: &serenity::PartialGuild,
    data: &Data,
) -> Result<(), Error> {
    let Some(old) = old_data_if_available else {
        return Ok(());
    };

    let old = GuildSnapshot {
        name: old.name.clone(),
        owner_id: old.owner_id,
        verification_level: old.verification_level,
    };
    let new = GuildSnapshot {
        name: new_data.name.clone(),
        owner_id: new_data.owner_id,
        verification_level: new_data.verification_level,
    };

    if old == new {
        return Ok(());
    }

    deliver(&GuildEvent::GuildUpdated { old, new }, data).await;

    Ok(())
}

pub async fn emojis_updated(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    current_state: &HashMap<serenity::EmojiId, serenity::Emoji>,
    data: &Data,
) -> Result<(), Error> {
    // Best effort: the prior list comes from the guild cache, which may
    // already reflect the update by the time this handler runs.
    let before: Vec<EmojiRef> = ctx
        .cache
        .guild(guild_id)
        .map(|guild| guild.emojis.values().map(EmojiRef::from_emoji).collect())
        .unwrap_or_default();
    let after: Vec<EmojiRef> = current_state.values().map(EmojiRef::from_emoji).collect();

    deliver(&GuildEvent::EmojisUpdated { before, after }, data).await;

    Ok(())
}

pub async fn invite_created(
    invite: &serenity::InviteCreateEvent,
    data: &Data,
) -> Result<(), Error> {
    if invite.guild_id.is_none() {
        return Ok(());
    }

    // max_age is seconds from creation, zero meaning the invite never expires.
    let expires_at = if invite.max_age > 0 {
        serenity::Timestamp::from_unix_timestamp(
            invite.created_at.unix_timestamp() + i64::from(invite.max_age),
        )
        .ok()
    } else {
        None
    };

    deliver(
        &GuildEvent::InviteCreated {
            invite: InviteRef {
                code: invite.code.clone(),
                channel_id: invite.channel_id,
                inviter: invite.inviter.as_ref().map(|user| user.id),
                expires_at,
            },
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn invite_deleted(
    invite: &serenity::InviteDeleteEvent,
    data: &Data,
) -> Result<(), Error> {
    if invite.guild_id.is_none() {
        return Ok(());
    }

    deliver(
        &GuildEvent::InviteDeleted {
            code: invite.code.clone(),
            channel_id: invite.channel_id,
        },
        data,
    )
    .await;

    Ok(())
}
