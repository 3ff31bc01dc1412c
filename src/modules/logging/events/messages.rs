use crate::modules::logging::event::{AttachmentRef, GuildEvent, UserRef};
use crate::modules::logging::events::deliver;
use crate::services::audit;
use crate::services::client::AuditAction;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn message_deleted(
    ctx: &serenity::Context,
    channel_id: serenity::ChannelId,
    deleted_message_id: serenity::MessageId,
    guild_id: Option<serenity::GuildId>,
    data: &Data,
) -> Result<(), Error> {
    let Some(guild_id) = guild_id else {
        return Ok(());
    };

    // Extract owned data immediately; the cache guard must not cross an await.
    let cached = ctx.cache.message(channel_id, deleted_message_id).map(|msg| {
        (
            UserRef::from_user(&msg.author),
            msg.content.clone(),
            msg.attachments
                .iter()
                .map(|a| AttachmentRef {
                    filename: a.filename.clone(),
                    url: a.url.clone(),
                })
                .collect::<Vec<_>>(),
        )
    });

    // Uncached deletions cannot be attributed to an author, so they are not
    // reported at all.
    let Some((author, content, attachments)) = cached else {
        return Ok(());
    };

    if author.bot {
        return Ok(());
    }

    // Delete entries target the message author, not the message id.
    let actor = audit::resolve_actor(
        data.client.as_ref(),
        guild_id,
        AuditAction::MessageDelete,
        author.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::MessageDeleted {
            author,
            channel_id,
            content,
            attachments,
            actor,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn message_edited(
    old_if_available: &Option<serenity::Message>,
    new: &Option<serenity::Message>,
    data: &Data,
) -> Result<(), Error> {
    let (Some(old), Some(new)) = (old_if_available, new) else {
        return Ok(());
    };

    if new.guild_id.is_none() {
        return Ok(());
    }

    deliver(
        &GuildEvent::MessageEdited {
            author: UserRef::from_user(&old.author),
            channel_id: new.channel_id,
            link: new.link(),
            before: old.content.clone(),
            after: new.content.clone(),
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn bulk_deleted(
    channel_id: serenity::ChannelId,
    deleted_message_ids: &[serenity::MessageId],
    guild_id: Option<serenity::GuildId>,
    data: &Data,
) -> Result<(), Error> {
    if guild_id.is_none() {
        return Ok(());
    }

    deliver(
        &GuildEvent::MessagesBulkDeleted {
            channel_id,
            count: deleted_message_ids.len(),
        },
        data,
    )
    .await;

    Ok(())
}
