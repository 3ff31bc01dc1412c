pub mod channels;
pub mod guild;
pub mod membership;
pub mod messages;
pub mod roles;
pub mod voice;

use crate::modules::logging::event::GuildEvent;
use crate::modules::logging::render;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub fn handler<'a>(
    ctx: &'a serenity::Context,
    event: &'a serenity::FullEvent,
    data: &'a Data,
) -> poise::BoxFuture<'a, Result<(), Error>> {
    Box::pin(async move {
        match event {
            serenity::FullEvent::GuildMemberAddition { new_member, .. } => {
                membership::member_joined(ctx, new_member, data).await
            }
            serenity::FullEvent::GuildMemberRemoval {
                guild_id,
                user,
                member_data_if_available,
                ..
            } => {
                membership::member_left(ctx, *guild_id, user, member_data_if_available, data).await
            }
            serenity::FullEvent::GuildMemberUpdate {
                old_if_available,
                new,
                event,
                ..
            } => membership::member_updated(old_if_available, new, event, data).await,
            serenity::FullEvent::GuildBanAddition {
                guild_id,
                banned_user,
                ..
            } => membership::member_banned(*guild_id, banned_user, data).await,
            serenity::FullEvent::GuildBanRemoval {
                guild_id,
                unbanned_user,
                ..
            } => membership::member_unbanned(*guild_id, unbanned_user, data).await,
            serenity::FullEvent::MessageDelete {
                channel_id,
                deleted_message_id,
                guild_id,
                ..
            } => {
                messages::message_deleted(ctx, *channel_id, *deleted_message_id, *guild_id, data)
                    .await
            }
            serenity::FullEvent::MessageDeleteBulk {
                channel_id,
                multiple_deleted_messages_ids,
                guild_id,
                ..
            } => {
                messages::bulk_deleted(*channel_id, multiple_deleted_messages_ids, *guild_id, data)
                    .await
            }
            serenity::FullEvent::MessageUpdate {
                old_if_available,
                new,
                ..
            } => messages::message_edited(old_if_available, new, data).await,
            serenity::FullEvent::ChannelCreate { channel, .. } => {
                channels::channel_created(channel, data).await
            }
            serenity::FullEvent::ChannelDelete { channel, .. } => {
                channels::channel_deleted(channel, data).await
            }
            serenity::FullEvent::ChannelUpdate { old, new, .. } => {
                channels::channel_updated(old, new, data).await
            }
            serenity::FullEvent::GuildRoleCreate { new, .. } => {
                roles::role_created(new, data).await
            }
            serenity::FullEvent::GuildRoleDelete {
                guild_id,
                removed_role_data_if_available,
                ..
            } => roles::role_deleted(*guild_id, removed_role_data_if_available, data).await,
            serenity::FullEvent::GuildRoleUpdate {
                old_data_if_available,
                new,
                ..
            } => roles::role_updated(old_data_if_available, new, data).await,
            serenity::FullEvent::VoiceStateUpdate { old, new, .. } => {
                voice::voice_state_changed(old, new, data).await
            }
            serenity::FullEvent::GuildUpdate {
                old_data_if_available,
                new_data,
                ..
            } => guild::guild_updated(old_data_if_available, new_data, data).await,
            serenity::FullEvent::GuildEmojisUpdate {
                guild_id,
                current_state,
                ..
            } => guild::emojis_updated(ctx, *guild_id, current_state, data).await,
            serenity::FullEvent::InviteCreate { data: invite, .. } => {
                guild::invite_created(invite, data).await
            }
            serenity::FullEvent::InviteDelete { data: invite, .. } => {
                guild::invite_deleted(invite, data).await
            }
            _ => Ok(()),
        }
    })
}

/// Render the event and hand the notice to the dispatcher. Suppressed events
/// dispatch nothing.
pub(crate) async fn deliver(event: &GuildEvent, data: &Data) {
    if let Some(notice) = render::render(event) {
        data.dispatcher.dispatch(notice).await;
    }
}
