use crate::modules::logging::event::{GuildEvent, MemberSnapshot, UserRef};
use crate::modules::logging::events::deliver;
use crate::services::audit;
use crate::services::client::AuditAction;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn member_joined(
    ctx: &serenity::Context,
    member: &serenity::Member,
    data: &Data,
) -> Result<(), Error> {
    let member_count = guild_member_count(ctx, member.guild_id);

    deliver(
        &GuildEvent::MemberJoined {
            user: UserRef::from_user(&member.user),
            member_count,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn member_left(
    ctx: &serenity::Context,
    guild_id: serenity::GuildId,
    user: &serenity::User,
    member_data_if_available: &Option<serenity::Member>,
    data: &Data,
) -> Result<(), Error> {
    // serenity keeps @everyone out of the role list already.
    let roles = member_data_if_available
        .as_ref()
        .map(|m| m.roles.clone())
        .unwrap_or_default();
    let member_count = guild_member_count(ctx, guild_id);

    deliver(
        &GuildEvent::MemberLeft {
            user: UserRef::from_user(user),
            roles,
            member_count,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn member_updated(
    old_if_available: &Option<serenity::Member>,
    new: &Option<serenity::Member>,
    event: &serenity::GuildMemberUpdateEvent,
    data: &Data,
) -> Result<(), Error> {
    // Without the prior snapshot there is nothing to diff against.
    let Some(old) = old_if_available else {
        return Ok(());
    };

    let old = MemberSnapshot::from_member(old);
    let new = match new {
        Some(member) => MemberSnapshot::from_member(member),
        None => MemberSnapshot {
            nick: event.nick.clone(),
            roles: event.roles.clone(),
            timeout_until: event.communication_disabled_until,
        },
    };

    if old == new {
        return Ok(());
    }

    deliver(
        &GuildEvent::MemberUpdated {
            user: UserRef::from_user(&event.user),
            old,
            new,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn member_banned(
    guild_id: serenity::GuildId,
    user: &serenity::User,
    data: &Data,
) -> Result<(), Error> {
    // The matching audit entry may not have landed yet; a miss reports
    // "Unknown" rather than waiting.
    let entry = audit::find_entry(
        data.client.as_ref(),
        guild_id,
        AuditAction::Ban,
        user.id.get(),
    )
    .await;

    let (actor, reason) = match entry {
        Some(entry) => (Some(entry.actor), entry.reason),
        None => (None, None),
    };

    deliver(
        &GuildEvent::MemberBanned {
            user: UserRef::from_user(user),
            actor,
            reason,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn member_unbanned(
    guild_id: serenity::GuildId,
    user: &serenity::User,
    data: &Data,
) -> Result<(), Error> {
    let actor = audit::resolve_actor(
        data.client.as_ref(),
        guild_id,
        AuditAction::Unban,
        user.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::MemberUnbanned {
            user: UserRef::from_user(user),
            actor,
        },
        data,
    )
    .await;

    Ok(())
}

fn guild_member_count(ctx: &serenity::Context, guild_id: serenity::GuildId) -> Option<u64> {
    ctx.cache.guild(guild_id).map(|guild| guild.member_count)
}
