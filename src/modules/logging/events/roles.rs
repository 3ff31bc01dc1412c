use crate::modules::logging::event::{GuildEvent, RoleSnapshot};
use crate::modules::logging::events::deliver;
use crate::services::audit;
use crate::services::client::AuditAction;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn role_created(role: &serenity::Role, data: &Data) -> Result<(), Error> {
    let actor = audit::resolve_actor(
        data.client.as_ref(),
        role.guild_id,
        AuditAction::RoleCreate,
        role.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::RoleCreated {
            role: RoleSnapshot::from_role(role),
            actor,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn role_deleted(
    guild_id: serenity::GuildId,
    removed_role_data_if_available: &Option<serenity::Role>,
    data: &Data,
) -> Result<(), Error> {
    // Without the cached role there is no name or colour to report.
    let Some(role) = removed_role_data_if_available else {
        return Ok(());
    };

    let actor = audit::resolve_actor(
        data.client.as_ref(),
        guild_id,
        AuditAction::RoleDelete,
        role.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::RoleDeleted {
            role: RoleSnapshot::from_role(role),
            actor,
        },
        data,
    )
    .await;

    Ok(())
}

pub async fn role_updated(
    old_data_if_available: &Option<serenity::Role>,
    new: &serenity::Role,
    data: &Data,
) -> Result<(), Error> {
    let Some(old) = old_data_if_available else {
        return Ok(());
    };

    let old = RoleSnapshot::from_role(old);
    let new_snapshot = RoleSnapshot::from_role(new);

    if old == new_snapshot {
        return Ok(());
    }

    let actor = audit::resolve_actor(
        data.client.as_ref(),
        new.guild_id,
        AuditAction::RoleUpdate,
        new.id.get(),
    )
    .await;

    deliver(
        &GuildEvent::RoleUpdated {
            old,
            new: new_snapshot,
            actor,
        },
        data,
    )
    .await;

    Ok(())
}
