use crate::services::client::{AuditAction, AuditEntryRef, PlatformClient};
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Best-effort lookup of the audit-log entry behind an administrative action.
///
/// Fetches the single most recent entry for the action category and keeps it
/// only if it targets the given entity. Concurrent identical actions or
/// audit-log propagation delay can yield a miss or a wrong match; callers
/// must tolerate that. Query failures are swallowed, the event is still
/// reported with an unknown actor.
pub async fn find_entry(
    client: &dyn PlatformClient,
    guild_id: serenity::GuildId,
    action: AuditAction,
    target_id: u64,
) -> Option<AuditEntryRef> {
    match client.latest_audit_entry(guild_id, action).await {
        Ok(Some(entry)) if entry.target_id == Some(target_id) => Some(entry),
        Ok(_) => None,
        Err(e) => {
            debug!(
                "Audit log lookup for {:?} in guild {} failed: {:?}",
                action, guild_id, e
            );
            None
        }
    }
}

/// The user who performed an administrative action, or `None` when the audit
/// log has no matching entry or cannot be queried.
pub async fn resolve_actor(
    client: &dyn PlatformClient,
    guild_id: serenity::GuildId,
    action: AuditAction,
    target_id: u64,
) -> Option<serenity::UserId> {
    find_entry(client, guild_id, action, target_id)
        .await
        .map(|entry| entry.actor)
}
