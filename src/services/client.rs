use crate::services::notice::Notice;
use crate::Error;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use serenity::model::guild::audit_log::{Action, ChannelAction, MemberAction, MessageAction, RoleAction};
use std::sync::Arc;

/// Administrative-action categories the relay attributes via the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Ban,
    Unban,
    MessageDelete,
    ChannelCreate,
    ChannelDelete,
    ChannelUpdate,
    RoleCreate,
    RoleDelete,
    RoleUpdate,
}

impl From<AuditAction> for Action {
    fn from(action: AuditAction) -> Self {
        match action {
            AuditAction::Ban => Action::Member(MemberAction::BanAdd),
            AuditAction::Unban => Action::Member(MemberAction::BanRemove),
            AuditAction::MessageDelete => Action::Message(MessageAction::Delete),
            AuditAction::ChannelCreate => Action::Channel(ChannelAction::Create),
            AuditAction::ChannelDelete => Action::Channel(ChannelAction::Delete),
            AuditAction::ChannelUpdate => Action::Channel(ChannelAction::Update),
            AuditAction::RoleCreate => Action::Role(RoleAction::Create),
            AuditAction::RoleDelete => Action::Role(RoleAction::Delete),
            AuditAction::RoleUpdate => Action::Role(RoleAction::Update),
        }
    }
}

/// The most recent audit-log entry for an action category.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntryRef {
    pub actor: serenity::UserId,
    pub target_id: Option<u64>,
    pub reason: Option<String>,
}

/// The two platform operations the relay performs. Injected everywhere a
/// send or an audit lookup happens, so tests can substitute a scripted fake.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    async fn send_notice(
        &self,
        channel_id: serenity::ChannelId,
        notice: &Notice,
    ) -> Result<(), Error>;

    /// Single most recent audit-log entry matching the action category, if any.
    async fn latest_audit_entry(
        &self,
        guild_id: serenity::GuildId,
        action: AuditAction,
    ) -> Result<Option<AuditEntryRef>, Error>;
}

pub struct DiscordClient {
    http: Arc<serenity::Http>,
}

impl DiscordClient {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PlatformClient for DiscordClient {
    async fn send_notice(
        &self,
        channel_id: serenity::ChannelId,
        notice: &Notice,
    ) -> Result<(), Error> {
        let mut embed = serenity::CreateEmbed::new()
            .title(&notice.title)
            .description(&notice.body)
            .colour(notice.severity.colour())
            .timestamp(notice.timestamp);

        if let Some(url) = &notice.thumbnail {
            embed = embed.thumbnail(url);
        }

        for (name, value) in &notice.fields {
            embed = embed.field(name, value, false);
        }

        if !notice.attachments.is_empty() {
            let links = notice
                .attachments
                .iter()
                .map(|(filename, url)| format!("[{}]({})", filename, url))
                .collect::<Vec<_>>()
                .join("\n");
            embed = embed.field("Attachments", links, false);
        }

        channel_id
            .send_message(&self.http, serenity::CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }

    async fn latest_audit_entry(
        &self,
        guild_id: serenity::GuildId,
        action: AuditAction,
    ) -> Result<Option<AuditEntryRef>, Error> {
        let logs = guild_id
            .audit_logs(&self.http, Some(action.into()), None, None, Some(1))
            .await?;

        Ok(logs.entries.into_iter().next().map(|entry| AuditEntryRef {
            actor: entry.user_id,
            target_id: entry.target_id.map(|id| id.get()),
            reason: entry.reason,
        }))
    }
}
