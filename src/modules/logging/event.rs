use poise::serenity_prelude as serenity;

/// Author or subject of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRef {
    pub id: serenity::UserId,
    pub tag: String,
    pub bot: bool,
    pub avatar_url: Option<String>,
    pub created_at: serenity::Timestamp,
}

impl UserRef {
    pub fn from_user(user: &serenity::User) -> Self {
        Self {
            id: user.id,
            tag: user.tag(),
            bot: user.bot,
            avatar_url: user.avatar_url(),
            created_at: user.created_at(),
        }
    }
}

/// The member attributes the relay diffs on update.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSnapshot {
    pub nick: Option<String>,
    pub roles: Vec<serenity::RoleId>,
    pub timeout_until: Option<serenity::Timestamp>,
}

impl MemberSnapshot {
    pub fn from_member(member: &serenity::Member) -> Self {
        Self {
            nick: member.nick.clone(),
            roles: member.roles.clone(),
            timeout_until: member.communication_disabled_until,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSnapshot {
    pub id: serenity::ChannelId,
    pub name: String,
    pub kind: serenity::ChannelType,
    pub topic: Option<String>,
    pub parent_id: Option<serenity::ChannelId>,
    pub slowmode: u16,
}

impl ChannelSnapshot {
    pub fn from_channel(channel: &serenity::GuildChannel) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone(),
            kind: channel.kind,
            topic: channel.topic.clone(),
            parent_id: channel.parent_id,
            slowmode: channel.rate_limit_per_user.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleSnapshot {
    pub id: serenity::RoleId,
    pub name: String,
    pub colour: u32,
    pub hoist: bool,
    pub mentionable: bool,
    pub permissions: serenity::Permissions,
    pub position: u16,
}

impl RoleSnapshot {
    pub fn from_role(role: &serenity::Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            colour: role.colour.0,
            hoist: role.hoist,
            mentionable: role.mentionable,
            permissions: role.permissions,
            position: role.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSnapshot {
    pub channel_id: Option<serenity::ChannelId>,
    pub self_mute: bool,
    pub self_deaf: bool,
    pub self_stream: bool,
    pub self_video: bool,
}

impl VoiceSnapshot {
    pub fn from_state(state: &serenity::VoiceState) -> Self {
        Self {
            channel_id: state.channel_id,
            self_mute: state.self_mute,
            self_deaf: state.self_deaf,
            self_stream: state.self_stream.unwrap_or(false),
            self_video: state.self_video,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    pub name: String,
    pub owner_id: serenity::UserId,
    pub verification_level: serenity::VerificationLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentRef {
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmojiRef {
    pub id: serenity::EmojiId,
    pub name: String,
    pub animated: bool,
}

impl EmojiRef {
    pub fn from_emoji(emoji: &serenity::Emoji) -> Self {
        Self {
            id: emoji.id,
            name: emoji.name.clone(),
            animated: emoji.animated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InviteRef {
    pub code: String,
    pub channel_id: serenity::ChannelId,
    pub inviter: Option<serenity::UserId>,
    pub expires_at: Option<serenity::Timestamp>,
}

/// Everything the relay reports, one variant per platform event kind.
/// Each variant carries only the snapshot data its rendering rule reads;
/// payloads are owned and live exactly as long as the handling of the event.
#[derive(Debug, Clone, PartialEq)]
pub enum GuildEvent {
    MemberJoined {
        user: UserRef,
        member_count: Option<u64>,
    },
    MemberLeft {
        user: UserRef,
        /// Roles held at departure, @everyone excluded.
        roles: Vec<serenity::RoleId>,
        member_count: Option<u64>,
    },
    MemberUpdated {
        user: UserRef,
        old: MemberSnapshot,
        new: MemberSnapshot,
    },
    MemberBanned {
        user: UserRef,
        actor: Option<serenity::UserId>,
        reason: Option<String>,
    },
    MemberUnbanned {
        user: UserRef,
        actor: Option<serenity::UserId>,
    },
    MessageDeleted {
        author: UserRef,
        channel_id: serenity::ChannelId,
        content: String,
        attachments: Vec<AttachmentRef>,
        actor: Option<serenity::UserId>,
    },
    MessageEdited {
        author: UserRef,
        channel_id: serenity::ChannelId,
        link: String,
        before: String,
        after: String,
    },
    MessagesBulkDeleted {
        channel_id: serenity::ChannelId,
        count: usize,
    },
    ChannelCreated {
        channel: ChannelSnapshot,
        actor: Option<serenity::UserId>,
    },
    ChannelDeleted {
        channel: ChannelSnapshot,
        actor: Option<serenity::UserId>,
    },
    ChannelUpdated {
        old: ChannelSnapshot,
        new: ChannelSnapshot,
        actor: Option<serenity::UserId>,
    },
    RoleCreated {
        role: RoleSnapshot,
        actor: Option<serenity::UserId>,
    },
    RoleDeleted {
        role: RoleSnapshot,
        actor: Option<serenity::UserId>,
    },
    RoleUpdated {
        old: RoleSnapshot,
        new: RoleSnapshot,
        actor: Option<serenity::UserId>,
    },
    VoiceStateChanged {
        user_id: serenity::UserId,
        old: Option<VoiceSnapshot>,
        new: VoiceSnapshot,
    },
    GuildUpdated {
        old: GuildSnapshot,
        new: GuildSnapshot,
    },
    EmojisUpdated {
        before: Vec<EmojiRef>,
        after: Vec<EmojiRef>,
    },
    InviteCreated {
        invite: InviteRef,
    },
    InviteDeleted {
        code: String,
        channel_id: serenity::ChannelId,
    },
}
