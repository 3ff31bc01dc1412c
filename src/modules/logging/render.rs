use crate::modules::logging::event::{EmojiRef, GuildEvent, VoiceSnapshot};
use crate::services::notice::{Notice, Severity};
use poise::serenity_prelude as serenity;

/// Render an event into the notice to deliver, or `None` when the event is
/// suppressed (no-op updates, automated authors, unchanged content). Pure:
/// no I/O, no failure path; missing optional data renders as a placeholder.
pub fn render(event: &GuildEvent) -> Option<Notice> {
    match event {
        GuildEvent::MemberJoined { user, member_count } => {
            let body = format!(
                "**Member:** <@{}> ({})\n**ID:** {}\n**Account created:** <t:{}:R>\n**Member count:** {}",
                user.id,
                user.tag,
                user.id,
                user.created_at.unix_timestamp(),
                count_label(*member_count),
            );
            let mut notice = Notice::new("Member Joined", body, Severity::Success);
            if let Some(url) = &user.avatar_url {
                notice = notice.thumbnail(url);
            }
            Some(notice)
        }

        GuildEvent::MemberLeft {
            user,
            roles,
            member_count,
        } => {
            let body = format!(
                "**Member:** <@{}> ({})\n**ID:** {}\n**Roles:** {}\n**Member count:** {}",
                user.id,
                user.tag,
                user.id,
                role_list(roles),
                count_label(*member_count),
            );
            let mut notice = Notice::new("Member Left", body, Severity::Failure);
            if let Some(url) = &user.avatar_url {
                notice = notice.thumbnail(url);
            }
            Some(notice)
        }

        GuildEvent::MemberUpdated { user, old, new } => {
            let mut changes = Vec::new();

            if old.nick != new.nick {
                changes.push(arrow(
                    "Nickname",
                    old.nick.as_deref().unwrap_or("None"),
                    new.nick.as_deref().unwrap_or("None"),
                ));
            }

            if old.roles != new.roles {
                let added: Vec<_> = new
                    .roles
                    .iter()
                    .filter(|r| !old.roles.contains(r))
                    .copied()
                    .collect();
                let removed: Vec<_> = old
                    .roles
                    .iter()
                    .filter(|r| !new.roles.contains(r))
                    .copied()
                    .collect();

                if !added.is_empty() {
                    changes.push(format!("**Roles added:** {}", role_list(&added)));
                }
                if !removed.is_empty() {
                    changes.push(format!("**Roles removed:** {}", role_list(&removed)));
                }
            }

            if old.timeout_until != new.timeout_until {
                match new.timeout_until {
                    Some(until) => changes.push(format!(
                        "**Timeout until:** <t:{}:F>",
                        until.unix_timestamp()
                    )),
                    None => changes.push("**Timeout removed**".to_string()),
                }
            }

            if changes.is_empty() {
                return None;
            }

            Some(Notice::new(
                "Member Updated",
                format!("**Member:** <@{}>\n{}", user.id, changes.join("\n")),
                Severity::Change,
            ))
        }

        GuildEvent::MemberBanned {
            user,
            actor,
            reason,
        } => Some(Notice::new(
            "Member Banned",
            format!(
                "**User:** <@{}> ({})\n**ID:** {}\n**Banned by:** {}\n**Reason:** {}",
                user.id,
                user.tag,
                user.id,
                actor_label(actor),
                reason.as_deref().unwrap_or("No reason"),
            ),
            Severity::Critical,
        )),

        GuildEvent::MemberUnbanned { user, actor } => Some(Notice::new(
            "Member Unbanned",
            format!(
                "**User:** <@{}> ({})\n**ID:** {}\n**Unbanned by:** {}",
                user.id,
                user.tag,
                user.id,
                actor_label(actor),
            ),
            Severity::Success,
        )),

        GuildEvent::MessageDeleted {
            author,
            channel_id,
            content,
            attachments,
            actor,
        } => {
            if author.bot {
                return None;
            }

            let content = if content.is_empty() {
                "*No text content*"
            } else {
                clip(content, 1000)
            };

            let body = format!(
                "**Author:** <@{}>\n**Deleted by:** {}\n**Channel:** <#{}>\n**Content:**\n```\n{}\n```",
                author.id,
                actor_label(actor),
                channel_id,
                content,
            );

            let mut notice = Notice::new("Message Deleted", body, Severity::Warning);
            for attachment in attachments {
                notice = notice.attachment(&attachment.filename, &attachment.url);
            }
            Some(notice)
        }

        GuildEvent::MessageEdited {
            author,
            channel_id,
            link,
            before,
            after,
        } => {
            if author.bot || before == after {
                return None;
            }

            let before = if before.is_empty() {
                "(empty)"
            } else {
                clip(before, 500)
            };
            let after = if after.is_empty() {
                "(empty)"
            } else {
                clip(after, 500)
            };

            Some(
                Notice::new(
                    "Message Edited",
                    format!(
                        "**Author:** <@{}>\n**Channel:** <#{}>\n**[Jump to message]({})**",
                        author.id, channel_id, link,
                    ),
                    Severity::Highlight,
                )
                .field("Before", format!("```\n{}\n```", before))
                .field("After", format!("```\n{}\n```", after)),
            )
        }

        GuildEvent::MessagesBulkDeleted { channel_id, count } => {
            if *count == 0 {
                return None;
            }
            Some(Notice::new(
                "Bulk Message Delete",
                format!("**{} messages** deleted in <#{}>", count, channel_id),
                Severity::Critical,
            ))
        }

        GuildEvent::ChannelCreated { channel, actor } => Some(Notice::new(
            "Channel Created",
            format!(
                "**Name:** <#{}>\n**Type:** {}\n**Created by:** {}",
                channel.id,
                kind_label(channel.kind),
                actor_label(actor),
            ),
            Severity::Success,
        )),

        GuildEvent::ChannelDeleted { channel, actor } => Some(Notice::new(
            "Channel Deleted",
            format!(
                "**Name:** #{}\n**Type:** {}\n**Deleted by:** {}",
                channel.name,
                kind_label(channel.kind),
                actor_label(actor),
            ),
            Severity::Failure,
        )),

        GuildEvent::ChannelUpdated { old, new, actor } => {
            let mut changes = Vec::new();

            if old.name != new.name {
                changes.push(arrow("Name", &old.name, &new.name));
            }
            if old.topic != new.topic {
                changes.push(arrow(
                    "Topic",
                    old.topic.as_deref().unwrap_or("None"),
                    new.topic.as_deref().unwrap_or("None"),
                ));
            }
            if old.parent_id != new.parent_id {
                changes.push(arrow(
                    "Category",
                    &channel_label(old.parent_id),
                    &channel_label(new.parent_id),
                ));
            }
            if old.slowmode != new.slowmode {
                changes.push(arrow(
                    "Slowmode",
                    &format!("{}s", old.slowmode),
                    &format!("{}s", new.slowmode),
                ));
            }

            if changes.is_empty() {
                return None;
            }

            Some(Notice::new(
                "Channel Updated",
                format!(
                    "**Channel:** <#{}>\n**Updated by:** {}\n\n{}",
                    new.id,
                    actor_label(actor),
                    changes.join("\n"),
                ),
                Severity::Change,
            ))
        }

        GuildEvent::RoleCreated { role, actor } => Some(Notice::new(
            "Role Created",
            format!(
                "**Name:** <@&{}>\n**Colour:** {}\n**Created by:** {}",
                role.id,
                colour_label(role.colour),
                actor_label(actor),
            ),
            Severity::Success,
        )),

        GuildEvent::RoleDeleted { role, actor } => Some(Notice::new(
            "Role Deleted",
            format!(
                "**Name:** {}\n**Colour:** {}\n**Deleted by:** {}",
                role.name,
                colour_label(role.colour),
                actor_label(actor),
            ),
            Severity::Failure,
        )),

        GuildEvent::RoleUpdated { old, new, actor } => {
            let mut changes = Vec::new();

            if old.name != new.name {
                changes.push(arrow("Name", &old.name, &new.name));
            }
            if old.colour != new.colour {
                changes.push(arrow(
                    "Colour",
                    &colour_label(old.colour),
                    &colour_label(new.colour),
                ));
            }
            if old.hoist != new.hoist {
                changes.push(format!("**Hoisted:** {}", tick(new.hoist)));
            }
            if old.mentionable != new.mentionable {
                changes.push(format!("**Mentionable:** {}", tick(new.mentionable)));
            }
            if old.permissions != new.permissions {
                changes.push("**Permissions changed**".to_string());
            }
            if old.position != new.position {
                changes.push(arrow(
                    "Position",
                    &old.position.to_string(),
                    &new.position.to_string(),
                ));
            }

            if changes.is_empty() {
                return None;
            }

            Some(Notice::new(
                "Role Updated",
                format!(
                    "**Role:** <@&{}>\n**Updated by:** {}\n\n{}",
                    new.id,
                    actor_label(actor),
                    changes.join("\n"),
                ),
                Severity::Change,
            ))
        }

        GuildEvent::VoiceStateChanged { user_id, old, new } => {
            render_voice(*user_id, old.as_ref(), new)
        }

        GuildEvent::GuildUpdated { old, new } => {
            let mut changes = Vec::new();

            if old.name != new.name {
                changes.push(arrow("Name", &old.name, &new.name));
            }
            if old.owner_id != new.owner_id {
                changes.push(arrow(
                    "Owner",
                    &format!("<@{}>", old.owner_id),
                    &format!("<@{}>", new.owner_id),
                ));
            }
            if old.verification_level != new.verification_level {
                changes.push(arrow(
                    "Verification level",
                    &format!("{:?}", old.verification_level),
                    &format!("{:?}", new.verification_level),
                ));
            }

            if changes.is_empty() {
                return None;
            }

            Some(Notice::new(
                "Server Updated",
                changes.join("\n"),
                Severity::Highlight,
            ))
        }

        GuildEvent::EmojisUpdated { before, after } => {
            let added: Vec<_> = after
                .iter()
                .filter(|e| !before.iter().any(|b| b.id == e.id))
                .collect();
            let removed: Vec<_> = before
                .iter()
                .filter(|e| !after.iter().any(|a| a.id == e.id))
                .collect();

            if added.is_empty() && removed.is_empty() {
                return None;
            }

            let mut lines = Vec::new();
            if !added.is_empty() {
                lines.push(format!("**Added:** {}", emoji_list(&added)));
            }
            if !removed.is_empty() {
                lines.push(format!("**Removed:** {}", emoji_list(&removed)));
            }

            Some(Notice::new(
                "Emojis Updated",
                lines.join("\n"),
                Severity::Highlight,
            ))
        }

        GuildEvent::InviteCreated { invite } => {
            let expires = match invite.expires_at {
                Some(at) => format!("<t:{}:R>", at.unix_timestamp()),
                None => "Never".to_string(),
            };
            let inviter = match invite.inviter {
                Some(id) => format!("<@{}>", id),
                None => "Unknown".to_string(),
            };
            Some(Notice::new(
                "Invite Created",
                format!(
                    "**Code:** {}\n**Created by:** {}\n**Channel:** <#{}>\n**Expires:** {}",
                    invite.code, inviter, invite.channel_id, expires,
                ),
                Severity::Success,
            ))
        }

        GuildEvent::InviteDeleted { code, channel_id } => Some(Notice::new(
            "Invite Deleted",
            format!("**Code:** {}\n**Channel:** <#{}>", code, channel_id),
            Severity::Failure,
        )),
    }
}

/// First matching case wins; a transition that changes both the channel and
/// an attribute reports only the channel change.
fn render_voice(
    user_id: serenity::UserId,
    old: Option<&VoiceSnapshot>,
    new: &VoiceSnapshot,
) -> Option<Notice> {
    let old_channel = old.and_then(|s| s.channel_id);

    match (old_channel, new.channel_id) {
        (None, Some(channel_id)) => Some(Notice::new(
            "Voice Channel Joined",
            format!("**Member:** <@{}>\n**Channel:** <#{}>", user_id, channel_id),
            Severity::Success,
        )),
        (Some(channel_id), None) => Some(Notice::new(
            "Voice Channel Left",
            format!("**Member:** <@{}>\n**Channel:** <#{}>", user_id, channel_id),
            Severity::Failure,
        )),
        (Some(from), Some(to)) if from != to => Some(Notice::new(
            "Voice Channel Moved",
            format!(
                "**Member:** <@{}>\n**From:** <#{}>\n**To:** <#{}>",
                user_id, from, to
            ),
            Severity::Change,
        )),
        _ => {
            let old = old?;
            let channel = channel_label(new.channel_id);

            if old.self_mute != new.self_mute {
                let status = if new.self_mute {
                    "Microphone muted"
                } else {
                    "Microphone unmuted"
                };
                Some(voice_status("Voice Mute Toggled", user_id, &channel, status, Severity::Change))
            } else if old.self_deaf != new.self_deaf {
                let status = if new.self_deaf { "Deafened" } else { "Undeafened" };
                Some(voice_status("Voice Deafen Toggled", user_id, &channel, status, Severity::Change))
            } else if old.self_stream != new.self_stream {
                let status = if new.self_stream {
                    "Stream started"
                } else {
                    "Stream stopped"
                };
                Some(voice_status("Voice Stream Toggled", user_id, &channel, status, Severity::Media))
            } else if old.self_video != new.self_video {
                let status = if new.self_video {
                    "Video enabled"
                } else {
                    "Video disabled"
                };
                Some(voice_status("Voice Video Toggled", user_id, &channel, status, Severity::Media))
            } else {
                None
            }
        }
    }
}

fn voice_status(
    title: &str,
    user_id: serenity::UserId,
    channel: &str,
    status: &str,
    severity: Severity,
) -> Notice {
    Notice::new(
        title,
        format!(
            "**Member:** <@{}>\n**Channel:** {}\n**Status:** {}",
            user_id, channel, status
        ),
        severity,
    )
}

/// First `max` characters of `content`, whole string when shorter.
fn clip(content: &str, max: usize) -> &str {
    match content.char_indices().nth(max) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

fn arrow(label: &str, before: &str, after: &str) -> String {
    format!("**{}:** {} ➜ {}", label, before, after)
}

fn actor_label(actor: &Option<serenity::UserId>) -> String {
    match actor {
        Some(id) => format!("<@{}>", id),
        None => "Unknown".to_string(),
    }
}

fn role_list(roles: &[serenity::RoleId]) -> String {
    if roles.is_empty() {
        return "None".to_string();
    }
    roles
        .iter()
        .map(|id| format!("<@&{}>", id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn emoji_list(emojis: &[&EmojiRef]) -> String {
    emojis
        .iter()
        .map(|e| {
            if e.animated {
                format!("<a:{}:{}>", e.name, e.id)
            } else {
                format!("<:{}:{}>", e.name, e.id)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn channel_label(channel_id: Option<serenity::ChannelId>) -> String {
    match channel_id {
        Some(id) => format!("<#{}>", id),
        None => "None".to_string(),
    }
}

fn count_label(count: Option<u64>) -> String {
    match count {
        Some(count) => count.to_string(),
        None => "Unknown".to_string(),
    }
}

fn colour_label(colour: u32) -> String {
    format!("#{:06X}", colour)
}

fn kind_label(kind: serenity::ChannelType) -> &'static str {
    match kind {
        serenity::ChannelType::Text => "Text",
        serenity::ChannelType::Voice => "Voice",
        serenity::ChannelType::Category => "Category",
        serenity::ChannelType::Forum => "Forum",
        serenity::ChannelType::Stage => "Stage",
        _ => "Other",
    }
}

fn tick(on: bool) -> &'static str {
    if on {
        "✅"
    } else {
        "❌"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::logging::event::{
        AttachmentRef, ChannelSnapshot, GuildSnapshot, MemberSnapshot, RoleSnapshot, UserRef,
    };

    fn user(id: u64) -> UserRef {
        UserRef {
            id: serenity::UserId::new(id),
            tag: format!("user{}", id),
            bot: false,
            avatar_url: None,
            created_at: serenity::Timestamp::from_unix_timestamp(1_500_000_000).unwrap(),
        }
    }

    fn bot(id: u64) -> UserRef {
        UserRef {
            bot: true,
            ..user(id)
        }
    }

    fn member(nick: Option<&str>, roles: &[u64]) -> MemberSnapshot {
        MemberSnapshot {
            nick: nick.map(str::to_string),
            roles: roles.iter().map(|&r| serenity::RoleId::new(r)).collect(),
            timeout_until: None,
        }
    }

    fn channel(name: &str) -> ChannelSnapshot {
        ChannelSnapshot {
            id: serenity::ChannelId::new(5),
            name: name.to_string(),
            kind: serenity::ChannelType::Text,
            topic: None,
            parent_id: None,
            slowmode: 0,
        }
    }

    fn role(name: &str) -> RoleSnapshot {
        RoleSnapshot {
            id: serenity::RoleId::new(9),
            name: name.to_string(),
            colour: 0x3498db,
            hoist: false,
            mentionable: false,
            permissions: serenity::Permissions::empty(),
            position: 1,
        }
    }

    fn voice(channel: Option<u64>) -> VoiceSnapshot {
        VoiceSnapshot {
            channel_id: channel.map(serenity::ChannelId::new),
            self_mute: false,
            self_deaf: false,
            self_stream: false,
            self_video: false,
        }
    }

    fn guild(name: &str) -> GuildSnapshot {
        GuildSnapshot {
            name: name.to_string(),
            owner_id: serenity::UserId::new(1),
            verification_level: serenity::VerificationLevel::Medium,
        }
    }

    fn deleted_message(author: UserRef, content: &str) -> GuildEvent {
        GuildEvent::MessageDeleted {
            author,
            channel_id: serenity::ChannelId::new(5),
            content: content.to_string(),
            attachments: vec![],
            actor: None,
        }
    }

    fn edited_message(author: UserRef, before: &str, after: &str) -> GuildEvent {
        GuildEvent::MessageEdited {
            author,
            channel_id: serenity::ChannelId::new(5),
            link: "https://discord.com/channels/1/5/99".to_string(),
            before: before.to_string(),
            after: after.to_string(),
        }
    }

    fn change_lines(notice: &Notice) -> usize {
        notice.body.matches('➜').count()
    }

    #[test]
    fn member_join_carries_id_and_creation_stamp() {
        let notice = render(&GuildEvent::MemberJoined {
            user: user(42),
            member_count: Some(100),
        })
        .unwrap();

        assert_eq!(notice.title, "Member Joined");
        assert_eq!(notice.severity, Severity::Success);
        assert!(notice.body.contains("<@42>"));
        assert!(notice.body.contains("<t:1500000000:R>"));
        assert!(notice.body.contains("**Member count:** 100"));
    }

    #[test]
    fn member_join_thumbnail_follows_avatar() {
        let mut joined = user(42);
        joined.avatar_url = Some("https://cdn.example/avatar.png".to_string());

        let notice = render(&GuildEvent::MemberJoined {
            user: joined,
            member_count: None,
        })
        .unwrap();

        assert_eq!(
            notice.thumbnail.as_deref(),
            Some("https://cdn.example/avatar.png")
        );
        assert!(notice.body.contains("**Member count:** Unknown"));
    }

    #[test]
    fn member_left_without_roles_renders_placeholder() {
        let notice = render(&GuildEvent::MemberLeft {
            user: user(42),
            roles: vec![],
            member_count: Some(99),
        })
        .unwrap();

        assert_eq!(notice.severity, Severity::Failure);
        assert!(notice.body.contains("**Roles:** None"));
    }

    #[test]
    fn member_left_lists_prior_roles() {
        let notice = render(&GuildEvent::MemberLeft {
            user: user(42),
            roles: vec![serenity::RoleId::new(7), serenity::RoleId::new(8)],
            member_count: None,
        })
        .unwrap();

        assert!(notice.body.contains("<@&7>, <@&8>"));
    }

    #[test]
    fn unchanged_member_update_produces_no_notice() {
        let snapshot = member(Some("nick"), &[7]);
        let notice = render(&GuildEvent::MemberUpdated {
            user: user(42),
            old: snapshot.clone(),
            new: snapshot,
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn nickname_change_renders_exactly_one_arrow_line() {
        let notice = render(&GuildEvent::MemberUpdated {
            user: user(42),
            old: member(Some("old"), &[7]),
            new: member(Some("new"), &[7]),
        })
        .unwrap();

        assert_eq!(change_lines(&notice), 1);
        assert!(notice.body.contains("**Nickname:** old ➜ new"));
    }

    #[test]
    fn cleared_nickname_renders_none_placeholder() {
        let notice = render(&GuildEvent::MemberUpdated {
            user: user(42),
            old: member(Some("old"), &[]),
            new: member(None, &[]),
        })
        .unwrap();

        assert!(notice.body.contains("**Nickname:** old ➜ None"));
    }

    #[test]
    fn role_diff_splits_added_and_removed() {
        let notice = render(&GuildEvent::MemberUpdated {
            user: user(42),
            old: member(None, &[7, 8]),
            new: member(None, &[8, 9]),
        })
        .unwrap();

        assert!(notice.body.contains("**Roles added:** <@&9>"));
        assert!(notice.body.contains("**Roles removed:** <@&7>"));
    }

    #[test]
    fn timeout_set_and_cleared_both_render() {
        let until = serenity::Timestamp::from_unix_timestamp(1_700_000_000).unwrap();

        let set = render(&GuildEvent::MemberUpdated {
            user: user(42),
            old: member(None, &[]),
            new: MemberSnapshot {
                timeout_until: Some(until),
                ..member(None, &[])
            },
        })
        .unwrap();
        assert!(set.body.contains("**Timeout until:** <t:1700000000:F>"));

        let cleared = render(&GuildEvent::MemberUpdated {
            user: user(42),
            old: MemberSnapshot {
                timeout_until: Some(until),
                ..member(None, &[])
            },
            new: member(None, &[]),
        })
        .unwrap();
        assert!(cleared.body.contains("**Timeout removed**"));
    }

    #[test]
    fn ban_without_audit_match_renders_unknown() {
        let notice = render(&GuildEvent::MemberBanned {
            user: user(42),
            actor: None,
            reason: None,
        })
        .unwrap();

        assert_eq!(notice.severity, Severity::Critical);
        assert!(notice.body.contains("**Banned by:** Unknown"));
        assert!(notice.body.contains("**Reason:** No reason"));
    }

    #[test]
    fn ban_with_resolved_actor_mentions_them() {
        let notice = render(&GuildEvent::MemberBanned {
            user: user(42),
            actor: Some(serenity::UserId::new(7)),
            reason: Some("spam".to_string()),
        })
        .unwrap();

        assert!(notice.body.contains("**Banned by:** <@7>"));
        assert!(notice.body.contains("**Reason:** spam"));
    }

    #[test]
    fn deleted_message_content_is_clipped_to_1000_chars() {
        let content = "x".repeat(2000);
        let notice = render(&deleted_message(user(42), &content)).unwrap();

        let expected = "x".repeat(1000);
        assert!(notice.body.contains(&format!("```\n{}\n```", expected)));
        assert!(!notice.body.contains(&"x".repeat(1001)));
    }

    #[test]
    fn deleted_message_without_content_renders_placeholder() {
        let notice = render(&deleted_message(user(42), "")).unwrap();

        assert!(notice.body.contains("*No text content*"));
        assert!(!notice.body.contains("```\n\n```"));
    }

    #[test]
    fn bot_authored_delete_is_suppressed() {
        assert_eq!(render(&deleted_message(bot(42), "hello")), None);
    }

    #[test]
    fn deleted_message_attachments_are_carried() {
        let notice = render(&GuildEvent::MessageDeleted {
            author: user(42),
            channel_id: serenity::ChannelId::new(5),
            content: "hello".to_string(),
            attachments: vec![AttachmentRef {
                filename: "cat.png".to_string(),
                url: "https://cdn.example/cat.png".to_string(),
            }],
            actor: Some(serenity::UserId::new(7)),
        })
        .unwrap();

        assert_eq!(notice.attachments.len(), 1);
        assert_eq!(notice.attachments[0].0, "cat.png");
        assert!(notice.body.contains("**Deleted by:** <@7>"));
    }

    #[test]
    fn edited_message_sides_are_clipped_to_500_chars() {
        let before = "a".repeat(2000);
        let after = "b".repeat(2000);
        let notice = render(&edited_message(user(42), &before, &after)).unwrap();

        assert_eq!(notice.fields.len(), 2);
        assert_eq!(notice.fields[0].1, format!("```\n{}\n```", "a".repeat(500)));
        assert_eq!(notice.fields[1].1, format!("```\n{}\n```", "b".repeat(500)));
    }

    #[test]
    fn edited_message_empty_side_renders_placeholder() {
        let notice = render(&edited_message(user(42), "text", "")).unwrap();

        assert_eq!(notice.fields[1].1, "```\n(empty)\n```");
    }

    #[test]
    fn unchanged_edit_is_suppressed() {
        assert_eq!(render(&edited_message(user(42), "same", "same")), None);
    }

    #[test]
    fn bot_authored_edit_is_suppressed() {
        assert_eq!(render(&edited_message(bot(42), "old", "new")), None);
    }

    #[test]
    fn bulk_delete_reports_count_only() {
        let notice = render(&GuildEvent::MessagesBulkDeleted {
            channel_id: serenity::ChannelId::new(5),
            count: 14,
        })
        .unwrap();

        assert!(notice.body.contains("**14 messages** deleted in <#5>"));
    }

    #[test]
    fn empty_bulk_delete_is_suppressed() {
        let notice = render(&GuildEvent::MessagesBulkDeleted {
            channel_id: serenity::ChannelId::new(5),
            count: 0,
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn channel_created_labels_the_kind() {
        let notice = render(&GuildEvent::ChannelCreated {
            channel: ChannelSnapshot {
                kind: serenity::ChannelType::Voice,
                ..channel("general")
            },
            actor: Some(serenity::UserId::new(7)),
        })
        .unwrap();

        assert!(notice.body.contains("**Type:** Voice"));
        assert!(notice.body.contains("**Created by:** <@7>"));
    }

    #[test]
    fn unchanged_channel_update_produces_no_notice() {
        let snapshot = channel("general");
        let notice = render(&GuildEvent::ChannelUpdated {
            old: snapshot.clone(),
            new: snapshot,
            actor: None,
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn renamed_channel_renders_exactly_one_arrow_line() {
        let notice = render(&GuildEvent::ChannelUpdated {
            old: channel("general"),
            new: channel("lounge"),
            actor: None,
        })
        .unwrap();

        assert_eq!(change_lines(&notice), 1);
        assert!(notice.body.contains("**Name:** general ➜ lounge"));
    }

    #[test]
    fn channel_slowmode_change_renders_in_seconds() {
        let notice = render(&GuildEvent::ChannelUpdated {
            old: channel("general"),
            new: ChannelSnapshot {
                slowmode: 30,
                ..channel("general")
            },
            actor: None,
        })
        .unwrap();

        assert!(notice.body.contains("**Slowmode:** 0s ➜ 30s"));
    }

    #[test]
    fn unchanged_role_update_produces_no_notice() {
        let snapshot = role("mods");
        let notice = render(&GuildEvent::RoleUpdated {
            old: snapshot.clone(),
            new: snapshot,
            actor: None,
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn role_colour_change_renders_hex_arrow_line() {
        let notice = render(&GuildEvent::RoleUpdated {
            old: role("mods"),
            new: RoleSnapshot {
                colour: 0xff0000,
                ..role("mods")
            },
            actor: None,
        })
        .unwrap();

        assert_eq!(change_lines(&notice), 1);
        assert!(notice.body.contains("**Colour:** #3498DB ➜ #FF0000"));
    }

    #[test]
    fn role_permission_change_has_no_detail_line() {
        let notice = render(&GuildEvent::RoleUpdated {
            old: role("mods"),
            new: RoleSnapshot {
                permissions: serenity::Permissions::ADMINISTRATOR,
                ..role("mods")
            },
            actor: None,
        })
        .unwrap();

        assert!(notice.body.contains("**Permissions changed**"));
        assert_eq!(change_lines(&notice), 0);
    }

    #[test]
    fn voice_join_beats_everything() {
        let notice = render(&GuildEvent::VoiceStateChanged {
            user_id: serenity::UserId::new(42),
            old: None,
            new: voice(Some(5)),
        })
        .unwrap();

        assert_eq!(notice.title, "Voice Channel Joined");
    }

    #[test]
    fn voice_move_wins_over_simultaneous_mute_flip() {
        let notice = render(&GuildEvent::VoiceStateChanged {
            user_id: serenity::UserId::new(42),
            old: Some(voice(Some(5))),
            new: VoiceSnapshot {
                self_mute: true,
                ..voice(Some(6))
            },
        })
        .unwrap();

        assert_eq!(notice.title, "Voice Channel Moved");
        assert!(notice.body.contains("**From:** <#5>"));
        assert!(notice.body.contains("**To:** <#6>"));
    }

    #[test]
    fn voice_mute_flip_in_place_reports_mute() {
        let notice = render(&GuildEvent::VoiceStateChanged {
            user_id: serenity::UserId::new(42),
            old: Some(voice(Some(5))),
            new: VoiceSnapshot {
                self_mute: true,
                ..voice(Some(5))
            },
        })
        .unwrap();

        assert_eq!(notice.title, "Voice Mute Toggled");
        assert!(notice.body.contains("Microphone muted"));
    }

    #[test]
    fn voice_mute_wins_over_simultaneous_deafen() {
        let notice = render(&GuildEvent::VoiceStateChanged {
            user_id: serenity::UserId::new(42),
            old: Some(voice(Some(5))),
            new: VoiceSnapshot {
                self_mute: true,
                self_deaf: true,
                ..voice(Some(5))
            },
        })
        .unwrap();

        assert_eq!(notice.title, "Voice Mute Toggled");
    }

    #[test]
    fn voice_stream_toggle_is_media_toned() {
        let notice = render(&GuildEvent::VoiceStateChanged {
            user_id: serenity::UserId::new(42),
            old: Some(voice(Some(5))),
            new: VoiceSnapshot {
                self_stream: true,
                ..voice(Some(5))
            },
        })
        .unwrap();

        assert_eq!(notice.title, "Voice Stream Toggled");
        assert_eq!(notice.severity, Severity::Media);
    }

    #[test]
    fn unchanged_voice_state_produces_no_notice() {
        let notice = render(&GuildEvent::VoiceStateChanged {
            user_id: serenity::UserId::new(42),
            old: Some(voice(Some(5))),
            new: voice(Some(5)),
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn unchanged_guild_update_produces_no_notice() {
        let snapshot = guild("Club");
        let notice = render(&GuildEvent::GuildUpdated {
            old: snapshot.clone(),
            new: snapshot,
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn guild_rename_renders_exactly_one_arrow_line() {
        let notice = render(&GuildEvent::GuildUpdated {
            old: guild("Club"),
            new: guild("Clubhouse"),
        })
        .unwrap();

        assert_eq!(change_lines(&notice), 1);
        assert!(notice.body.contains("**Name:** Club ➜ Clubhouse"));
    }

    #[test]
    fn guild_verification_change_uses_level_names() {
        let notice = render(&GuildEvent::GuildUpdated {
            old: guild("Club"),
            new: GuildSnapshot {
                verification_level: serenity::VerificationLevel::High,
                ..guild("Club")
            },
        })
        .unwrap();

        assert!(notice.body.contains("Medium ➜ High"));
    }

    #[test]
    fn identical_emoji_lists_produce_no_notice() {
        let emojis = vec![EmojiRef {
            id: serenity::EmojiId::new(3),
            name: "blob".to_string(),
            animated: false,
        }];
        let notice = render(&GuildEvent::EmojisUpdated {
            before: emojis.clone(),
            after: emojis,
        });

        assert_eq!(notice, None);
    }

    #[test]
    fn emoji_diff_lists_added_and_removed_tags() {
        let before = vec![EmojiRef {
            id: serenity::EmojiId::new(3),
            name: "blob".to_string(),
            animated: false,
        }];
        let after = vec![EmojiRef {
            id: serenity::EmojiId::new(4),
            name: "party".to_string(),
            animated: true,
        }];

        let notice = render(&GuildEvent::EmojisUpdated { before, after }).unwrap();

        assert!(notice.body.contains("**Added:** <a:party:4>"));
        assert!(notice.body.contains("**Removed:** <:blob:3>"));
    }

    #[test]
    fn invite_without_expiry_renders_never() {
        let notice = render(&GuildEvent::InviteCreated {
            invite: crate::modules::logging::event::InviteRef {
                code: "abc123".to_string(),
                channel_id: serenity::ChannelId::new(5),
                inviter: None,
                expires_at: None,
            },
        })
        .unwrap();

        assert!(notice.body.contains("**Created by:** Unknown"));
        assert!(notice.body.contains("**Expires:** Never"));
    }

    #[test]
    fn clip_is_char_boundary_safe() {
        assert_eq!(clip("héllo", 2), "hé");
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip(&"é".repeat(600), 500), "é".repeat(500));
    }
}
