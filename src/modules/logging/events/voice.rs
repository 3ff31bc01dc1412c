use crate::modules::logging::event::{GuildEvent, VoiceSnapshot};
use crate::modules::logging::events::deliver;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn voice_state_changed(
    old: &Option<serenity::VoiceState>,
    new: &serenity::VoiceState,
    data: &Data,
) -> Result<(), Error> {
    if new.guild_id.is_none() {
        return Ok(());
    }

    deliver(
        &GuildEvent::VoiceStateChanged {
            user_id: new.user_id,
            old: old.as_ref().map(VoiceSnapshot::from_state),
            new: VoiceSnapshot::from_state(new),
        },
        data,
    )
    .await;

    Ok(())
}
