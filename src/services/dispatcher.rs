use crate::services::client::PlatformClient;
use crate::services::notice::Notice;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::error;

/// Delivers notices to the configured audit channel, exactly one attempt
/// each. A failed delivery is logged and dropped; it never reaches the
/// triggering handler and is never retried.
pub struct NoticeDispatcher {
    client: Arc<dyn PlatformClient>,
    channel_id: serenity::ChannelId,
}

impl NoticeDispatcher {
    pub fn new(client: Arc<dyn PlatformClient>, channel_id: serenity::ChannelId) -> Self {
        Self { client, channel_id }
    }

    pub async fn dispatch(&self, notice: Notice) {
        if let Err(e) = self.client.send_notice(self.channel_id, &notice).await {
            error!(
                "Failed to deliver notice \"{}\" to channel {}: {:?}",
                notice.title, self.channel_id, e
            );
        }
    }
}
