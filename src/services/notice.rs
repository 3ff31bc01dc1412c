use poise::serenity_prelude as serenity;

/// Colour tone of a notice, one variant per embed colour in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
    Change,
    Warning,
    Highlight,
    Critical,
    Media,
}

impl Severity {
    pub fn colour(&self) -> u32 {
        match self {
            Severity::Success => 0x2ecc71,   // Green
            Severity::Failure => 0xe74c3c,   // Red
            Severity::Change => 0x3498db,    // Blue
            Severity::Warning => 0xe67e22,   // Orange
            Severity::Highlight => 0xf1c40f, // Gold
            Severity::Critical => 0x992d22,  // Dark red
            Severity::Media => 0x9b59b6,     // Purple
        }
    }
}

/// One formatted, human-readable record of a guild event, ready for delivery.
/// Immutable once built; consumed by the dispatch call that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
    /// Receipt time of the triggering event, stamped at construction.
    pub timestamp: serenity::Timestamp,
    pub thumbnail: Option<String>,
    pub fields: Vec<(String, String)>,
    /// (filename, url) pairs, rendered as one links field on delivery.
    pub attachments: Vec<(String, String)>,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
            timestamp: serenity::Timestamp::now(),
            thumbnail: None,
            fields: Vec::new(),
            attachments: Vec::new(),
        }
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn attachment(mut self, filename: impl Into<String>, url: impl Into<String>) -> Self {
        self.attachments.push((filename.into(), url.into()));
        self
    }
}
