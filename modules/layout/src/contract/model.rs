/// Resolved GUI properties for a user (pure model, no serde).
/// Both fields are always populated; defaults are substituted during
/// resolution, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiProperties {
    pub language: String,
    pub theme: String,
}

/// Severity of a transient page message, mapped 1:1 onto the CSS class
/// the GUI templates expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

/// A message queued for display on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMessage {
    pub text: String,
    pub severity: Severity,
}

/// Read-only projection of an account's profile fields, used only as
/// menu substitution values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountProfile {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub zip: String,
    pub city: String,
    /// Optional column; absent on older account schemas.
    pub state: Option<String>,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub fax: String,
    pub street1: String,
    pub street2: String,
}
