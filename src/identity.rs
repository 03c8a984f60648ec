/// A user as seen by the avatar layer.
///
/// The display name is the only rendering input; the unique id is used for
/// diagnostics and log correlation, never for cache keying.
pub trait Identity {
    /// Current display name. May be empty.
    fn display_name(&self) -> String;

    /// Stable opaque id, diagnostics only.
    fn unique_id(&self) -> &str;
}

/// Plain owned identity value.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserIdentity {
    /// Opaque user handle.
    pub id: String,
    /// Human-readable name, used to derive initials and palette color.
    pub display_name: String,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl Identity for UserIdentity {
    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn unique_id(&self) -> &str {
        &self.id
    }
}
