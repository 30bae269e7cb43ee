use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a session declares for itself after connecting.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Unassigned,
    /// Camera source.
    Client,
    /// Viewer that receives camera lifecycle and photo notifications.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Unassigned => "unassigned",
            Role::Client => "client",
            Role::Admin => "admin",
        };
        f.write_str(name)
    }
}
