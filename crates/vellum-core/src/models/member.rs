use super::AccentColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Moderator,
    Member,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Moderator => "Mod",
            Role::Member => "Member",
        }
    }
}

/// A member list row.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub avatar: String,
    pub color: AccentColor,
    pub role: Role,
    /// Free-form status line ("In a meeting").
    pub status: Option<String>,
    pub presence: Presence,
}

impl Member {
    pub fn online(
        name: impl Into<String>,
        avatar: impl Into<String>,
        color: AccentColor,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            color,
            role,
            status: None,
            presence: Presence::Online,
        }
    }

    pub fn offline(name: impl Into<String>, avatar: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            color: AccentColor::Slate,
            role,
            status: None,
            presence: Presence::Offline,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
