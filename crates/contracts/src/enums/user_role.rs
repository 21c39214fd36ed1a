use serde::{Deserialize, Serialize};

/// Roles with their own dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Client,
    Partner,
    Concierge,
    Sponsor,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
            UserRole::Partner => "partner",
            UserRole::Concierge => "concierge",
            UserRole::Sponsor => "sponsor",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::Client,
            UserRole::Partner,
            UserRole::Concierge,
            UserRole::Sponsor,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "client" => Some(UserRole::Client),
            "partner" => Some(UserRole::Partner),
            "concierge" => Some(UserRole::Concierge),
            "sponsor" => Some(UserRole::Sponsor),
            _ => None,
        }
    }

    /// List pages reachable from this role's dashboard, as schema names.
    pub fn dashboard_lists(&self) -> &'static [&'static str] {
        match self {
            UserRole::Admin => &["users", "tickets", "events", "partners"],
            UserRole::Client => &["bookings", "inquiries"],
            UserRole::Partner => &["properties", "inquiries"],
            UserRole::Concierge => &["tickets"],
            UserRole::Sponsor => &["events"],
        }
    }

    /// i18n key of the role name.
    pub fn label_key(&self) -> String {
        format!("roles.{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema_by_name;

    #[test]
    fn test_codes_round_trip() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("guest"), None);
    }

    #[test]
    fn test_dashboard_lists_exist() {
        for role in UserRole::all() {
            for name in role.dashboard_lists() {
                assert!(schema_by_name(name).is_some(), "{} lists unknown {}", role.code(), name);
            }
        }
    }
}
