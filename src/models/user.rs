use serde::Serialize;

/// Role of an account. Team leaders are ordinary employees of an admin who
/// also supervise their siblings; they have no authorization record of
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserType {
    Employee,   // EMPLOYEE
    TeamLeader, // TEAML
    Admin,      // ADMIN
}

impl UserType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            UserType::Employee => "EMPLOYEE",
            UserType::TeamLeader => "TEAML",
            UserType::Admin => "ADMIN",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "EMPLOYEE" => Some(UserType::Employee),
            "TEAML" => Some(UserType::TeamLeader),
            "ADMIN" => Some(UserType::Admin),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        UserType::from_db_str(&code.to_uppercase())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: i64,                 // ⇔ users.id
    pub name: String,            // ⇔ users.name
    pub user_type: UserType,     // ⇔ users.user_type
    pub shift_minutes: i64,      // ⇔ users.shift_minutes (expected daily work)
    pub manager_id: Option<i64>, // ⇔ users.manager_id (unset for top admins)
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    pub fn is_team_leader(&self) -> bool {
        self.user_type == UserType::TeamLeader
    }
}
