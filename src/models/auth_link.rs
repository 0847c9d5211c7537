use serde::Serialize;

/// A manager's ownership record: the set of employees visible to one
/// admin. An employee appears in at most one link at a time (the
/// auth_links table keeps user_id UNIQUE), so the org is a depth-2 tree.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationLink {
    pub admin_id: i64,
    pub employee_ids: Vec<i64>,
}
