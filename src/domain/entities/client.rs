//! Client entity.

/// A registered customer of the agency.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: Option<String>,
    pub pesel: Option<String>,
}

/// Input data for creating a new client.
///
/// Fields are taken as submitted; [`crate::application::services::ClientService`]
/// validates them before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: Option<String>,
    pub pesel: Option<String>,
}

impl NewClient {
    /// Collapses empty optional fields to `None` so they are stored as NULL.
    pub fn normalized(mut self) -> Self {
        self.telephone = self.telephone.filter(|t| !t.trim().is_empty());
        self.pesel = self.pesel.filter(|p| !p.trim().is_empty());
        self
    }
}
