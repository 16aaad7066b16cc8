use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketFilters {
    #[serde(alias = "usuario")]
    pub user: Option<String>,
}
