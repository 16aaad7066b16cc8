use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub id: i64,
    pub user: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            user: value.user,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;
    use time::macros::datetime;

    #[test]
    fn ticket_json_serialize_rfc3339() {
        let ticket = Ticket {
            id: 1,
            user: "john.doe".to_string(),
            status: "open".to_string(),
            created_at: datetime!(2024-01-21 19:06:25 UTC),
            updated_at: datetime!(2024-01-22 08:00:00 UTC),
        };

        let json = serde_json::to_string(&ticket).unwrap();

        let object = serde_json::from_str::<Value>(&json).unwrap();
        assert_eq!(object["id"], 1);
        assert_eq!(object["created_at"], "2024-01-21T19:06:25Z");
        assert_eq!(object["updated_at"], "2024-01-22T08:00:00Z");
    }
}
