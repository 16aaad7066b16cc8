use serde::Deserialize;
use time::OffsetDateTime;

///
/// Ticket sent by the user on create and update.
/// Every field is optional so missing values can be reported
/// by validation rather than by the JSON extractor
///
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub id: i64,
    pub user: Option<String>,
    pub status: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn ticket_json_deserialize_ok() {
        let json = r#"{
            "id": 3,
            "user": "john.doe",
            "status": "open",
            "created_at": "2024-01-21T19:06:25+02:00"
        }"#;

        let ticket = serde_json::from_str::<Ticket>(json).unwrap();

        assert_eq!(ticket.id, 3);
        assert_eq!(ticket.user.as_deref(), Some("john.doe"));
        assert_eq!(ticket.status.as_deref(), Some("open"));
        assert_eq!(ticket.created_at, Some(datetime!(2024-01-21 17:06:25 UTC)));
    }

    #[test]
    fn ticket_json_deserialize_missing_fields() {
        let ticket = serde_json::from_str::<Ticket>("{}").unwrap();

        assert_eq!(ticket.id, 0);
        assert!(ticket.user.is_none());
        assert!(ticket.status.is_none());
        assert!(ticket.created_at.is_none());
    }

    #[test]
    fn ticket_json_deserialize_created_at_invalid() {
        let json = r#"{ "created_at": "yesterday" }"#;

        let ticket = serde_json::from_str::<Ticket>(json);

        assert!(ticket.is_err());
    }
}
