use serde::{Deserialize, Serialize};

/// # The value returned to the lambda runtime once the notification is published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub status_code: u16,
    pub body: String,
}

impl NotificationResponse {
    pub fn sent() -> NotificationResponse {
        NotificationResponse {
            status_code: 200,
            body: String::from("Notification Sent!"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::response::NotificationResponse;

    #[test]
    fn test_sent_response_serialises_with_camel_case_fields() {
        let json = serde_json::to_string(&NotificationResponse::sent()).unwrap();

        assert_eq!(json, r#"{"statusCode":200,"body":"Notification Sent!"}"#);
    }
}
