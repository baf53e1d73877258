use crate::event::UploadDetails;

/// # The subject of every notification
pub const SUBJECT: &str = "S3 Upload Alert";

/// # Builds the notification text
///
/// The key is reported as it appears in the event, without URL decoding.
pub fn notification_message(upload: &UploadDetails) -> String {
    format!(
        "New file uploaded!\nBucket: {}\nFile: {}\nSize: {} bytes",
        upload.bucket, upload.key, upload.size
    )
}

#[cfg(test)]
mod test {
    use crate::event::UploadDetails;
    use crate::message::notification_message;

    #[test]
    fn test_message_contains_bucket_key_and_size() {
        let upload = UploadDetails {
            bucket: String::from("b1"),
            key: String::from("k1"),
            size: 1234,
        };

        assert_eq!(
            notification_message(&upload),
            "New file uploaded!\nBucket: b1\nFile: k1\nSize: 1234 bytes"
        );
    }

    #[test]
    fn test_key_is_not_decoded() {
        let upload = UploadDetails {
            bucket: String::from("b1"),
            key: String::from("reports/annual+report%282023%29.pdf"),
            size: 0,
        };

        assert!(notification_message(&upload)
            .contains("File: reports/annual+report%282023%29.pdf\nSize: 0 bytes"));
    }
}
