//! # Test library functions
//!
//! These are common functions used in the integration tests for the script and for the lambda.
use assert_fs::TempDir;
use serde_json::{json, Value};
use std::env::{remove_var, set_var};
use std::fs::write;
use std::path::PathBuf;

/// # Sets static credentials so the SDK can sign requests sent to the mock server
///
/// `TOPIC_ARN` is cleared so the default topic is used whatever the calling shell exports.
pub fn set_test_environment() {
    set_var("AWS_ACCESS_KEY_ID", "test-access-key");
    set_var("AWS_SECRET_ACCESS_KEY", "test-secret-key");
    set_var("AWS_REGION", "ap-south-1");
    remove_var("TOPIC_ARN");
}

/// # A single upload record in the shape S3 sends it
pub fn upload_record(bucket: &str, key: &str, size: u64) -> Value {
    json!({
        "eventVersion": "2.1",
        "eventSource": "aws:s3",
        "awsRegion": "ap-south-1",
        "eventTime": "2024-01-01T00:00:00.000Z",
        "eventName": "ObjectCreated:Put",
        "userIdentity": { "principalId": "AWS:EXAMPLE" },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "upload-notify",
            "bucket": {
                "name": bucket,
                "ownerIdentity": { "principalId": "EXAMPLE" },
                "arn": format!("arn:aws:s3:::{bucket}")
            },
            "object": {
                "key": key,
                "size": size,
                "eTag": "0123456789abcdef0123456789abcdef",
                "sequencer": "0A1B2C3D4E5F678901"
            }
        }
    })
}

/// # An upload event with one record for each (bucket, key, size)
pub fn upload_event(records: &[(&str, &str, u64)]) -> Value {
    let records: Vec<Value> = records
        .iter()
        .map(|(bucket, key, size)| upload_record(bucket, key, *size))
        .collect();
    json!({ "Records": records })
}

/// # An upload event whose only record has no object size
pub fn event_missing_size() -> Value {
    json!({
        "Records": [
            { "s3": { "bucket": { "name": "b1" }, "object": { "key": "k1" } } }
        ]
    })
}

/// # Writes the event to `event.json` in the directory and returns the path
pub fn write_event_file(dir: &TempDir, event: &Value) -> PathBuf {
    let event_path = dir.join(PathBuf::from("event.json"));
    write(&event_path, event.to_string()).unwrap();
    event_path
}

/// # A successful SNS publish response
pub fn publish_response() -> &'static str {
    r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <PublishResult>
    <MessageId>567910cd-659e-55d4-8ccb-5aaf14679dc0</MessageId>
  </PublishResult>
  <ResponseMetadata>
    <RequestId>d74b8436-ae13-5ab4-a9ff-ce54dfea72a0</RequestId>
  </ResponseMetadata>
</PublishResponse>"#
}

/// # An SNS authorisation failure
pub fn publish_error_response() -> &'static str {
    r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <Error>
    <Type>Sender</Type>
    <Code>AuthorizationError</Code>
    <Message>User is not authorized to perform: SNS:Publish</Message>
  </Error>
  <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
</ErrorResponse>"#
}
