use crate::error::NotifierError;
use serde::Deserialize;
use serde_json::Value;

/// # An S3 upload event
///
/// The records are kept as raw JSON. Only the first one is ever read, so a later record which doesn't
/// match the expected shape doesn't stop the notification.
#[derive(Debug, Deserialize)]
pub struct UploadEvent {
    #[serde(rename = "Records")]
    records: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct UploadRecord {
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    bucket: S3Bucket,
    object: S3Object,
}

#[derive(Debug, Deserialize)]
struct S3Bucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct S3Object {
    key: String,
    size: u64,
}

/// # The bucket, key and size of an uploaded object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDetails {
    pub bucket: String,
    pub key: String,
    pub size: u64,
}

impl UploadEvent {
    /// # Parses the event payload passed to the lambda
    pub fn from_value(value: Value) -> Result<UploadEvent, NotifierError> {
        Ok(serde_json::from_value(value)?)
    }

    /// # Parses an event from a JSON string
    pub fn from_json(json: &str) -> Result<UploadEvent, NotifierError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// # The details of the first record
    ///
    /// Fails with `NoRecords` if `Records` is empty and with `MalformedEvent` if the first record is
    /// missing the bucket name, the object key or the object size.
    pub fn first_upload(&self) -> Result<UploadDetails, NotifierError> {
        let record = self.records.first().ok_or(NotifierError::NoRecords)?;
        let UploadRecord { s3 } = UploadRecord::deserialize(record)?;
        Ok(UploadDetails {
            bucket: s3.bucket.name,
            key: s3.object.key,
            size: s3.object.size,
        })
    }
}
