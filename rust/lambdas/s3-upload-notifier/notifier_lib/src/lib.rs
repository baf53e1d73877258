//! ## S3 upload notifier library
//!
//! This library contains the code shared between the notifier lambda and the local script.
//!
//! Given an S3 upload event, it extracts the bucket, key and size of the first record and builds the
//! notification which is sent to the upload SNS topic.
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod response;

pub use config::{topic_arn, topic_region, DEFAULT_REGION, DEFAULT_TOPIC_ARN, TOPIC_ARN_VARIABLE};
pub use error::NotifierError;
pub use event::{UploadDetails, UploadEvent};
pub use message::{notification_message, SUBJECT};
pub use response::NotificationResponse;
