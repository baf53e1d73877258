//! Upload notifier lambda
//!
//! This lambda is triggered by uploads to an S3 bucket and sends a notification about the new object to an SNS topic.
//!
//! Given the following input:
//! ```json
//! {
//!   "Records": [
//!     {
//!       "s3": {
//!         "bucket": { "name": "input-bucket" },
//!         "object": { "key": "reports/2023.csv", "size": 1234 }
//!       }
//!     }
//!   ]
//! }
//! ```
//! The lambda will:
//! * Read the bucket, key and size of the first record. Any other records are ignored.
//! * Publish the notification to the topic in the `TOPIC_ARN` environment variable, or the default upload topic,
//!   in the region named by the topic ARN
//! * Return `{"statusCode": 200, "body": "Notification Sent!"}`

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sns::operation::publish::PublishOutput;
use aws_sdk_sns::Client as SNSClient;
use notifier_lib::{
    notification_message, topic_arn, topic_region, NotificationResponse, NotifierError,
    UploadDetails, UploadEvent, DEFAULT_REGION, SUBJECT,
};
use serde_json::Value;

/// # Processes the upload event.
///
/// The event is validated before any client is created, so a malformed event never reaches SNS.
pub async fn process_event(
    event: Value,
    sns_endpoint_url: Option<&str>,
) -> Result<NotificationResponse, NotifierError> {
    let upload_event = UploadEvent::from_value(event)?;
    let upload = upload_event.first_upload()?;
    notify(&upload, &topic_arn(), sns_endpoint_url).await
}

/// # Sends the notification for a single upload
pub async fn notify(
    upload: &UploadDetails,
    topic_arn: &str,
    sns_endpoint_url: Option<&str>,
) -> Result<NotificationResponse, NotifierError> {
    let message = notification_message(upload);
    let sns_client = create_sns_client(topic_arn, sns_endpoint_url).await;
    let output = publish_notification(&sns_client, topic_arn, &message).await?;
    tracing::info!(
        bucket = upload.bucket.as_str(),
        key = upload.key.as_str(),
        message_id = output.message_id().unwrap_or_default(),
        "Notification sent"
    );
    Ok(NotificationResponse::sent())
}

/// # Publishes the message
///
/// This sends `message` to `topic_arn` with the upload alert subject.
pub async fn publish_notification(
    client: &SNSClient,
    topic_arn: &str,
    message: &str,
) -> Result<PublishOutput, NotifierError> {
    let output = client
        .publish()
        .topic_arn(topic_arn)
        .subject(SUBJECT)
        .message(message)
        .send()
        .await?;
    Ok(output)
}

/// # The region to send the request to
///
/// SNS only accepts a publish in the region of the topic, so the region in the topic ARN wins over the
/// environment. `DEFAULT_REGION` is the last resort.
fn region_provider(topic_arn: &str) -> RegionProviderChain {
    let topic_region = topic_region(topic_arn).map(|region| Region::new(region.to_string()));
    RegionProviderChain::first_try(topic_region)
        .or_default_provider()
        .or_else(DEFAULT_REGION)
}

/// # Creates an AWS SDK config object
///
/// The endpoint is only set when one is passed in, otherwise the SDK resolves it from the region.
async fn aws_config(topic_arn: &str, potential_endpoint_url: Option<&str>) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(region_provider(topic_arn));
    if let Some(endpoint_url) = potential_endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}

/// # Creates an SNS client for the region of the topic
pub async fn create_sns_client(topic_arn: &str, potential_endpoint_url: Option<&str>) -> SNSClient {
    let config = aws_config(topic_arn, potential_endpoint_url).await;
    SNSClient::new(&config)
}
