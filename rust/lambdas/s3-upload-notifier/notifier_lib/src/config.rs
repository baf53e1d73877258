use std::env;

/// # The topic every upload notification is published to
pub const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:ap-south-1:861276090426:s3-upload-notify-topic";

/// # The region the topic lives in, used when the environment doesn't provide one
pub const DEFAULT_REGION: &str = "ap-south-1";

/// # Environment variable which overrides the topic for a deployment
pub const TOPIC_ARN_VARIABLE: &str = "TOPIC_ARN";

/// # The topic to publish to
///
/// Returns the value of `TOPIC_ARN` if it is set and not empty, otherwise `DEFAULT_TOPIC_ARN`.
pub fn topic_arn() -> String {
    topic_arn_or_default(env::var(TOPIC_ARN_VARIABLE).ok())
}

/// # The region of a topic, taken from the fourth field of its ARN
///
/// Returns `None` if `topic_arn` isn't an ARN or has no region.
pub fn topic_region(topic_arn: &str) -> Option<&str> {
    let mut fields = topic_arn.split(':');
    if fields.next() != Some("arn") {
        return None;
    }
    fields.nth(2).filter(|region| !region.is_empty())
}

fn topic_arn_or_default(configured: Option<String>) -> String {
    configured
        .map(|arn| arn.trim().to_string())
        .filter(|arn| !arn.is_empty())
        .unwrap_or_else(|| DEFAULT_TOPIC_ARN.to_string())
}
