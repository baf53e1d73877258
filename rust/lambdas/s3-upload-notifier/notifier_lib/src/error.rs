use aws_sdk_sns::error::SdkError;
use aws_sdk_sns::operation::publish::PublishError;

/// # Errors raised while turning an upload event into a notification
///
/// None of these are retried here. They are returned to the caller so the lambda runtime records the
/// invocation as failed.
#[derive(thiserror::Error, Debug)]
pub enum NotifierError {
    #[error("malformed upload event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
    #[error("malformed upload event: no records found in the event")]
    NoRecords,
    #[error("failed to publish notification: {0}")]
    Publish(Box<SdkError<PublishError>>),
}

impl NotifierError {
    /// True for the input errors, false when SNS was the problem.
    pub fn is_malformed_event(&self) -> bool {
        matches!(
            self,
            NotifierError::MalformedEvent(_) | NotifierError::NoRecords
        )
    }
}

impl From<SdkError<PublishError>> for NotifierError {
    fn from(err: SdkError<PublishError>) -> Self {
        NotifierError::Publish(Box::new(err))
    }
}
