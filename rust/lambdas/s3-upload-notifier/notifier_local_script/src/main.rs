//!## Upload notifier script
//!
//! This is a script to send the upload notification for an S3 event stored on the local disk.
//! It is useful for replaying an event the lambda failed on, or for checking the message before deploying.
//!
//! ## Running
//! ```bash
//! upload-notifier --event /path/to/event.json
//! ```
//!
//! The topic is taken from `--topic-arn`, then the `TOPIC_ARN` environment variable, then the default upload topic.
//! Credentials and region come from the usual AWS environment variables and profiles.
//!
//! Use `--dry-run` to log the message without publishing it.
//!
use clap::Parser;
use log::{self, LevelFilter};
use notifier_lib::{notification_message, topic_arn, UploadDetails, UploadEvent, SUBJECT};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::fs::read_to_string;
use std::{path::PathBuf, process::exit};

/// # A struct representing the input arguments
#[derive(Parser)]
#[clap(name = "upload-notifier")]
struct Opt {
    /// Path to the S3 event JSON file
    #[clap(long, short, value_parser)]
    event: String,

    /// Topic to publish to
    #[clap(long, short, value_parser)]
    topic_arn: Option<String>,

    /// SNS endpoint to use instead of the regional endpoint
    #[clap(long, value_parser)]
    endpoint_url: Option<String>,

    /// Log the message without publishing it
    #[clap(long, action)]
    dry_run: bool,
}

/// # Reads the first upload from the event file
///
/// The path is shell expanded, so `~` and environment variables can be used.
fn upload_from_file(event_path: &str) -> Result<UploadDetails, Box<dyn Error>> {
    let event_path: PathBuf = PathBuf::from(shellexpand::full(event_path)?.to_string());
    let event_json = read_to_string(&event_path)?;
    let upload_event = UploadEvent::from_json(&event_json)?;
    if upload_event.record_count() > 1 {
        log::warn!(
            "{} records found in {}, only the first is sent",
            upload_event.record_count(),
            event_path.display()
        );
    }
    Ok(upload_event.first_upload()?)
}

async fn send_notification(opt: Opt) -> Result<(), Box<dyn Error>> {
    let upload = upload_from_file(&opt.event)?;
    let topic = opt.topic_arn.unwrap_or_else(topic_arn);

    if opt.dry_run {
        log::info!(
            "Dry run, not publishing to {topic} with subject '{SUBJECT}':\n{}",
            notification_message(&upload)
        );
        return Ok(());
    }

    let response = lambda::notify(&upload, &topic, opt.endpoint_url.as_deref()).await?;
    log::info!("{} {}", response.status_code, response.body);
    Ok(())
}

/// # The entrypoint for the notifier script
#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();
    if let Err(err) = send_notification(Opt::parse()).await {
        log::error!("Error: {}", err);
        exit(1);
    }
}

#[cfg(test)]
mod test {
    use crate::upload_from_file;
    use assert_fs::TempDir;
    use testlib::{event_missing_size, upload_event, write_event_file};

    #[test]
    fn test_upload_can_be_read_from_event_file() {
        let input_dir = TempDir::new().unwrap();
        let event_path = write_event_file(
            &input_dir,
            &upload_event(&[("b1", "k1", 1234), ("b2", "k2", 1)]),
        );

        let upload = upload_from_file(event_path.to_str().unwrap()).unwrap();

        assert_eq!(upload.bucket, "b1");
        assert_eq!(upload.key, "k1");
        assert_eq!(upload.size, 1234);
    }

    #[test]
    fn test_error_if_event_file_is_malformed() {
        let input_dir = TempDir::new().unwrap();
        let event_path = write_event_file(&input_dir, &event_missing_size());

        let err = upload_from_file(event_path.to_str().unwrap()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "malformed upload event: missing field `size`"
        );
    }

    #[test]
    fn test_error_if_event_file_is_missing() {
        let input_dir = TempDir::new().unwrap();
        let missing_path = input_dir.join("missing.json");

        let err = upload_from_file(missing_path.to_str().unwrap()).unwrap_err();

        assert!(err.to_string().contains("No such file or directory"));
    }
}
