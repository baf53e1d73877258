//! Runs in its own test binary so setting `TOPIC_ARN` can't leak into the default topic tests.
use lambda::process_event;
use std::collections::HashMap;
use std::env::set_var;
use testlib::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn publishes_to_the_configured_topic_in_its_own_region() {
    set_test_environment();
    let topic = "arn:aws:sns:eu-west-2:000000000000:replay-topic";
    set_var("TOPIC_ARN", topic);
    set_var("AWS_REGION", "us-east-1");

    let mock_sns_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(publish_response()))
        .expect(1)
        .mount(&mock_sns_server)
        .await;

    process_event(
        upload_event(&[("b1", "k1", 1234)]),
        Some(mock_sns_server.uri().as_str()),
    )
    .await
    .unwrap();

    let sns_requests = mock_sns_server.received_requests().await.unwrap();
    let publish_request = sns_requests.last().unwrap();
    let parameters: HashMap<String, String> =
        url::form_urlencoded::parse(&publish_request.body)
            .into_owned()
            .collect();
    assert_eq!(parameters["TopicArn"], topic);
    assert_eq!(parameters["Subject"], "S3 Upload Alert");

    let authorization = publish_request
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(authorization.contains("/eu-west-2/sns/aws4_request"));
}
