//! HTTP requester tests against a local mock server.

use http::Method;
use myradio::{
    api::{HttpRequester, Request, Requester},
    config::Config,
    Error, Session,
};
use wiremock::matchers::{any, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "THE-KEY";

fn config(server: &MockServer) -> Config {
    Config::for_server(&format!("{}/api/v2", server.uri())).unwrap()
}

fn requester(server: &MockServer) -> HttpRequester {
    HttpRequester::new(&config(server), KEY.parse().unwrap()).unwrap()
}

fn envelope(status: &str, payload: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(format!(
        r#"{{"status":"{status}","payload":{payload}}}"#
    ))
}

#[tokio::test]
async fn ok_envelope_yields_the_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/selector/query"))
        .and(query_param("api_key", KEY))
        .respond_with(envelope("OK", r#"{"studio":1,"lock":0}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = requester(&server)
        .execute(Request::new("/selector/query"))
        .await;

    assert!(!response.is_err());
    assert!(!response.is_empty());
    assert_eq!(
        response.json().unwrap().unwrap().get(),
        r#"{"studio":1,"lock":0}"#
    );
}

#[tokio::test]
async fn non_success_status_carries_the_code() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_string("no such endpoint"))
        .mount(&server)
        .await;

    let err = requester(&server)
        .execute(Request::new("/nothing/here"))
        .await
        .into_json()
        .unwrap_err();

    assert_eq!(err.code(), 404);
    assert_eq!(err.endpoint(), Some("/nothing/here"));
    assert_eq!(err.payload(), Some("no such endpoint"));
}

#[tokio::test]
async fn failed_status_is_an_error_and_not_empty() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(envelope("FAIL", r#""Invalid API key""#))
        .mount(&server)
        .await;

    let response = requester(&server).execute(Request::new("/user/1")).await;
    assert!(response.is_err());
    assert!(!response.is_empty());

    let err = response.into_json().unwrap_err();
    assert_eq!(err.code(), 0);
    assert!(matches!(err, Error::Api { ref status, .. } if status == "FAIL"));
    assert!(err.payload().unwrap().contains("Invalid API key"));
}

#[tokio::test]
async fn malformed_envelope_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = requester(&server)
        .execute(Request::new("/term/allterms/"))
        .await
        .into_json()
        .unwrap_err();
    assert!(matches!(err, Error::Envelope { ref endpoint, .. } if endpoint == "/term/allterms/"));
}

#[tokio::test]
async fn missing_payload_is_empty() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"OK"}"#))
        .mount(&server)
        .await;

    let response = requester(&server).execute(Request::new("/user/1/bio/")).await;
    assert!(response.is_empty());
    assert_eq!(response.decode::<String>().unwrap(), None);
}

#[tokio::test]
async fn mixins_and_params_go_in_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/timeslot/weekschedule/1"))
        .and(query_param("api_key", KEY))
        .and(query_param("mixins", "a,b,c"))
        .and(query_param("year", "2021"))
        .respond_with(envelope("OK", "[]"))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = Request::new("/timeslot/weekschedule/1");
    request.add_mixins(["a"]).add_mixins(["b", "c"]);
    request.set_param("year", ["2020"]).set_param("year", ["2021"]);

    let response = requester(&server).execute(request).await;
    assert!(response.is_empty());
}

#[tokio::test]
async fn post_sends_a_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/demo/12/addattendee"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(format!("api_key={KEY}&userid=7449")))
        .respond_with(envelope("OK", "0"))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::with_requester(requester(&server));
    assert_eq!(session.add_attendee_to_demo(12, 7449).await.unwrap(), 0);
}

#[tokio::test]
async fn put_sends_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/shortUrl/3/logclick"))
        .and(query_param("api_key", KEY))
        .and(body_string("ipAddress=127.0.0.1&userAgent=curl"))
        .respond_with(envelope("OK", "null"))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::with_requester(requester(&server));
    session
        .log_short_url_click(3, "curl", "127.0.0.1")
        .await
        .unwrap();
}

#[tokio::test]
async fn unsupported_method_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(envelope("OK", "null"))
        .expect(0)
        .mount(&server)
        .await;

    let err = requester(&server)
        .execute(Request::new("/user/1").with_method(Method::DELETE))
        .await
        .into_json()
        .unwrap_err();
    assert!(matches!(err, Error::Method(ref method) if *method == Method::DELETE));
    assert_eq!(err.code(), 0);
}

/// A base URL on a local port that nothing listens on.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/v2")
}

#[tokio::test]
async fn transport_failure_is_a_client_error() {
    let config = Config::for_server(&closed_port_url()).unwrap();
    let requester = HttpRequester::new(&config, KEY.parse().unwrap()).unwrap();

    let err = requester
        .execute(Request::new("/selector/query"))
        .await
        .into_json()
        .unwrap_err();
    assert!(matches!(err, Error::HttpClient(_)));
    assert_eq!(err.code(), 0);
}

#[tokio::test]
async fn transport_failure_does_not_reveal_the_key() {
    let config = Config::for_server(&closed_port_url()).unwrap();
    let requester = HttpRequester::new(&config, KEY.parse().unwrap()).unwrap();

    let err = requester
        .execute(Request::new("/selector/query"))
        .await
        .into_json()
        .unwrap_err();
    assert!(matches!(err, Error::HttpClient(_)));
    assert!(!err.to_string().contains(KEY), "{err}");
    assert!(!format!("{err:?}").contains(KEY), "{err:?}");
}

#[tokio::test]
async fn week_schedule_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/timeslot/weekschedule/40"))
        .and(query_param("year", "2016"))
        .respond_with(envelope("OK", "{}"))
        .mount(&server)
        .await;

    let session = Session::with_config(&config(&server), KEY.parse().unwrap()).unwrap();
    let schedule = session.get_week_schedule(2016, 40).await.unwrap();
    assert_eq!(schedule.len(), 7);
    assert!(schedule.values().all(Vec::is_empty));
}
