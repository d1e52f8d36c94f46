//! `JenkinsClient` against an in-process HTTP stub.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use jobsync_client::{ClientError, JenkinsClient, Orchestrator, Outcome};
use jobsync_core::OrchestratorConfig;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Stub server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    target: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    fn start<F>(respond: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let url = format!("http://{}", listener.local_addr().expect("addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let Some(request) = read_request(&stream) else { continue };
                let (status, body) = respond(&request);
                log.lock().unwrap().push(request);
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        StubServer { url, requests }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn client(&self, user: &str, token: &str) -> JenkinsClient {
        let config = OrchestratorConfig::new(&self.url, user, token).expect("config");
        JenkinsClient::new(&config)
    }
}

fn read_request(stream: &TcpStream) -> Option<Recorded> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        line.clear();
        reader.read_line(&mut line).ok()?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((k, v)) = trimmed.split_once(':') {
            headers.push((k.trim().to_ascii_lowercase(), v.trim().to_string()));
        }
    }

    let len = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; len];
    reader.read_exact(&mut body).ok()?;

    Some(Recorded {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn get_returns_body_and_sends_basic_auth() {
    let stub = StubServer::start(|_| (200, "job lib-a already exists".to_string()));
    let client = stub.client("admin", "secret");

    let reply = client.get("/checkJobName?value=lib-a").expect("get");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, "job lib-a already exists");
    assert_eq!(reply.outcome(), Outcome::Success);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/checkJobName?value=lib-a");
    // base64("admin:secret")
    assert_eq!(requests[0].header("authorization"), Some("Basic YWRtaW46c2VjcmV0"));
}

#[rstest]
#[case::email_login("ops@corp", "p:w/d", "Basic b3BzQGNvcnA6cDp3L2Q=")]
#[case::percent_and_space("ci bot", "100%", "Basic Y2kgYm90OjEwMCU=")]
fn reserved_characters_in_credentials_are_sent_verbatim(
    #[case] user: &str,
    #[case] token: &str,
    #[case] expected: &str,
) {
    let stub = StubServer::start(|_| (200, String::new()));
    let client = stub.client(user, token);

    client.get("/api/xml?tree=jobs[name]").expect("get");

    let requests = stub.requests();
    assert_eq!(requests[0].header("authorization"), Some(expected));
    assert_eq!(requests[0].target, "/api/xml?tree=jobs[name]");
}

#[test]
fn not_found_is_a_reply_not_an_error() {
    let stub = StubServer::start(|_| (404, "no such branch".to_string()));
    let client = stub.client("admin", "secret");

    let reply = client.post("/job/lib-a/job/develop/build").expect("404 must not be an error");
    assert_eq!(reply.outcome(), Outcome::NotFound);
    assert_eq!(reply.body, "no such branch");
}

#[test]
fn server_error_body_is_returned_as_is() {
    let stub = StubServer::start(|_| (500, "boom".to_string()));
    let client = stub.client("admin", "secret");

    let reply = client.get("/api/xml?tree=jobs[name]").expect("get");
    assert_eq!(reply.outcome(), Outcome::Failed(500));
    assert_eq!(reply.body, "boom");
}

#[test]
fn push_sends_xml_body_with_content_type() {
    let stub = StubServer::start(|_| (200, String::new()));
    let client = stub.client("admin", "secret");
    let xml = "<?xml version='1.1'?><project><description>d</description></project>";

    client.push("/createItem?name=lib-a", xml).expect("push");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/createItem?name=lib-a");
    assert_eq!(requests[0].header("content-type"), Some("application/xml"));
    assert_eq!(requests[0].body, xml);
}

#[test]
fn post_has_no_body() {
    let stub = StubServer::start(|_| (201, String::new()));
    let client = stub.client("admin", "secret");

    let reply = client.post("/job/lib-a/job/main/build").expect("post");
    assert!(reply.is_success());

    let requests = stub.requests();
    assert_eq!(requests[0].method, "POST");
    assert!(requests[0].body.is_empty());
}

#[test]
fn redirect_is_returned_not_followed() {
    let stub = StubServer::start(|_| (302, String::new()));
    let client = stub.client("admin", "secret");

    let reply = client.push("/createItem?name=lib-a", "<x/>").expect("push");
    assert_eq!(reply.status, 302);
    assert_eq!(reply.outcome(), Outcome::Success);
    assert_eq!(stub.requests().len(), 1, "redirect must not be followed");
}

#[test]
fn no_credentials_sends_no_authorization_header() {
    let stub = StubServer::start(|_| (200, String::new()));
    let client = stub.client("", "");

    client.get("/api/xml?tree=jobs[name]").expect("get");
    assert_eq!(stub.requests()[0].header("authorization"), None);
}

#[test]
fn connection_refused_is_a_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let config = OrchestratorConfig::new(&format!("http://127.0.0.1:{port}"), "admin", "secret")
        .expect("config");
    let client = JenkinsClient::new(&config);

    let err = client.get("/checkJobName?value=lib-a").unwrap_err();
    assert!(matches!(err, ClientError::Transport { method: "GET", .. }), "got: {err}");
    assert!(!err.to_string().contains("secret"), "credentials must not leak: {err}");
}
