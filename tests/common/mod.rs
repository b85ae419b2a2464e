#![allow(dead_code)]

use std::{
    collections::VecDeque,
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use hyper::server::conn::http1;
use hyper_util::{rt::TokioIo, service::TowerToHyperService};
use lnd_client::credentials::CredentialPaths;
use rcgen::{BasicConstraints, CertificateParams, IsCa, KeyPair, SanType};
use tokio::net::TcpListener;
use tokio_rustls::{
    TlsAcceptor,
    rustls::{
        ServerConfig,
        crypto::ring,
        pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer},
    },
};

/// Hex of `tests/fixtures/admin.macaroon`.
pub const MACAROON_HEX: &str = "0201036c6e64020000062061646d696e2d746573742d6d616361726f6f6e";

pub fn fixtures_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")
}

pub fn fixture_paths() -> CredentialPaths {
    CredentialPaths::resolve(fixtures_dir(), None, None)
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone, Default)]
struct Stub {
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

/// A node answering any request with the next queued response.
pub struct StubNode {
    pub url: String,
    stub: Stub,
}

impl StubNode {
    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.stub.recorded.lock().unwrap().clone()
    }
}

/// A certificate and key for `localhost` / `127.0.0.1`, self-signed with
/// `CA:TRUE` the way LND generates its own.
pub struct SelfSigned {
    pub cert_pem: String,
    cert_der: Vec<u8>,
    key_der: Vec<u8>,
}

impl SelfSigned {
    pub fn generate() -> Self {
        let mut params = CertificateParams::default();
        params.subject_alt_names = vec![
            SanType::DnsName("localhost".try_into().unwrap()),
            SanType::IpAddress(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        ];
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);

        let key_pair = KeyPair::generate().unwrap();
        let cert = params.self_signed(&key_pair).unwrap();
        Self {
            cert_pem: cert.pem(),
            cert_der: cert.der().to_vec(),
            key_der: key_pair.serialize_der(),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
            .with_safe_default_protocol_versions()
            .unwrap()
            .with_no_client_auth()
            .with_single_cert(
                vec![self.cert_der.clone().into()],
                PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(self.key_der.clone())),
            )
            .unwrap()
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    stub.recorded.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });

    let (status, body) = stub
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((500, r#"{"message": "no response queued"}"#.to_string()));
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

fn router(responses: Vec<(u16, String)>) -> (Router, Stub) {
    let stub = Stub {
        responses: Arc::new(Mutex::new(responses.into())),
        ..Default::default()
    };
    let app = Router::new().fallback(record).with_state(stub.clone());
    (app, stub)
}

/// Plain HTTP node on an ephemeral port.
pub async fn serve(responses: Vec<(u16, String)>) -> StubNode {
    let (app, stub) = router(responses);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    StubNode {
        url: format!("http://{}", addr),
        stub,
    }
}

pub async fn serve_once(status: u16, body: &str) -> StubNode {
    serve(vec![(status, body.to_string())]).await
}

/// HTTPS node presenting `identity`.
pub async fn serve_tls(identity: &SelfSigned, responses: Vec<(u16, String)>) -> StubNode {
    let (app, stub) = router(responses);
    let acceptor = TlsAcceptor::from(Arc::new(identity.server_config()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let acceptor = acceptor.clone();
            let service = TowerToHyperService::new(app.clone());
            tokio::spawn(async move {
                // A client refusing the certificate aborts the handshake here.
                let Ok(tls_stream) = acceptor.accept(stream).await else {
                    return;
                };
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(tls_stream), service)
                    .await;
            });
        }
    });

    StubNode {
        url: format!("https://127.0.0.1:{}", addr.port()),
        stub,
    }
}

/// An address nothing listens on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
