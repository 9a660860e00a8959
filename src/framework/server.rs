use std::io::Read;
use std::sync::Arc;

use serenity::http::Http;
use serenity::interactions_endpoint::Verifier;
use tiny_http::{Header, Method, Request, Response};

use crate::framework::{dispatch, on_delivery_error};
use crate::prelude::*;

/// The interactions endpoint. One accept loop; anything that has to talk
/// back to Discord's REST API (deferred content, follow-ups) is spawned onto
/// the runtime so the loop keeps serving.
pub struct Server {
    catalog: Arc<Catalog>,
    http: Arc<Http>,
    verifier: Verifier,
    runtime: tokio::runtime::Handle,
}

impl Server {
    pub fn new(
        catalog: Arc<Catalog>,
        http: Arc<Http>,
        verifier: Verifier,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            catalog,
            http,
            verifier,
            runtime,
        }
    }

    pub fn run(self, port: u16) -> Result<(), Error> {
        let server = tiny_http::Server::http(("0.0.0.0", port))?;
        log::info!("listening on 0.0.0.0:{port}");

        let mut body = Vec::new();
        for request in server.incoming_requests() {
            if let Err(error) = self.handle(request, &mut body) {
                log::error!("request handling failed: {error}");
            }
        }
        Ok(())
    }

    fn handle(&self, request: Request, body: &mut Vec<u8>) -> Result<(), Error> {
        let method = request.method().clone();
        let url = request.url().to_string();
        match (method, url.as_str()) {
            (Method::Post, "/interactions") => self.interactions(request, body),
            (Method::Get, "/health") => {
                let status = serde_json::json!({
                    "status": "ok",
                    "creatures": self.catalog.len(),
                });
                respond_json(request, &status)
            }
            _ => {
                request.respond(Response::empty(404))?;
                Ok(())
            }
        }
    }

    fn interactions(&self, mut request: Request, body: &mut Vec<u8>) -> Result<(), Error> {
        body.clear();
        request.as_reader().read_to_end(body)?;

        // Signature check comes before anything else touches the payload.
        if !signature_valid(&self.verifier, request.headers(), body) {
            log::warn!("rejected interaction with bad or missing signature");
            request.respond(Response::empty(401))?;
            return Ok(());
        }

        let interaction = match serde_json::from_slice::<Interaction>(body) {
            Ok(interaction) => interaction,
            Err(error) => {
                log::warn!("malformed interaction payload: {error}");
                request.respond(Response::empty(400))?;
                return Ok(());
            }
        };

        match dispatch(interaction, &self.catalog) {
            Action::Respond(response) => respond_json(request, &response),
            Action::Defer { interaction, pages } => {
                let ack = CreateInteractionResponse::Defer(
                    CreateInteractionResponseMessage::new().ephemeral(true),
                );
                respond_json(request, &ack)?;

                let http = Arc::clone(&self.http);
                self.runtime.spawn(async move {
                    if let Err(error) = deliver(&http, &interaction, pages).await {
                        on_delivery_error(error);
                    }
                });
                Ok(())
            }
            Action::Ignore => {
                request.respond(Response::empty(400))?;
                Ok(())
            }
        }
    }
}

/// Delivers deferred content: the first page replaces the deferred original
/// (the one primary reply), the rest go out as follow-up messages.
async fn deliver(
    http: &Arc<Http>,
    interaction: &CommandInteraction,
    pages: Vec<Page>,
) -> serenity::Result<()> {
    let mut pages = pages.into_iter();
    if let Some(first) = pages.next() {
        interaction.edit_response(http.as_ref(), first.into_edit()).await?;
    }
    for page in pages {
        interaction
            .create_followup(http.as_ref(), page.into_followup())
            .await?;
    }
    Ok(())
}

fn signature_valid(verifier: &Verifier, headers: &[Header], body: &[u8]) -> bool {
    let find = |name: &'static str| {
        headers
            .iter()
            .find(|header| header.field.equiv(name))
            .map(|header| header.value.as_str())
    };

    match (find("X-Signature-Ed25519"), find("X-Signature-Timestamp")) {
        (Some(signature), Some(timestamp)) => {
            verifier.verify(signature, timestamp, body).is_ok()
        }
        _ => false,
    }
}

fn respond_json(request: Request, value: &impl Serialize) -> Result<(), Error> {
    let body = serde_json::to_vec(value)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    fn keys() -> (SigningKey, Verifier) {
        let signing = SigningKey::from_bytes(&[7u8; 32]);
        let verifier = Verifier::new(&hex(signing.verifying_key().as_bytes()));
        (signing, verifier)
    }

    fn header(name: &str, value: &str) -> Header {
        Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
    }

    fn sign(signing: &SigningKey, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex(&signing.sign(&message).to_bytes())
    }

    #[test]
    fn accepts_a_correctly_signed_request() {
        let (signing, verifier) = keys();
        let timestamp = "1700000000";
        let body = br#"{"type":1}"#;
        let signature = sign(&signing, timestamp, body);

        let headers = [
            header("X-Signature-Ed25519", &signature),
            header("X-Signature-Timestamp", timestamp),
        ];
        assert!(signature_valid(&verifier, &headers, body));
    }

    #[test]
    fn rejects_a_tampered_body() {
        let (signing, verifier) = keys();
        let timestamp = "1700000000";
        let signature = sign(&signing, timestamp, br#"{"type":1}"#);

        let headers = [
            header("X-Signature-Ed25519", &signature),
            header("X-Signature-Timestamp", timestamp),
        ];
        assert!(!signature_valid(&verifier, &headers, br#"{"type":2}"#));
    }

    #[test]
    fn rejects_missing_headers() {
        let (signing, verifier) = keys();
        let body = br#"{"type":1}"#;
        assert!(!signature_valid(&verifier, &[], body));

        let only_timestamp = [header("X-Signature-Timestamp", "1700000000")];
        assert!(!signature_valid(&verifier, &only_timestamp, body));

        let only_signature = [header("X-Signature-Ed25519", &sign(&signing, "1700000000", body))];
        assert!(!signature_valid(&verifier, &only_signature, body));
    }

    #[test]
    fn rejects_garbage_signatures() {
        let (_, verifier) = keys();
        let headers = [
            header("X-Signature-Ed25519", "not-hex-at-all"),
            header("X-Signature-Timestamp", "1700000000"),
        ];
        assert!(!signature_valid(&verifier, &headers, br#"{"type":1}"#));
    }
}
