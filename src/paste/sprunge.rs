// ClipDeck - Client sprunge
//
// Envoie le texte dans le champ de formulaire `sprunge` (multipart) et
// lit l'URL du collage dans le corps de la reponse. L'appel est
// bloquant, borne par un delai d'expiration.

use crate::error::{CdError, CdResult};
use crate::paste::PasteService;
use reqwest::blocking::{multipart::Form, Client};
use reqwest::Url;
use std::time::Duration;

const FORM_FIELD: &str = "sprunge";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Service compatible sprunge.us.
pub struct SprungeService {
    client: Client,
    url: Url,
    name: String,
}

impl SprungeService {
    /// Cree un client pour le service a l'adresse `url`.
    ///
    /// Une adresse sans schema http(s) ou sans hote est refusee.
    pub fn new(url: &str) -> CdResult<Self> {
        let url = Url::parse(url.trim())
            .map_err(|e| CdError::Config(format!("invalid paste service url: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CdError::Config(format!(
                "unsupported paste service scheme: {}",
                url.scheme()
            )));
        }
        let name = host_name(&url)
            .ok_or_else(|| CdError::Config("paste service url has no host".into()))?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("clipdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url, name })
    }
}

impl PasteService for SprungeService {
    fn paste(&self, text: &str) -> CdResult<String> {
        if text.is_empty() {
            return Err(CdError::Paste("nothing to paste".into()));
        }
        let form = Form::new().text(FORM_FIELD, text.to_string());
        let body = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()?
            .error_for_status()?
            .text()?;
        let link = body.trim();
        if link.is_empty() {
            return Err(CdError::Paste("empty response from paste service".into()));
        }
        tracing::info!(service = %self.name, len = text.len(), "text pasted");
        Ok(link.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Nom affiche du service : hote et port explicite, sans identifiants.
fn host_name(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
