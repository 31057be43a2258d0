use std::{collections::HashMap, io::Error, path::Path};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

#[derive(Debug)]
pub enum AuthError {
    IoError(Error),
    SerdeError(serde_json::Error),
    InvalidHeader(String),
    ClientError(reqwest::Error),
}

impl From<Error> for AuthError {
    fn from(err: Error) -> Self {
        AuthError::IoError(err)
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::IoError(e) => write!(f, "cannot read auth headers file: {}", e),
            AuthError::SerdeError(e) => write!(f, "auth headers file is not valid JSON: {}", e),
            AuthError::InvalidHeader(name) => write!(f, "invalid header in auth file: {}", name),
            AuthError::ClientError(e) => write!(f, "cannot build HTTP client: {}", e),
        }
    }
}

/// Loads the browser-headers file and converts it into request headers.
///
/// The file is a flat JSON object mapping header names to values, captured
/// from an authenticated browser session. Header names that the HTTP layer
/// rejects are reported by name rather than silently dropped.
pub async fn load_auth_headers(path: &Path) -> Result<HeaderMap, AuthError> {
    let content = async_fs::read_to_string(path).await?;
    let raw: HashMap<String, String> =
        serde_json::from_str(&content).map_err(AuthError::SerdeError)?;

    let mut headers = HeaderMap::new();
    for (name, value) in raw {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| AuthError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(&value).map_err(|_| AuthError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
