use serde::Deserialize;

/// Optional settings file, every key may be omitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    url: Option<String>,
    token: Option<String>,
    timeout: Option<u64>,
    tls_insecure: Option<bool>,
    columns: Option<String>,
}
impl FileConfig {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }
    pub fn tls_insecure(&self) -> Option<bool> {
        self.tls_insecure
    }
    pub fn columns(&self) -> Option<&str> {
        self.columns.as_deref()
    }
}
