/// Backend origin used when `LUDOTECA_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Origin of the REST backend, without trailing slash
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_api_url(option_env!("LUDOTECA_API_URL"))
    }

    fn from_api_url(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        Self {
            api_url: api_url.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_api_url(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests resolving the backend origin.
    ///
    /// Verifies blank values fall back to the default and trailing slashes
    /// are dropped.
    ///
    /// Expected: normalized origin
    #[test]
    fn resolves_api_url() {
        assert_eq!(Config::from_api_url(None).api_url, DEFAULT_API_URL);
        assert_eq!(Config::from_api_url(Some("  ")).api_url, DEFAULT_API_URL);
        assert_eq!(
            Config::from_api_url(Some("https://ludoteca.example/api/")).api_url,
            "https://ludoteca.example/api"
        );
    }
}
