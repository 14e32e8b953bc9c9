//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::ResponseParser;
use reqwest::header::HeaderValue;
use tracing::debug;
use zeroize::Zeroize;

/// Default site the client talks to
const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// The main AOC HTTP client
///
/// This client fetches puzzle pages and puzzle inputs from the Advent of Code
/// website, authenticating every request with a session cookie.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let example = client.get_example(2023, 1, session)?;
/// let input = client.get_input(2023, 1, session)?;
/// println!("Example:\n{}\nInput: {} bytes", example, input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let client = AocClient::new().expect("Failed to create client");
    /// ```
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The base URL every request path is resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// This function creates a HeaderValue with the sensitive flag set to true
    /// and zeroizes the temporary string after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{segments...}`, replacing any path on the base URL
    fn url_for(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Send an authenticated GET and return the response if its status is 2xx
    ///
    /// The body is left unread so callers decide between text and raw bytes.
    fn get_checked(
        &self,
        url: reqwest::Url,
        session: &str,
    ) -> Result<reqwest::blocking::Response, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;

        debug!(%url, "Sending GET");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, cookie_header)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AocError::InvalidStatus {
                status,
                url: response.url().clone(),
            });
        }

        Ok(response)
    }

    /// Fetch the HTML puzzle page for a specific year and day
    ///
    /// Requests `{base}/{year}/day/{day}`.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error, including a body cut short
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    ///
    /// The body is decoded with the response charset (UTF-8 by default);
    /// undecodable bytes become U+FFFD.
    pub fn get_puzzle_page(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.url_for(&[&year.to_string(), "day", &day.to_string()])?;
        Ok(self.get_checked(url, session)?.text()?)
    }

    /// Fetch the puzzle page and extract its example input
    ///
    /// The example is the text of the first `pre > code` block; a page without
    /// one yields an empty string.
    ///
    /// # Errors
    ///
    /// Same as [`AocClient::get_puzzle_page`].
    pub fn get_example(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let html = self.get_puzzle_page(year, day, session)?;
        Ok(self.parser.extract_example(&html))
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Downloads the personalized puzzle input from `{base}/{year}/day/{day}/input`.
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., 2023)
    /// * `day` - The day number (1-25)
    /// * `session` - The session cookie value
    ///
    /// # Returns
    ///
    /// The raw response body, byte for byte. No decoding is applied.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error, including a body cut short
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 400 with a bad session)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let session = "your_session_cookie";
    ///
    /// let input = client.get_input(2023, 1, session)?;
    /// println!("Input length: {} bytes", input.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<Vec<u8>, AocError> {
        let url = self.url_for(&[&year.to_string(), "day", &day.to_string(), "input"])?;
        Ok(self.get_checked(url, session)?.bytes()?.to_vec())
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// This is useful for testing with mock servers. The URL is parsed and validated
    /// at builder time, catching errors early.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, etc.)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
