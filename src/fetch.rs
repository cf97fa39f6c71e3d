//! HTTP capabilities: results-page text fetch and image download.
//!
//! The pagination core depends on these two traits so tests can substitute
//! fakes without network access; [`CurlClient`] is the real blocking
//! libcurl implementation.

use crate::error::ScrapeError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Fetches the text content of a results-page URL.
pub trait PageFetcher {
    fn fetch_text(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// Downloads the bytes of an image URL to a local path.
pub trait ImageDownloader {
    fn download_to(&self, url: &str, dest: &Path) -> Result<(), ScrapeError>;
}

/// Blocking libcurl client implementing both capabilities.
///
/// One Easy handle per transfer, executed sequentially in the calling
/// thread. Follows redirects; non-2xx statuses are errors.
#[derive(Debug, Default)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        CurlClient
    }

    fn configure(easy: &mut curl::easy::Easy, url: &str) -> Result<(), ScrapeError> {
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(Duration::from_secs(300))?;
        Ok(())
    }

    fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<(), ScrapeError> {
        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(ScrapeError::Http {
                url: url.to_string(),
                code,
            });
        }
        Ok(())
    }
}

impl PageFetcher for CurlClient {
    fn fetch_text(&self, url: &Url) -> Result<String, ScrapeError> {
        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        Self::configure(&mut easy, url.as_str())?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        Self::check_status(&mut easy, url.as_str())?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl ImageDownloader for CurlClient {
    fn download_to(&self, url: &str, dest: &Path) -> Result<(), ScrapeError> {
        let mut file = File::create(dest)?;
        let mut write_err: Option<std::io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        Self::configure(&mut easy, url)?;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        // A write failure aborts the transfer, which curl reports as its
        // own error; surface the underlying storage error instead.
        if let Some(e) = write_err {
            return Err(ScrapeError::Storage(e));
        }
        performed?;
        Self::check_status(&mut easy, url)?;
        Ok(())
    }
}
