//! The pagination/extraction core: a lazy sequence of image URLs across
//! consecutive results pages, and the scrape-to-disk driver.

use crate::catalog::Category;
use crate::error::ScrapeError;
use crate::extract::extract_image_urls;
use crate::fetch::{ImageDownloader, PageFetcher};
use crate::query::build_page_query;
use crate::url_model::derive_filename;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Parameters of one scrape run. Immutable for the run's duration.
#[derive(Debug, Clone, Copy)]
pub struct ScrapeRequest {
    pub category: Category,
    /// Results requested per page query. Must be >= 1.
    pub batch_size: u32,
    /// First results page to fetch. Must be >= 1.
    pub start_page: u32,
}

impl ScrapeRequest {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            batch_size: 100,
            start_page: 1,
        }
    }
}

/// One image written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub source_url: String,
    pub local_path: PathBuf,
}

/// Lazy pull iterator over the image URLs of consecutive results pages.
///
/// State machine over {current_page, pending}: pop from `pending` while
/// non-empty; otherwise fetch the current page, extract its URL set, and
/// either refill (advancing the page counter) or end the sequence on an
/// empty extraction. A page is never revisited, and no page bound is
/// imposed; limiting consumption is the caller's job. A fetch failure is
/// yielded once as `Err`, after which the sequence ends.
pub struct ImageUrls<'a, F: PageFetcher> {
    fetcher: &'a F,
    request: ScrapeRequest,
    current_page: u32,
    pending: VecDeque<String>,
    finished: bool,
}

impl<'a, F: PageFetcher> ImageUrls<'a, F> {
    fn new(fetcher: &'a F, request: ScrapeRequest) -> Self {
        Self {
            fetcher,
            request,
            current_page: request.start_page,
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

impl<F: PageFetcher> Iterator for ImageUrls<'_, F> {
    type Item = Result<String, ScrapeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(url) = self.pending.pop_front() {
            return Some(Ok(url));
        }
        if self.finished {
            return None;
        }

        let page_url = build_page_query(
            self.request.category,
            self.request.batch_size,
            self.current_page,
        );
        tracing::debug!(page = self.current_page, url = %page_url, "fetching results page");

        let content = match self.fetcher.fetch_text(&page_url) {
            Ok(content) => content,
            Err(err) => {
                self.finished = true;
                return Some(Err(err));
            }
        };

        let urls = extract_image_urls(&content);
        if urls.is_empty() {
            // Pagination ran past the last page of results.
            self.finished = true;
            return None;
        }

        tracing::debug!(
            page = self.current_page,
            count = urls.len(),
            "extracted image urls"
        );
        self.pending.extend(urls);
        self.current_page += 1;
        self.pending.pop_front().map(Ok)
    }
}

/// Drives a scrape run against injected fetch/download capabilities.
pub struct Scraper<C> {
    client: C,
}

impl<C> Scraper<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: PageFetcher> Scraper<C> {
    /// Starts a fresh traversal from `request.start_page`. Each call
    /// returns an independent iterator; traversals are not resumable.
    pub fn image_urls(&self, request: ScrapeRequest) -> ImageUrls<'_, C> {
        ImageUrls::new(&self.client, request)
    }
}

impl<C: PageFetcher + ImageDownloader> Scraper<C> {
    /// Downloads at most `limit` images (all of them if `None`, which is
    /// unbounded) into `dest`, or into a fresh kept temporary directory
    /// when no destination is given. Returns the records in consumption
    /// order.
    ///
    /// Files written before a failure stay on disk; the first error
    /// propagates with no retry and no rollback.
    pub fn scrape(
        &self,
        request: ScrapeRequest,
        limit: Option<usize>,
        dest: Option<&Path>,
    ) -> Result<Vec<DownloadedFile>, ScrapeError> {
        let dest_dir = match dest {
            Some(dir) => dir.to_path_buf(),
            None => {
                let dir = tempfile::Builder::new()
                    .prefix("getty-scrape-")
                    .tempdir()?
                    .keep();
                tracing::info!(dir = %dir.display(), "storing images in temporary directory");
                dir
            }
        };

        let mut files = Vec::new();
        let budget = limit.unwrap_or(usize::MAX);
        for item in self.image_urls(request).take(budget) {
            let url = item?;
            let local_path = dest_dir.join(derive_filename(&url));
            tracing::info!(url = %url, path = %local_path.display(), "downloading image");
            self.client.download_to(&url, &local_path)?;
            files.push(DownloadedFile {
                source_url: url,
                local_path,
            });
        }
        Ok(files)
    }
}
