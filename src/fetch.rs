//! HTTP download of the source tarball
//!
//! One blocking GET; the body is streamed into the destination file. The file
//! is only created once response headers have arrived, so a transport failure
//! leaves nothing behind. A failure while copying the body is reported as a
//! write failure and leaves a partial file, which the next run truncates.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use crate::error::{self, Result};
use crate::ui::ProgressReporter;

/// Result of a completed download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub path: PathBuf,
    /// Number of body bytes written
    pub bytes: u64,
    /// HTTP status of the response
    pub status: u16,
}

/// Blocking HTTP downloader
pub struct Fetcher {
    client: Client,
    accept_error_status: bool,
}

impl Fetcher {
    /// Create a downloader.
    ///
    /// With `accept_error_status` a non-2xx body is written like any other;
    /// otherwise it fails with `HttpStatus` before the destination is touched.
    pub fn new(accept_error_status: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(|e| error::fetch::failed("<client>", e))?;
        Ok(Self {
            client,
            accept_error_status,
        })
    }

    /// Download `url` into `destination`, creating or truncating it.
    pub fn fetch(
        &self,
        url: &Url,
        destination: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<FetchOutcome> {
        debug!(%url, destination = %destination.display(), "sending GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| error::fetch::failed(url.as_str(), e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            if !self.accept_error_status {
                return Err(error::fetch::http_status(url.as_str(), status.as_u16()));
            }
            warn!(%url, status = status.as_u16(), "keeping body of unsuccessful response");
        }

        let file = File::create(destination)
            .map_err(|e| error::fs::write_failed(destination, e))?;
        let mut writer = BufWriter::new(file);

        let pb = reporter.transfer(response.content_length());
        let copied = io::copy(&mut pb.wrap_read(response), &mut writer);
        if copied.is_err() {
            pb.abandon();
        } else {
            pb.finish_and_clear();
        }
        let bytes = copied.map_err(|e| error::fs::write_failed(destination, e))?;

        writer
            .flush()
            .map_err(|e| error::fs::write_failed(destination, e))?;

        debug!(bytes, "download written");
        Ok(FetchOutcome {
            path: destination.to_path_buf(),
            bytes,
            status: status.as_u16(),
        })
    }
}

fn user_agent() -> String {
    format!("redis-bootstrap/{}", env!("CARGO_PKG_VERSION"))
}
