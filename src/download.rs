// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fetching the OurAirports data files.
//!
//! Each file is streamed to `<name>.download` next to its final location and
//! renamed once complete, so an interrupted download never leaves a truncated
//! CSV where the loader would pick it up.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use airport_db::{DataFiles, DataTable};
use log::{info, warn};
use thiserror::Error;

/// Progress is reported every this many bytes when the size is unknown.
const UNKNOWN_SIZE_REPORT_INTERVAL: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("cannot create data directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Join a base URL and a file name with exactly one slash between them.
pub fn file_url(base_url: &str, file_name: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), file_name.trim_start_matches('/'))
}

/// Temporary path a file is written to before it is renamed into place.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".download");
    PathBuf::from(name)
}

/// Whole percent of `total` reached by `written`, or `None` when the size is unknown.
pub fn percent(written: u64, total: Option<u64>) -> Option<u64> {
    match total {
        Some(0) => Some(100),
        Some(total) => Some((written.saturating_mul(100) / total).min(100)),
        None => None,
    }
}

/// Writer that counts bytes and logs progress for one file.
#[derive(Debug)]
pub struct ProgressWriter<W> {
    inner: W,
    label: String,
    written: u64,
    total: Option<u64>,
    last_report: u64,
}

impl<W: Write> ProgressWriter<W> {
    pub fn new(inner: W, label: impl Into<String>, total: Option<u64>) -> Self {
        Self {
            inner,
            label: label.into(),
            written: 0,
            total,
            last_report: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Report at every tenth percent step, or every megabyte without a known size.
    fn should_report(&self) -> bool {
        match percent(self.written, self.total) {
            Some(p) => p / 10 > self.last_report,
            None => self.written / UNKNOWN_SIZE_REPORT_INTERVAL > self.last_report,
        }
    }

    fn report(&mut self) {
        match percent(self.written, self.total) {
            Some(p) => {
                self.last_report = p / 10;
                info!("{}: {} bytes ({}%)", self.label, self.written, p);
            }
            None => {
                self.last_report = self.written / UNKNOWN_SIZE_REPORT_INTERVAL;
                info!("{}: {} bytes", self.label, self.written);
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        if self.should_report() {
            self.report();
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Blocking downloader for a set of data files under one base URL.
#[derive(Debug)]
pub struct Downloader {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Downloader {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DownloadError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("airport-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DownloadError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Download every file in `files` into `data_dir`.
    ///
    /// Files that already exist are left alone unless `force` is set. Returns
    /// the tables that were fetched.
    pub fn download_all(
        &self,
        data_dir: &Path,
        files: &DataFiles,
        force: bool,
    ) -> Result<Vec<DataTable>, DownloadError> {
        fs::create_dir_all(data_dir).map_err(|source| DownloadError::CreateDir {
            path: data_dir.to_path_buf(),
            source,
        })?;

        let mut fetched = Vec::new();
        for (table, file_name) in files.iter() {
            let path = data_dir.join(file_name);
            if path.exists() && !force {
                info!("{} already exists, skipping download", path.display());
                continue;
            }
            self.download_file(file_name, &path)?;
            fetched.push(table);
        }
        Ok(fetched)
    }

    /// Fetch a single file to `path`, returning its size in bytes.
    pub fn download_file(&self, file_name: &str, path: &Path) -> Result<u64, DownloadError> {
        let url = file_url(&self.base_url, file_name);
        let partial = partial_path(path);

        info!("Downloading {} from {}...", file_name, url);
        let result = self.fetch(&url, file_name, &partial);
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                if let Err(cleanup) = fs::remove_file(&partial) {
                    if cleanup.kind() != io::ErrorKind::NotFound {
                        warn!("Could not remove {}: {}", partial.display(), cleanup);
                    }
                }
                return Err(e);
            }
        };

        fs::rename(&partial, path).map_err(|source| DownloadError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Downloaded {} ({} bytes)", file_name, bytes);
        Ok(bytes)
    }

    fn fetch(&self, url: &str, label: &str, partial: &Path) -> Result<u64, DownloadError> {
        let http_error = |source| DownloadError::Http {
            url: url.to_string(),
            source,
        };
        let write_error = |source| DownloadError::Write {
            path: partial.to_path_buf(),
            source,
        };

        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(http_error)?;

        let file = File::create(partial).map_err(write_error)?;
        let mut writer = ProgressWriter::new(BufWriter::new(file), label, response.content_length());
        response.copy_to(&mut writer).map_err(http_error)?;

        let written = writer.written();
        writer
            .into_inner()
            .into_inner()
            .map_err(|e| write_error(e.into_error()))?;
        Ok(written)
    }
}
