//! Schedule document loader.
//!
//! Schedules live either in a local directory or behind an HTTP base URL.
//! Each load reads the file afresh; nothing is kept between requests.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::domain::DayType;

use super::error::ScheduleError;
use super::types::ScheduleDocument;

/// Where schedule files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleLocation {
    /// A directory containing `station_schedule*.json`.
    Directory(PathBuf),
    /// A base URL; files are fetched from `{base_url}/{file_name}`.
    Remote(String),
}

/// Configuration for the schedule loader.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub location: ScheduleLocation,

    /// Whether the requested day type picks the schedule file.
    ///
    /// When off, the weekday file is always read regardless of the
    /// requested day.
    pub day_selection: bool,

    /// Request timeout for remote loads, in seconds.
    pub timeout_secs: u64,
}

impl ScheduleConfig {
    /// Load schedules from a local directory.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            location: ScheduleLocation::Directory(path.into()),
            day_selection: false,
            timeout_secs: 30,
        }
    }

    /// Load schedules from a remote base URL.
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            location: ScheduleLocation::Remote(base_url.into()),
            day_selection: false,
            timeout_secs: 30,
        }
    }

    /// Enable or disable day-based file selection.
    pub fn with_day_selection(mut self, enabled: bool) -> Self {
        self.day_selection = enabled;
        self
    }

    /// Set the remote request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::directory("data")
    }
}

/// Loads schedule documents.
#[derive(Debug, Clone)]
pub struct ScheduleLoader {
    http: reqwest::Client,
    config: ScheduleConfig,
}

impl ScheduleLoader {
    /// Create a new loader.
    pub fn new(config: ScheduleConfig) -> Result<Self, ScheduleError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The loader's configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// The file name that will be read for a requested day type.
    pub fn file_name_for(&self, day: DayType) -> &'static str {
        if self.config.day_selection {
            day.schedule_file_name()
        } else {
            DayType::Weekday.schedule_file_name()
        }
    }

    /// Load the schedule document for a day type.
    pub async fn load(&self, day: DayType) -> Result<ScheduleDocument, ScheduleError> {
        let file_name = self.file_name_for(day);
        debug!(%day, file_name, "loading schedule");

        let body = match &self.config.location {
            ScheduleLocation::Directory(dir) => {
                let path = dir.join(file_name);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| ScheduleError::Io { path, source })?
            }
            ScheduleLocation::Remote(base_url) => {
                let url = format!("{}/{}", base_url.trim_end_matches('/'), file_name);
                self.fetch(&url).await?
            }
        };

        parse_document(&body)
    }

    async fn fetch(&self, url: &str) -> Result<String, ScheduleError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScheduleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Parse a schedule document from JSON text.
pub fn parse_document(body: &str) -> Result<ScheduleDocument, ScheduleError> {
    serde_json::from_str(body).map_err(|e| ScheduleError::Json {
        message: e.to_string(),
    })
}
