//! Bag summary construction, backed by a bounded (path, mtime) cache.

use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use log::debug;

use crate::cache::BoundedCache;
use crate::format::{human_bytes, human_duration, human_timestamp, UNKNOWN};
use crate::metadata::MetadataFile;

/// Errors on the fallible parse path.
///
/// [`SummaryBuilder::summarize`] absorbs these into
/// [`BagSummary::unavailable`]; they are only visible to callers of
/// [`parse_summary`].
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("failed to read metadata: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One topic recorded in the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicInfo {
    pub name: String,
    /// Message schema identifier, e.g. `sensor_msgs/msg/Imu`.
    pub message_type: String,
    pub message_count: u64,
}

/// Immutable, display-ready summary of one bag.
///
/// String fields hold `"unknown"` when the metadata does not provide
/// the value. The count fields are `None` only on the fallback summary
/// produced when the sidecar could not be read or parsed, so
/// [`BagSummary::is_unavailable`] distinguishes a failed parse from a
/// genuinely empty recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagSummary {
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub size: String,
    pub message_count: Option<u64>,
    pub topic_count: Option<usize>,
    /// Sorted by topic name ascending.
    pub topics: Vec<TopicInfo>,
}

impl BagSummary {
    /// The all-`"unknown"` summary returned when the sidecar is
    /// unreadable or malformed.
    pub fn unavailable() -> Self {
        Self {
            start_time: UNKNOWN.to_string(),
            end_time: UNKNOWN.to_string(),
            duration: UNKNOWN.to_string(),
            size: UNKNOWN.to_string(),
            message_count: None,
            topic_count: None,
            topics: Vec::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.message_count.is_none()
    }
}

/// Builds [`BagSummary`] values, re-parsing a sidecar only when its
/// modification time changes.
///
/// Single-threaded by contract: the cache is not locked, so hosts with
/// multiple event threads must serialize calls externally.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    cache: BoundedCache<BagSummary>,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize the bag described by the sidecar at `metadata_path`.
    ///
    /// A cache hit (same path, unchanged mtime) returns the stored
    /// summary without touching the file beyond the stat call. Never
    /// fails: any I/O or YAML error degrades to
    /// [`BagSummary::unavailable`].
    pub fn summarize(&mut self, metadata_path: &Path) -> BagSummary {
        let key = cache_key(metadata_path);

        if let Some(key) = &key {
            if let Some(hit) = self.cache.get(key) {
                return hit.clone();
            }
        }

        match parse_summary(metadata_path) {
            Ok(summary) => {
                if let Some(key) = key {
                    self.cache.insert(key, summary.clone());
                }
                summary
            }
            Err(e) => {
                debug!("no summary for '{}': {e}", metadata_path.display());
                BagSummary::unavailable()
            }
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

/// Sidecar path joined with its mtime, so a rewritten file produces a
/// fresh key and the stale entry ages out passively.
fn cache_key(path: &Path) -> Option<String> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let nanos = modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    Some(format!("{}:{nanos}", path.display()))
}

/// Parse the sidecar at `metadata_path` into a summary.
///
/// The fallible counterpart of [`SummaryBuilder::summarize`], for
/// callers that need to tell a failed parse from an empty bag.
pub fn parse_summary(metadata_path: &Path) -> Result<BagSummary, SummaryError> {
    let text = fs::read_to_string(metadata_path)?;
    let doc: MetadataFile = serde_yaml::from_str(&text)?;
    let info = doc.rosbag2_bagfile_information;

    let duration_ns = info.duration.nanoseconds;
    let start_ns = info.starting_time.nanoseconds_since_epoch;

    // A zero start means the recorder never stamped the bag; without
    // it neither endpoint is meaningful.
    let (start_time, end_time) = if start_ns != 0 {
        let end = if duration_ns != 0 {
            human_timestamp(start_ns + duration_ns)
        } else {
            UNKNOWN.to_string()
        };
        (human_timestamp(start_ns), end)
    } else {
        (UNKNOWN.to_string(), UNKNOWN.to_string())
    };

    let mut topics: Vec<TopicInfo> = info
        .topics_with_message_count
        .into_iter()
        .map(|topic| TopicInfo {
            name: topic.topic_metadata.name.unwrap_or_else(|| UNKNOWN.to_string()),
            message_type: topic
                .topic_metadata
                .type_name
                .unwrap_or_else(|| UNKNOWN.to_string()),
            message_count: topic.message_count,
        })
        .collect();
    // Stable, so topics sharing a name keep their sidecar order.
    topics.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(BagSummary {
        start_time,
        end_time,
        duration: human_duration(duration_ns),
        size: bag_size(metadata_path, &info.relative_file_paths),
        message_count: Some(info.message_count),
        topic_count: Some(topics.len()),
        topics,
    })
}

/// Sum the on-disk sizes of the data files the sidecar names. Missing
/// files contribute nothing; an empty list means the size is
/// unreported.
fn bag_size(metadata_path: &Path, relative_paths: &[String]) -> String {
    if relative_paths.is_empty() {
        return UNKNOWN.to_string();
    }

    let bag_dir = metadata_path.parent().unwrap_or_else(|| Path::new(""));
    let total: u64 = relative_paths
        .iter()
        .filter_map(|rel| fs::metadata(bag_dir.join(rel)).ok())
        .map(|meta| meta.len())
        .sum();

    human_bytes(total)
}
