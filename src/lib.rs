//! Inspect ROS2 bag recording directories without opening their data
//! files.
//!
//! A rosbag2 recording is a directory of `.mcap` or `.db3` data files
//! plus a `metadata.yaml` sidecar describing them. This crate detects
//! such directories, parses the sidecar into a display-ready
//! [`BagSummary`] (start/end time, duration, size, message and topic
//! counts, per-topic breakdown), and builds a host-agnostic context
//! menu tree from it. Parsed summaries are cached per (path, mtime),
//! so unchanged sidecars are never re-read.
//!
//! Everything degrades silently: a directory that cannot be read is
//! not a bag, a sidecar that cannot be parsed summarizes as
//! `"unknown"` everywhere. The feature is advisory, so no error ever
//! reaches the host's UI.
//!
//! ```no_run
//! use std::path::Path;
//! use rosbag_info::{bag_menu, metadata_path, SummaryBuilder};
//!
//! let dir = Path::new("/data/run_1");
//! let mut builder = SummaryBuilder::new();
//!
//! if let Some(sidecar) = metadata_path(dir) {
//!     let summary = builder.summarize(&sidecar);
//!     let menu = bag_menu(dir, &summary);
//!     println!("{}: {} topics", menu.label, summary.topics.len());
//! }
//! ```

pub mod cache;
pub mod detect;
pub mod format;
pub mod menu;
pub mod metadata;
pub mod summary;

pub use detect::{is_bag_directory, metadata_path, METADATA_FILE_NAME};
pub use menu::{bag_menu, open_with_default_handler, MenuAction, MenuItem};
pub use summary::{parse_summary, BagSummary, SummaryBuilder, SummaryError, TopicInfo};
