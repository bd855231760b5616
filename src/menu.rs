//! Host-agnostic menu tree for a bag's context-menu entry.
//!
//! File-manager hosts render this however their toolkit likes; the
//! library only decides structure, labels, and tips. The single action
//! in the tree is opening the sidecar with the platform's default
//! handler.

use std::path::{Path, PathBuf};

use crate::detect::METADATA_FILE_NAME;
use crate::format::UNKNOWN;
use crate::summary::BagSummary;

/// An action the host may trigger from a menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the sidecar metadata file with the OS default handler.
    OpenMetadata(PathBuf),
}

/// One entry in the rendered menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable identifier for the host's menu registry.
    pub id: String,
    pub label: String,
    pub tip: String,
    pub children: Vec<MenuItem>,
    pub action: Option<MenuAction>,
}

impl MenuItem {
    fn leaf(id: impl Into<String>, label: String, tip: String) -> Self {
        Self {
            id: id.into(),
            label,
            tip,
            children: Vec::new(),
            action: None,
        }
    }
}

fn count_label(count: Option<impl ToString>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// Build the context-menu tree for a detected bag directory.
pub fn bag_menu(bag_dir: &Path, summary: &BagSummary) -> MenuItem {
    let bag_name = bag_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| bag_dir.display().to_string());

    let mut children = vec![
        MenuItem::leaf(
            "ROS2BagInfo::start_time",
            format!("Start: {}", summary.start_time),
            format!("Recording start time: {}", summary.start_time),
        ),
        MenuItem::leaf(
            "ROS2BagInfo::end_time",
            format!("End: {}", summary.end_time),
            format!("Recording end time: {}", summary.end_time),
        ),
        MenuItem::leaf(
            "ROS2BagInfo::duration",
            format!("Duration: {}", summary.duration),
            format!("Recording duration: {}", summary.duration),
        ),
        MenuItem::leaf(
            "ROS2BagInfo::size",
            format!("Size: {}", summary.size),
            format!("Bag file size: {}", summary.size),
        ),
        MenuItem::leaf(
            "ROS2BagInfo::messages",
            format!("Messages: {}", count_label(summary.message_count)),
            format!("Total messages: {}", count_label(summary.message_count)),
        ),
    ];

    let mut topics_item = MenuItem::leaf(
        "ROS2BagInfo::topics",
        format!("Topics: {}", count_label(summary.topic_count)),
        format!("Number of topics: {}", count_label(summary.topic_count)),
    );

    for topic in &summary.topics {
        topics_item.children.push(MenuItem::leaf(
            format!("ROS2BagInfo::topic_{}", topic.name.replace('/', "_")),
            format!("{}: {}", topic.name, topic.message_count),
            format!(
                "Topic: {} | Type: {} | Messages: {}",
                topic.name, topic.message_type, topic.message_count
            ),
        ));
    }

    children.push(topics_item);

    let metadata = bag_dir.join(METADATA_FILE_NAME);
    children.push(MenuItem {
        id: "ROS2BagInfo::view_metadata".into(),
        label: "View Metadata".into(),
        tip: "View the raw metadata.yaml file content".into(),
        children: Vec::new(),
        action: Some(MenuAction::OpenMetadata(metadata)),
    });

    MenuItem {
        id: "ROS2BagInfo::bag_info".into(),
        label: "ROS2 Bag Info".into(),
        tip: format!("View information about {bag_name}"),
        children,
        action: None,
    }
}

/// Launch the platform's registered handler for `path`.
///
/// Advisory only: the spawn failure is logged and otherwise ignored,
/// and the child's exit status is never collected.
pub fn open_with_default_handler(path: &Path) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    if let Err(e) = std::process::Command::new(opener).arg(path).spawn() {
        log::debug!("could not open '{}' with {opener}: {e}", path.display());
    }
}
