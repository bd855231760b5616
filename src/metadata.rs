//! Typed model of the `metadata.yaml` sidecar that rosbag2 writes next
//! to its data files.
//!
//! Every field the recorder may omit carries a default, and unknown
//! keys (storage identifier, QoS profiles, per-file sections from
//! newer format versions) are ignored, so the model accepts any
//! sidecar version without enforcing one.

use serde::Deserialize;

/// Root document: a single `rosbag2_bagfile_information` mapping.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataFile {
    #[serde(default)]
    pub rosbag2_bagfile_information: BagFileInformation,
}

#[derive(Debug, Default, Deserialize)]
pub struct BagFileInformation {
    #[serde(default)]
    pub duration: DurationField,
    #[serde(default)]
    pub starting_time: StartingTimeField,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default)]
    pub topics_with_message_count: Vec<TopicWithMessageCount>,
    /// Data files belonging to the bag, relative to the sidecar's
    /// directory.
    #[serde(default)]
    pub relative_file_paths: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DurationField {
    #[serde(default)]
    pub nanoseconds: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct StartingTimeField {
    #[serde(default)]
    pub nanoseconds_since_epoch: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopicWithMessageCount {
    #[serde(default)]
    pub topic_metadata: TopicMetadata,
    #[serde(default)]
    pub message_count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopicMetadata {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let doc: MetadataFile = serde_yaml::from_str(
            r#"
rosbag2_bagfile_information:
  version: 5
  storage_identifier: mcap
  duration:
    nanoseconds: 5000000000
  starting_time:
    nanoseconds_since_epoch: 1735689600000000000
  message_count: 7
  topics_with_message_count:
    - topic_metadata:
        name: /odom
        type: nav_msgs/msg/Odometry
        serialization_format: cdr
        offered_qos_profiles: ""
      message_count: 7
  relative_file_paths:
    - recording_0.mcap
"#,
        )
        .unwrap();

        let info = doc.rosbag2_bagfile_information;
        assert_eq!(info.duration.nanoseconds, 5_000_000_000);
        assert_eq!(info.starting_time.nanoseconds_since_epoch, 1_735_689_600_000_000_000);
        assert_eq!(info.message_count, 7);
        assert_eq!(info.topics_with_message_count.len(), 1);
        assert_eq!(
            info.topics_with_message_count[0].topic_metadata.name.as_deref(),
            Some("/odom")
        );
        assert_eq!(
            info.topics_with_message_count[0].topic_metadata.type_name.as_deref(),
            Some("nav_msgs/msg/Odometry")
        );
        assert_eq!(info.relative_file_paths, vec!["recording_0.mcap"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let doc: MetadataFile =
            serde_yaml::from_str("rosbag2_bagfile_information:\n  version: 4\n").unwrap();

        let info = doc.rosbag2_bagfile_information;
        assert_eq!(info.duration.nanoseconds, 0);
        assert_eq!(info.starting_time.nanoseconds_since_epoch, 0);
        assert_eq!(info.message_count, 0);
        assert!(info.topics_with_message_count.is_empty());
        assert!(info.relative_file_paths.is_empty());
    }

    #[test]
    fn test_missing_root_key_defaults() {
        let doc: MetadataFile = serde_yaml::from_str("something_else: 1\n").unwrap();
        assert_eq!(doc.rosbag2_bagfile_information.message_count, 0);
    }
}
