//! Staged resource display model

use serde::Serialize;
use tabled::Tabled;

use arpio::client::models::StagedResource;

use super::common::truncate_string;

/// Staged resource display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StagedResourceDisplay {
    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub resource_type: String,

    #[tabled(rename = "ARN")]
    pub arn: String,

    /// Staged artifact kinds, e.g. "ec2Snapshot (target)"
    #[tabled(rename = "EXTRAS")]
    pub extras: String,

    #[tabled(rename = "TAGS")]
    pub tags: usize,
}

impl From<&StagedResource> for StagedResourceDisplay {
    fn from(resource: &StagedResource) -> Self {
        let extras = resource
            .extras
            .iter()
            .map(|e| format!("{} ({})", e.extra_type(), e.environment().as_str()))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            resource_type: resource.resource_type.clone(),
            arn: truncate_string(&resource.arn, 96),
            extras,
            tags: resource.tags.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpio::client::models::{Ec2SnapshotExtra, Environment, KmsKeyExtra, StagedExtra};

    #[test]
    fn test_staged_resource_display() {
        let resource = StagedResource {
            arn: "arn:aws:ec2:us-east-1:111:volume/vol-1".to_string(),
            resource_type: "AWS::EC2::Volume".to_string(),
            tags: [("Name".to_string(), "data".to_string())].into_iter().collect(),
            extras: vec![
                StagedExtra::Ec2Snapshot(Ec2SnapshotExtra {
                    environment: Environment::Target,
                    ..Default::default()
                }),
                StagedExtra::KmsKey(KmsKeyExtra::default()),
            ],
        };

        let display = StagedResourceDisplay::from(&resource);
        assert_eq!(display.resource_type, "AWS::EC2::Volume");
        assert_eq!(display.extras, "ec2Snapshot (target), kmsKey (source)");
        assert_eq!(display.tags, 1);
    }

    #[test]
    fn test_unrecognized_environment_is_shown_verbatim() {
        let resource = StagedResource {
            arn: "arn:1".to_string(),
            resource_type: "AWS::KMS::Key".to_string(),
            extras: vec![StagedExtra::KmsKey(KmsKeyExtra {
                environment: Environment::Other("staging".to_string()),
                ..Default::default()
            })],
            ..Default::default()
        };

        let display = StagedResourceDisplay::from(&resource);
        assert_eq!(display.extras, "kmsKey (staging)");
    }
}
