//! Staged resource models
//!
//! A staged resource is a cloud resource materialized into a recovery point.
//! Its `extras` describe type-specific restore metadata. The service adds new
//! extra types over time, so unknown ones are dropped when decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::codec::Tagged;

pub const BACKUP_RECOVERY_POINT_EXTRA_TYPE: &str = "backupRecoveryPoint";
pub const BACKUP_VAULT_EXTRA_TYPE: &str = "backupVault";
pub const EC2_IMAGE_EXTRA_TYPE: &str = "ec2Image";
pub const EC2_SNAPSHOT_EXTRA_TYPE: &str = "ec2Snapshot";
pub const KMS_KEY_EXTRA_TYPE: &str = "kmsKey";
pub const RDS_DB_CLUSTER_SNAPSHOT_EXTRA_TYPE: &str = "rdsDbClusterSnapshot";
pub const RDS_DB_SNAPSHOT_EXTRA_TYPE: &str = "rdsDbSnapshot";
pub const RDS_OPTION_GROUP_EXTRA_TYPE: &str = "rdsOptionGroup";

/// Which side of the sync pair an extra lives in
///
/// Values this client does not recognize are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    #[default]
    Source,
    Target,
    Other(String),
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Source => "source",
            Environment::Target => "target",
            Environment::Other(value) => value,
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "source" => Environment::Source,
            "target" => Environment::Target,
            _ => Environment::Other(value),
        }
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Resource staged into a recovery point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedResource {
    pub arn: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: HashMap<String, String>,

    #[serde(rename = "type")]
    pub resource_type: String,

    #[serde(default, with = "crate::codec::lenient")]
    pub extras: Vec<StagedExtra>,
}

/// Type-specific restore metadata attached to a staged resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StagedExtra {
    #[serde(rename = "backupRecoveryPoint")]
    BackupRecoveryPoint(BackupRecoveryPointExtra),
    #[serde(rename = "backupVault")]
    BackupVault(BackupVaultExtra),
    #[serde(rename = "ec2Image")]
    Ec2Image(Ec2ImageExtra),
    #[serde(rename = "ec2Snapshot")]
    Ec2Snapshot(Ec2SnapshotExtra),
    #[serde(rename = "kmsKey")]
    KmsKey(KmsKeyExtra),
    #[serde(rename = "rdsDbClusterSnapshot")]
    RdsDbClusterSnapshot(RdsDbClusterSnapshotExtra),
    #[serde(rename = "rdsDbSnapshot")]
    RdsDbSnapshot(RdsDbSnapshotExtra),
    #[serde(rename = "rdsOptionGroup")]
    RdsOptionGroup(RdsOptionGroupExtra),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecoveryPointExtra {
    pub environment: Environment,
    pub backup_vault_name: String,
    pub recovery_point_arn: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub restore_metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupVaultExtra {
    pub environment: Environment,
    pub backup_vault_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2ImageExtra {
    pub environment: Environment,
    pub image_arn: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub snapshot_arns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2SnapshotExtra {
    pub environment: Environment,
    pub snapshot_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KmsKeyExtra {
    pub environment: Environment,
    pub kms_key_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdsDbClusterSnapshotExtra {
    pub environment: Environment,
    pub db_cluster_snapshot_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdsDbSnapshotExtra {
    pub environment: Environment,
    pub db_snapshot_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdsOptionGroupExtra {
    pub environment: Environment,
    pub option_group_arn: String,
}

impl StagedExtra {
    /// The `type` discriminator of this extra.
    pub fn extra_type(&self) -> &'static str {
        match self {
            StagedExtra::BackupRecoveryPoint(_) => BACKUP_RECOVERY_POINT_EXTRA_TYPE,
            StagedExtra::BackupVault(_) => BACKUP_VAULT_EXTRA_TYPE,
            StagedExtra::Ec2Image(_) => EC2_IMAGE_EXTRA_TYPE,
            StagedExtra::Ec2Snapshot(_) => EC2_SNAPSHOT_EXTRA_TYPE,
            StagedExtra::KmsKey(_) => KMS_KEY_EXTRA_TYPE,
            StagedExtra::RdsDbClusterSnapshot(_) => RDS_DB_CLUSTER_SNAPSHOT_EXTRA_TYPE,
            StagedExtra::RdsDbSnapshot(_) => RDS_DB_SNAPSHOT_EXTRA_TYPE,
            StagedExtra::RdsOptionGroup(_) => RDS_OPTION_GROUP_EXTRA_TYPE,
        }
    }

    pub fn environment(&self) -> &Environment {
        match self {
            StagedExtra::BackupRecoveryPoint(e) => &e.environment,
            StagedExtra::BackupVault(e) => &e.environment,
            StagedExtra::Ec2Image(e) => &e.environment,
            StagedExtra::Ec2Snapshot(e) => &e.environment,
            StagedExtra::KmsKey(e) => &e.environment,
            StagedExtra::RdsDbClusterSnapshot(e) => &e.environment,
            StagedExtra::RdsDbSnapshot(e) => &e.environment,
            StagedExtra::RdsOptionGroup(e) => &e.environment,
        }
    }
}

impl Tagged for StagedExtra {
    const TAG_FIELD: &'static str = "type";
    const KNOWN_KINDS: &'static [&'static str] = &[
        BACKUP_RECOVERY_POINT_EXTRA_TYPE,
        BACKUP_VAULT_EXTRA_TYPE,
        EC2_IMAGE_EXTRA_TYPE,
        EC2_SNAPSHOT_EXTRA_TYPE,
        KMS_KEY_EXTRA_TYPE,
        RDS_DB_CLUSTER_SNAPSHOT_EXTRA_TYPE,
        RDS_DB_SNAPSHOT_EXTRA_TYPE,
        RDS_OPTION_GROUP_EXTRA_TYPE,
    ];

    fn kind(&self) -> &'static str {
        self.extra_type()
    }
}
