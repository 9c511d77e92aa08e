//! Selection rule models

use serde::{Deserialize, Serialize};

use crate::codec::Tagged;

pub const ARN_RULE_TYPE: &str = "arn";
pub const TAG_RULE_TYPE: &str = "tag";

/// Filter deciding which cloud resources an application protects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ruleType")]
pub enum SelectionRule {
    #[serde(rename = "arn")]
    Arn(ArnRule),
    #[serde(rename = "tag")]
    Tag(TagRule),
}

/// Matches resources by exact ARN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArnRule {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub arns: Vec<String>,
}

/// Matches resources carrying a tag. An empty value matches any value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl SelectionRule {
    pub fn arn<I, S>(arns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectionRule::Arn(ArnRule {
            arns: arns.into_iter().map(Into::into).collect(),
        })
    }

    pub fn tag(name: impl Into<String>, value: impl Into<String>) -> Self {
        SelectionRule::Tag(TagRule {
            name: name.into(),
            value: value.into(),
        })
    }

    /// The `ruleType` discriminator of this rule.
    pub fn rule_type(&self) -> &'static str {
        match self {
            SelectionRule::Arn(_) => ARN_RULE_TYPE,
            SelectionRule::Tag(_) => TAG_RULE_TYPE,
        }
    }
}

impl Tagged for SelectionRule {
    const TAG_FIELD: &'static str = "ruleType";
    const KNOWN_KINDS: &'static [&'static str] = &[ARN_RULE_TYPE, TAG_RULE_TYPE];

    fn kind(&self) -> &'static str {
        self.rule_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arn_rule_json() {
        let orig = SelectionRule::arn(["arn:a", "arn:b"]);
        let encoded = serde_json::to_string(&orig).unwrap();
        assert_eq!(encoded, r#"{"ruleType":"arn","arns":["arn:a","arn:b"]}"#);

        let decoded: SelectionRule = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, orig);
    }

    #[test]
    fn test_tag_rule_json() {
        let orig = SelectionRule::tag("foo", "bar");
        let encoded = serde_json::to_string(&orig).unwrap();
        assert_eq!(encoded, r#"{"ruleType":"tag","name":"foo","value":"bar"}"#);

        let decoded: SelectionRule = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, orig);
    }

    #[test]
    fn test_null_arns_decode_as_empty() {
        let decoded: SelectionRule =
            serde_json::from_str(r#"{"ruleType":"arn","arns":null}"#).unwrap();
        assert_eq!(decoded, SelectionRule::arn(Vec::<String>::new()));

        let decoded: SelectionRule = serde_json::from_str(r#"{"ruleType":"arn"}"#).unwrap();
        assert_eq!(decoded, SelectionRule::arn(Vec::<String>::new()));
    }

    #[test]
    fn test_tag_rule_empty_value_is_kept() {
        let encoded = serde_json::to_string(&SelectionRule::tag("backup", "")).unwrap();
        assert_eq!(encoded, r#"{"ruleType":"tag","name":"backup","value":""}"#);
    }

    #[test]
    fn test_rule_type_accessor() {
        assert_eq!(SelectionRule::arn(Vec::<String>::new()).rule_type(), "arn");
        assert_eq!(SelectionRule::tag("a", "b").rule_type(), "tag");
        assert_eq!(SelectionRule::tag("a", "b").kind(), TAG_RULE_TYPE);
    }
}
