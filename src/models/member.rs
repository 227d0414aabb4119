use serde::{Deserialize, Serialize};

use crate::models::Signature;

/// One reflected property or method of an [`crate::models::ApiEntity`].
///
/// Properties carry a `type`; methods carry `signatures`. Package-level
/// functions are member-shaped reflections too and reuse this record with
/// `inherited` always false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMember {
    pub name: String,
    pub access: Access,
    pub deprecated: bool,
    /// True when the member is defined on an ancestor class; `file` and
    /// `line` then point at the defining class, not the documented one.
    pub inherited: bool,
    /// Source file of the definition, relative to the package root.
    pub file: String,
    pub line: u32,
    /// Doc tags captured by the extraction tool (e.g. `since`).
    pub tags: Vec<Tag>,
    /// Declared type, for properties.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Call shapes, for methods and functions. More than one entry means
    /// the member is overloaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<Signature>>,
}

/// Access level of a reflected member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Protected,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }
}

/// A doc tag attached to a member, with an optional value
/// (e.g. `since 0.1.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_round_trips_through_strings() {
        assert_eq!(Access::from_str("public"), Some(Access::Public));
        assert_eq!(Access::from_str("protected"), Some(Access::Protected));
        assert_eq!(Access::from_str("private"), None);
        assert_eq!(Access::Public.as_str(), "public");
        assert_eq!(Access::Protected.as_str(), "protected");
    }

    #[test]
    fn access_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Access::Protected).unwrap(),
            "\"protected\""
        );
    }
}
