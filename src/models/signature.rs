use serde::{Deserialize, Serialize};

/// One call shape of an overloaded method or function: a parameter list plus
/// a return type, as captured by the documentation extraction tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub parameters: Vec<Parameter>,
    #[serde(rename = "return")]
    pub ret: ReturnType,
}

/// A positional parameter in a [`Signature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

/// The return half of a [`Signature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnType {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
