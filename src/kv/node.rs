//! KV node and its lookup helpers

use crate::error::{ResolveError, Result};
use crate::patterns::{LIST_SEPARATOR, NON_NUMERIC};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A node of a parsed KeyValues1 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub value: Value,
}

/// Node payload: either a scalar string or ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    Collection(Vec<Node>),
}

impl Node {
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Value::Scalar(value.into()),
        }
    }

    pub fn collection(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            value: Value::Collection(children),
        }
    }

    /// Scalar value, or `None` for collections
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::Scalar(s) => Some(s.as_str()),
            Value::Collection(_) => None,
        }
    }

    #[inline]
    pub fn is_collection(&self) -> bool {
        matches!(self.value, Value::Collection(_))
    }

    /// Children of a collection; empty for scalars
    #[inline]
    pub fn children(&self) -> &[Node] {
        match &self.value {
            Value::Scalar(_) => &[],
            Value::Collection(children) => children,
        }
    }

    /// Fetch the first child with the given name (ASCII case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children()
            .iter()
            .find(|child| child.name.eq_ignore_ascii_case(name))
    }

    /// Fetch a child that must be present
    pub fn require(&self, name: &str) -> Result<&Node> {
        self.get(name).ok_or_else(|| ResolveError::MissingNode {
            parent: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Scalar value of a named child
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Node::as_str)
    }

    /// True when a named child holds a truthy flag ("1" or "true")
    pub fn flag(&self, name: &str) -> bool {
        self.get_str(name)
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false)
    }

    /// Parse this node's scalar value as `T`
    pub fn parse_scalar<T: FromStr>(&self) -> Result<T> {
        let raw = self.as_str().ok_or_else(|| ResolveError::MalformedScalar {
            field: self.name.clone(),
            value: "<collection>".to_string(),
        })?;
        raw.trim().parse().map_err(|_| ResolveError::MalformedScalar {
            field: self.name.clone(),
            value: raw.to_string(),
        })
    }

    /// Parse this node's scalar value as a list of `T`
    pub fn parse_list<T: FromStr>(&self, strip_non_numeric: bool) -> Result<Vec<T>> {
        let raw = self.as_str().ok_or_else(|| ResolveError::MalformedValueList {
            field: self.name.clone(),
            value: "<collection>".to_string(),
        })?;
        parse_list(raw, strip_non_numeric).map_err(|_| ResolveError::MalformedValueList {
            field: self.name.clone(),
            value: raw.to_string(),
        })
    }

    /// Optional named scalar; `Ok(None)` when absent, error when malformed
    pub fn parse_child<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.get(name).map(Node::parse_scalar).transpose()
    }
}

/// Split a list value on `[,;\s]+` and parse every item
///
/// With `strip_non_numeric`, characters outside `[0-9.-]` are dropped first and
/// items that become empty are skipped.
pub fn parse_list<T: FromStr>(raw: &str, strip_non_numeric: bool) -> std::result::Result<Vec<T>, T::Err> {
    let mut out = Vec::new();
    for item in LIST_SEPARATOR.split(raw.trim()) {
        if item.is_empty() {
            continue;
        }
        if strip_non_numeric {
            let cleaned = NON_NUMERIC.replace_all(item, "");
            if cleaned.is_empty() {
                continue;
            }
            out.push(cleaned.parse()?);
        } else {
            out.push(item.parse()?);
        }
    }
    Ok(out)
}
