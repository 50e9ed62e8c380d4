//! Entity operation tags.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{ActionError, ActionResult};

/// Application-defined operation tag.
///
/// Only constructible through [`EntityOp::custom`] (or parsing), so the name is
/// never empty and never shadows a built-in tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomOp(String);

impl CustomOp {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! entity_ops {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Operation performed against a named entity kind.
        ///
        /// The built-in tags cover the query, save and cache operations. Applications
        /// may add their own with [`EntityOp::custom`]. Tags compare by equality only.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub enum EntityOp {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
            /// Application-defined tag.
            Custom(CustomOp),
        }

        impl EntityOp {
            /// Every built-in tag, in declaration order.
            pub const BUILT_IN: &'static [EntityOp] = &[$(EntityOp::$variant),+];

            /// The tag name, as it appears in action labels.
            pub fn as_str(&self) -> &str {
                match self {
                    $(EntityOp::$variant => $name,)+
                    EntityOp::Custom(op) => op.as_str(),
                }
            }

            fn built_in(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(EntityOp::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

entity_ops! {
    QueryAll => "QUERY_ALL",
    QueryAllSuccess => "QUERY_ALL_SUCCESS",
    QueryAllError => "QUERY_ALL_ERROR",
    QueryByKey => "QUERY_BY_KEY",
    QueryByKeySuccess => "QUERY_BY_KEY_SUCCESS",
    QueryByKeyError => "QUERY_BY_KEY_ERROR",
    QueryMany => "QUERY_MANY",
    QueryManySuccess => "QUERY_MANY_SUCCESS",
    QueryManyError => "QUERY_MANY_ERROR",
    SaveAdd => "SAVE_ADD",
    SaveAddSuccess => "SAVE_ADD_SUCCESS",
    SaveAddError => "SAVE_ADD_ERROR",
    SaveDelete => "SAVE_DELETE",
    SaveDeleteSuccess => "SAVE_DELETE_SUCCESS",
    SaveDeleteError => "SAVE_DELETE_ERROR",
    SaveUpdate => "SAVE_UPDATE",
    SaveUpdateSuccess => "SAVE_UPDATE_SUCCESS",
    SaveUpdateError => "SAVE_UPDATE_ERROR",
    AddAll => "ADD_ALL",
    AddMany => "ADD_MANY",
    AddOne => "ADD_ONE",
    RemoveAll => "REMOVE_ALL",
    RemoveMany => "REMOVE_MANY",
    RemoveOne => "REMOVE_ONE",
    UpdateMany => "UPDATE_MANY",
    UpdateOne => "UPDATE_ONE",
    SetFilter => "SET_FILTER",
    SetLoading => "SET_LOADING",
}

impl EntityOp {
    /// Create a tag from a name, ignoring surrounding whitespace.
    ///
    /// Built-in names resolve to their built-in variant, so
    /// `EntityOp::custom("QUERY_ALL")` equals `EntityOp::QueryAll`.
    pub fn custom(name: impl Into<String>) -> ActionResult<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::missing_operation("operation tag is empty"));
        }
        Ok(Self::built_in(name).unwrap_or_else(|| EntityOp::Custom(CustomOp(name.to_string()))))
    }

    /// Outcome tag reported when this operation succeeds, if it has one.
    pub fn success_op(&self) -> Option<EntityOp> {
        use EntityOp::*;
        match self {
            QueryAll => Some(QueryAllSuccess),
            QueryByKey => Some(QueryByKeySuccess),
            QueryMany => Some(QueryManySuccess),
            SaveAdd => Some(SaveAddSuccess),
            SaveDelete => Some(SaveDeleteSuccess),
            SaveUpdate => Some(SaveUpdateSuccess),
            _ => None,
        }
    }

    /// Outcome tag reported when this operation fails, if it has one.
    pub fn error_op(&self) -> Option<EntityOp> {
        use EntityOp::*;
        match self {
            QueryAll => Some(QueryAllError),
            QueryByKey => Some(QueryByKeyError),
            QueryMany => Some(QueryManyError),
            SaveAdd => Some(SaveAddError),
            SaveDelete => Some(SaveDeleteError),
            SaveUpdate => Some(SaveUpdateError),
            _ => None,
        }
    }
}

impl core::fmt::Display for EntityOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityOp {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::custom(s)
    }
}

impl TryFrom<String> for EntityOp {
    type Error = ActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::custom(value)
    }
}

impl From<EntityOp> for String {
    fn from(value: EntityOp) -> Self {
        match value {
            EntityOp::Custom(op) => op.0,
            built_in => built_in.as_str().to_string(),
        }
    }
}
