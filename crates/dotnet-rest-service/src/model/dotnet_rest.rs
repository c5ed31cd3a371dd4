use serde::{Deserialize, Serialize};

/// The stored resource.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](resource_framework::ResourceActor).
///
/// See [`impl ActorEntity for DotnetRest`](#impl-ActorEntity-for-DotnetRest) for details on:
/// - Creation parameters ([`DotnetRestCreate`])
/// - Update parameters ([`DotnetRestUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotnetRest {
    pub id: String,
    pub name: String,
}

impl DotnetRest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Payload for creating an entry. A non-empty `id` overwrites the entry stored under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetRestCreate {
    pub id: Option<String>,
    pub name: String,
}

/// Payload for replacing an entry. Every field is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetRestUpdate {
    pub name: String,
}
