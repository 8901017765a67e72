//! `stowage inspect`: list declared stores without touching the API.

use serde::Serialize;

use crate::app::commands::provision::KIND_ORDER;
use crate::domain::{Manifest, ResourceKind};

/// What `stowage inspect` reports about a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    /// Every resource kind in provisioning order, declared or not.
    pub kinds: Vec<KindSummary>,
    pub stores: Vec<DeclaredStore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    pub kind: &'static str,
    /// True when setup would configure and create this kind.
    pub predefined: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredStore {
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub entries: Vec<DeclaredEntry>,
}

/// Declared entry. Values are never reported, only whether one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub has_value: bool,
}

pub fn execute(manifest: &Manifest) -> InspectReport {
    let kinds = KIND_ORDER
        .iter()
        .map(|kind| KindSummary {
            kind: kind.manifest_key(),
            predefined: !manifest.setup.for_kind(*kind).is_empty(),
        })
        .collect();
    let stores = KIND_ORDER.iter().flat_map(|kind| declared_of_kind(manifest, *kind)).collect();
    InspectReport { kinds, stores }
}

fn declared_of_kind(manifest: &Manifest, kind: ResourceKind) -> Vec<DeclaredStore> {
    manifest
        .setup
        .for_kind(kind)
        .iter()
        .map(|(name, store)| DeclaredStore {
            kind: kind.manifest_key(),
            name: name.to_string(),
            description: store.description.clone(),
            entries: store
                .items
                .iter()
                .map(|(key, item)| DeclaredEntry {
                    name: key.to_string(),
                    description: item.description.clone(),
                    has_value: item.value.as_deref().is_some_and(|v| !v.is_empty()),
                })
                .collect(),
        })
        .collect()
}
