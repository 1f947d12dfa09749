//! Per-module capability sets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CRUD affordances a role has on one menu module.
///
/// Every flag defaults to `false`; the JSON form uses the `canCreate` style
/// keys the presentation layer reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleCapabilities {
    /// May create new records
    pub can_create: bool,
    /// May edit existing records
    pub can_edit: bool,
    /// May delete records
    pub can_delete: bool,
    /// May list every record
    pub can_view_all: bool,
    /// May list only records the user owns
    pub can_view_own: bool,
    /// May export lists
    pub can_export: bool,
}

impl ModuleCapabilities {
    /// No capability at all.
    pub const NONE: ModuleCapabilities = ModuleCapabilities {
        can_create: false,
        can_edit: false,
        can_delete: false,
        can_view_all: false,
        can_view_own: false,
        can_export: false,
    };

    /// Every capability.
    pub const FULL: ModuleCapabilities = ModuleCapabilities {
        can_create: true,
        can_edit: true,
        can_delete: true,
        can_view_all: true,
        can_view_own: true,
        can_export: true,
    };

    /// Only the own-records view.
    pub const VIEW_OWN: ModuleCapabilities = ModuleCapabilities {
        can_view_own: true,
        ..ModuleCapabilities::NONE
    };

    /// Read a single flag.
    pub fn get(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Create => self.can_create,
            CapabilityKind::Edit => self.can_edit,
            CapabilityKind::Delete => self.can_delete,
            CapabilityKind::ViewAll => self.can_view_all,
            CapabilityKind::ViewOwn => self.can_view_own,
            CapabilityKind::Export => self.can_export,
        }
    }
}

/// Name of one capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    /// `canCreate`
    #[serde(rename = "canCreate")]
    Create,
    /// `canEdit`
    #[serde(rename = "canEdit")]
    Edit,
    /// `canDelete`
    #[serde(rename = "canDelete")]
    Delete,
    /// `canViewAll`
    #[serde(rename = "canViewAll")]
    ViewAll,
    /// `canViewOwn`
    #[serde(rename = "canViewOwn")]
    ViewOwn,
    /// `canExport`
    #[serde(rename = "canExport")]
    Export,
}

impl CapabilityKind {
    /// Every capability flag.
    pub const ALL: [CapabilityKind; 6] = [
        CapabilityKind::Create,
        CapabilityKind::Edit,
        CapabilityKind::Delete,
        CapabilityKind::ViewAll,
        CapabilityKind::ViewOwn,
        CapabilityKind::Export,
    ];

    /// Canonical key used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityKind::Create => "canCreate",
            CapabilityKind::Edit => "canEdit",
            CapabilityKind::Delete => "canDelete",
            CapabilityKind::ViewAll => "canViewAll",
            CapabilityKind::ViewOwn => "canViewOwn",
            CapabilityKind::Export => "canExport",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityKind {
    type Err = ();

    /// Accepts `canViewAll` as well as `can_view_all`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "canCreate" | "can_create" => Ok(CapabilityKind::Create),
            "canEdit" | "can_edit" => Ok(CapabilityKind::Edit),
            "canDelete" | "can_delete" => Ok(CapabilityKind::Delete),
            "canViewAll" | "can_view_all" => Ok(CapabilityKind::ViewAll),
            "canViewOwn" | "can_view_own" => Ok(CapabilityKind::ViewOwn),
            "canExport" | "can_export" => Ok(CapabilityKind::Export),
            _ => Err(()),
        }
    }
}
