//! Role identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organisational role of a back-office user.
///
/// The wire form is the kebab-case identifier issued by the authentication
/// service (`"birincil-admin"`, `"evrak-birimi"`, ...). `Operasyon` and
/// `Admin` are recognised by the permission table but have no sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full access to every module
    Superadmin,
    /// Primary administrator
    BirincilAdmin,
    /// Secondary administrator
    IkincilAdmin,
    /// Document unit
    EvrakBirimi,
    /// Dealer
    Bayi,
    /// Customer
    Musteri,
    /// Operations staff
    Operasyon,
    /// Legacy administrator identifier
    Admin,
}

impl Role {
    /// Every recognised role, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::Superadmin,
        Role::BirincilAdmin,
        Role::IkincilAdmin,
        Role::EvrakBirimi,
        Role::Bayi,
        Role::Musteri,
        Role::Operasyon,
        Role::Admin,
    ];

    /// Wire identifier of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::BirincilAdmin => "birincil-admin",
            Role::IkincilAdmin => "ikincil-admin",
            Role::EvrakBirimi => "evrak-birimi",
            Role::Bayi => "bayi",
            Role::Musteri => "musteri",
            Role::Operasyon => "operasyon",
            Role::Admin => "admin",
        }
    }

    /// Human readable name shown in the user badge.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Superadmin => "Süper Admin",
            Role::BirincilAdmin => "Birincil Admin",
            Role::IkincilAdmin => "İkincil Admin",
            Role::EvrakBirimi => "Evrak Birimi",
            Role::Bayi => "Bayi",
            Role::Musteri => "Müşteri",
            Role::Operasyon => "Operasyon",
            Role::Admin => "Admin",
        }
    }

    /// Parse a role leniently, mapping unknown identifiers to `None`.
    ///
    /// Surrounding whitespace is ignored; matching is case-sensitive, like the
    /// identifiers issued by the authentication service.
    pub fn parse_lenient(value: &str) -> Option<Role> {
        value.trim().parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| crate::Error::invalid_role(value))
    }
}
