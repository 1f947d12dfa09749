//! Field- and action-level permission policy
//!
//! The sidebar registry answers "which screens does a role get". This module
//! answers the finer questions asked inside a screen: may the dealer column
//! be shown, may a file be closed, may result documents be uploaded.
//!
//! All of them are answered from one table keyed by `(Role, Permission)`,
//! built once from [`GRANTS`]. A pair missing from the table is a denial, so
//! unknown roles and the `admin` role get `false` everywhere.

use claimdesk_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Fine-grained permission checked inside a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    /// Dealer name and contact columns
    #[serde(rename = "canViewDealerInfo")]
    ViewDealerInfo,
    /// Dealer commission amounts
    #[serde(rename = "canViewDealerPayment")]
    ViewDealerPayment,
    /// Dealer payment receipts
    #[serde(rename = "canViewDealerPaymentDocument")]
    ViewDealerPaymentDocument,
    /// Customer edit form
    #[serde(rename = "canEditCustomer")]
    EditCustomer,
    /// Application document upload
    #[serde(rename = "canUploadApplicationDocuments")]
    UploadApplicationDocuments,
    /// Result document upload
    #[serde(rename = "canUploadResultDocuments")]
    UploadResultDocuments,
    /// Closing a customer file
    #[serde(rename = "canCloseFile")]
    CloseFile,
    /// Customer creation form
    #[serde(rename = "canCreateCustomer")]
    CreateCustomer,
    /// Dealer creation form
    #[serde(rename = "canCreateDealer")]
    CreateDealer,
    /// Customer status dropdown
    #[serde(rename = "canUpdateCustomerStatus")]
    UpdateCustomerStatus,
    /// Dealer code column
    #[serde(rename = "canViewDealerCode")]
    ViewDealerCode,
    /// Dealer payment entry and approval
    #[serde(rename = "canManageDealerPayment")]
    ManageDealerPayment,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 12] = [
        Permission::ViewDealerInfo,
        Permission::ViewDealerPayment,
        Permission::ViewDealerPaymentDocument,
        Permission::EditCustomer,
        Permission::UploadApplicationDocuments,
        Permission::UploadResultDocuments,
        Permission::CloseFile,
        Permission::CreateCustomer,
        Permission::CreateDealer,
        Permission::UpdateCustomerStatus,
        Permission::ViewDealerCode,
        Permission::ManageDealerPayment,
    ];

    /// Predicate name used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::ViewDealerInfo => "canViewDealerInfo",
            Permission::ViewDealerPayment => "canViewDealerPayment",
            Permission::ViewDealerPaymentDocument => "canViewDealerPaymentDocument",
            Permission::EditCustomer => "canEditCustomer",
            Permission::UploadApplicationDocuments => "canUploadApplicationDocuments",
            Permission::UploadResultDocuments => "canUploadResultDocuments",
            Permission::CloseFile => "canCloseFile",
            Permission::CreateCustomer => "canCreateCustomer",
            Permission::CreateDealer => "canCreateDealer",
            Permission::UpdateCustomerStatus => "canUpdateCustomerStatus",
            Permission::ViewDealerCode => "canViewDealerCode",
            Permission::ManageDealerPayment => "canManageDealerPayment",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ();

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.as_str() == value)
            .ok_or(())
    }
}

use self::Permission as P;
use claimdesk_core::Role as R;

/// Role grants. Anything not listed is denied.
///
/// `ViewDealerPaymentDocument` has no grantee: nobody may open dealer
/// payment receipts.
pub const GRANTS: &[(Permission, &[Role])] = &[
    (P::ViewDealerInfo, &[R::Superadmin, R::Bayi, R::BirincilAdmin]),
    (P::ViewDealerPayment, &[R::Superadmin, R::BirincilAdmin]),
    (P::ViewDealerPaymentDocument, &[]),
    (
        P::EditCustomer,
        &[R::Superadmin, R::BirincilAdmin, R::IkincilAdmin, R::Operasyon],
    ),
    (
        P::UploadApplicationDocuments,
        &[R::Superadmin, R::BirincilAdmin, R::EvrakBirimi, R::Operasyon],
    ),
    (
        P::UploadResultDocuments,
        &[R::Superadmin, R::BirincilAdmin, R::IkincilAdmin, R::Operasyon],
    ),
    (P::CloseFile, &[R::Superadmin, R::BirincilAdmin, R::IkincilAdmin]),
    (
        P::CreateCustomer,
        &[
            R::Superadmin,
            R::BirincilAdmin,
            R::IkincilAdmin,
            R::EvrakBirimi,
            R::Operasyon,
        ],
    ),
    (P::CreateDealer, &[R::Superadmin]),
    (
        P::UpdateCustomerStatus,
        &[R::Superadmin, R::BirincilAdmin, R::IkincilAdmin, R::Operasyon],
    ),
    (P::ViewDealerCode, &[R::Superadmin, R::BirincilAdmin]),
    (P::ManageDealerPayment, &[R::Superadmin, R::EvrakBirimi]),
];

static POLICY: LazyLock<HashMap<(Role, Permission), bool>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(Role::ALL.len() * Permission::ALL.len());
    for role in Role::ALL {
        for permission in Permission::ALL {
            table.insert((role, permission), false);
        }
    }
    for (permission, roles) in GRANTS {
        for role in *roles {
            table.insert((*role, *permission), true);
        }
    }
    table
});

/// Typed policy lookup.
pub fn is_granted(role: Role, permission: Permission) -> bool {
    POLICY.get(&(role, permission)).copied().unwrap_or(false)
}

/// Policy lookup for an untyped role string; unknown roles are denied.
pub fn check(role: &str, permission: Permission) -> bool {
    Role::parse_lenient(role).is_some_and(|role| is_granted(role, permission))
}

/// Every permission with its answer for `role`, in [`Permission::ALL`] order.
pub fn snapshot(role: &str) -> Vec<(Permission, bool)> {
    Permission::ALL
        .into_iter()
        .map(|permission| (permission, check(role, permission)))
        .collect()
}

/// May see dealer name and contact details.
pub fn can_view_dealer_info(role: &str) -> bool {
    check(role, Permission::ViewDealerInfo)
}

/// May see dealer payment amounts.
pub fn can_view_dealer_payment(role: &str) -> bool {
    check(role, Permission::ViewDealerPayment)
}

/// May open dealer payment receipts. Always `false`.
pub fn can_view_dealer_payment_document(role: &str) -> bool {
    check(role, Permission::ViewDealerPaymentDocument)
}

/// May edit a customer file.
pub fn can_edit_customer(role: &str) -> bool {
    check(role, Permission::EditCustomer)
}

/// May upload application documents.
pub fn can_upload_application_documents(role: &str) -> bool {
    check(role, Permission::UploadApplicationDocuments)
}

/// May upload result documents.
pub fn can_upload_result_documents(role: &str) -> bool {
    check(role, Permission::UploadResultDocuments)
}

/// May close a customer file.
pub fn can_close_file(role: &str) -> bool {
    check(role, Permission::CloseFile)
}

/// May create customers.
pub fn can_create_customer(role: &str) -> bool {
    check(role, Permission::CreateCustomer)
}

/// May create dealers.
pub fn can_create_dealer(role: &str) -> bool {
    check(role, Permission::CreateDealer)
}

/// May change a customer's status.
pub fn can_update_customer_status(role: &str) -> bool {
    check(role, Permission::UpdateCustomerStatus)
}

/// May see dealer codes.
pub fn can_view_dealer_code(role: &str) -> bool {
    check(role, Permission::ViewDealerCode)
}

/// May enter and approve dealer payments.
pub fn can_manage_dealer_payment(role: &str) -> bool {
    check(role, Permission::ManageDealerPayment)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Predicate = fn(&str) -> bool;

    // Independent restatement of the policy, one row per predicate.
    const EXPECTED: &[(Predicate, &[&str])] = &[
        (can_view_dealer_info, &["superadmin", "bayi", "birincil-admin"]),
        (can_view_dealer_payment, &["superadmin", "birincil-admin"]),
        (can_view_dealer_payment_document, &[]),
        (
            can_edit_customer,
            &["superadmin", "birincil-admin", "ikincil-admin", "operasyon"],
        ),
        (
            can_upload_application_documents,
            &["superadmin", "birincil-admin", "evrak-birimi", "operasyon"],
        ),
        (
            can_upload_result_documents,
            &["superadmin", "birincil-admin", "ikincil-admin", "operasyon"],
        ),
        (
            can_close_file,
            &["superadmin", "birincil-admin", "ikincil-admin"],
        ),
        (
            can_create_customer,
            &[
                "superadmin",
                "birincil-admin",
                "ikincil-admin",
                "evrak-birimi",
                "operasyon",
            ],
        ),
        (can_create_dealer, &["superadmin"]),
        (
            can_update_customer_status,
            &["superadmin", "birincil-admin", "ikincil-admin", "operasyon"],
        ),
        (can_view_dealer_code, &["superadmin", "birincil-admin"]),
        (can_manage_dealer_payment, &["superadmin", "evrak-birimi"]),
    ];

    #[test]
    fn predicates_match_policy_for_every_role() {
        assert_eq!(EXPECTED.len(), Permission::ALL.len());
        for (row, (predicate, allowed)) in EXPECTED.iter().enumerate() {
            for role in Role::ALL {
                let expected = allowed.contains(&role.as_str());
                assert_eq!(
                    predicate(role.as_str()),
                    expected,
                    "row {row} ({}) for role {role}",
                    Permission::ALL[row]
                );
            }
        }
    }

    #[test]
    fn unlisted_roles_are_denied_everything() {
        for unknown in ["", "root", "Superadmin", "guest", "super admin"] {
            for (predicate, _) in EXPECTED {
                assert!(!predicate(unknown), "{unknown:?} must be denied");
            }
        }
    }

    #[test]
    fn admin_has_no_grants() {
        assert!(snapshot("admin").iter().all(|(_, granted)| !granted));
    }

    #[test]
    fn nobody_views_payment_documents() {
        for role in Role::ALL {
            assert!(!is_granted(role, Permission::ViewDealerPaymentDocument));
        }
    }

    #[test]
    fn table_has_every_pair() {
        assert_eq!(POLICY.len(), Role::ALL.len() * Permission::ALL.len());
    }

    #[test]
    fn permission_names_roundtrip() {
        for permission in Permission::ALL {
            assert_eq!(permission.as_str().parse::<Permission>(), Ok(permission));
            let json = serde_json::to_string(&permission).unwrap();
            assert_eq!(json, format!("\"{}\"", permission.as_str()));
        }
        assert!("canFly".parse::<Permission>().is_err());
    }

    #[test]
    fn snapshot_order() {
        let snap = snapshot("ikincil-admin");
        let names: Vec<Permission> = snap.iter().map(|(p, _)| *p).collect();
        assert_eq!(names, Permission::ALL.to_vec());
        assert!(snap.contains(&(Permission::CreateCustomer, true)));
        assert!(snap.contains(&(Permission::CreateDealer, false)));
    }
}
