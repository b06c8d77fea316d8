//! Role-based affordance checks.
//!
//! Every "may the current user do this" question is answered here and only
//! here; view code consults these gates instead of re-deriving role logic.
//! The gates decide what the interface offers. The records service remains
//! the enforcement authority, and a server-side denial still surfaces as a
//! normal gateway error.

use crate::identity::Role;
use crate::patient::Patient;

/// Whether this role may admit new patients. Owners cannot; every staff
/// role, including ones this client has never heard of, can.
pub fn can_create_patient(role: &Role) -> bool {
    !matches!(role, Role::Owner)
}

/// Whether this role may append medical records. Same rule as admission.
pub fn can_create_record(role: &Role) -> bool {
    !matches!(role, Role::Owner)
}

/// Whether this role may open a patient's timeline.
///
/// Every authenticated identity may view today. The patient travels in the
/// signature so ownership scoping, if it ever lands, lands here and nowhere
/// else.
pub fn can_view_patient(_role: &Role, _patient: &Patient) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Gender;

    fn patient() -> Patient {
        Patient {
            id: "a1".to_string(),
            name: "Biscuit".to_string(),
            species: "dog".to_string(),
            breed: None,
            age: None,
            weight: None,
            gender: Gender::Unknown,
            owner_id: Some("u9".to_string()),
        }
    }

    #[test]
    fn owners_cannot_create_anything() {
        assert!(!can_create_patient(&Role::Owner));
        assert!(!can_create_record(&Role::Owner));
    }

    #[test]
    fn staff_roles_can_create() {
        for role in [
            Role::Admin,
            Role::Vet,
            Role::Other("radiologist".to_string()),
        ] {
            assert!(can_create_patient(&role), "create patient as {role}");
            assert!(can_create_record(&role), "create record as {role}");
        }
    }

    #[test]
    fn every_role_can_view() {
        for role in [
            Role::Admin,
            Role::Vet,
            Role::Owner,
            Role::Other("student".to_string()),
        ] {
            assert!(can_view_patient(&role, &patient()));
        }
    }
}
