//! Wire-shape tests for vetemr-model types.

use vetemr_model::{Gender, Identity, MedicalRecord, Patient, Role};

#[test]
fn patient_decodes_with_only_required_fields() {
    let json = r#"{ "id": "a1", "name": "Biscuit", "species": "dog" }"#;
    let patient: Patient = serde_json::from_str(json).expect("decode patient");
    assert_eq!(patient.name, "Biscuit");
    assert_eq!(patient.breed, None);
    assert_eq!(patient.age, None);
    assert_eq!(patient.weight, None);
    assert_eq!(patient.gender, Gender::Unknown);
    assert_eq!(patient.owner_id, None);
}

#[test]
fn patient_decodes_full_payload() {
    let json = r#"{
        "id": "a2",
        "name": "Clementine",
        "species": "cat",
        "breed": "Maine Coon",
        "age": 3.5,
        "weight": 6.2,
        "gender": "female",
        "owner_id": "u7"
    }"#;
    let patient: Patient = serde_json::from_str(json).expect("decode patient");
    assert_eq!(patient.breed.as_deref(), Some("Maine Coon"));
    assert_eq!(patient.age, Some(3.5));
    assert_eq!(patient.gender, Gender::Female);
    assert_eq!(patient.breed_label(), "Maine Coon");
}

#[test]
fn unrecognized_gender_degrades_to_unknown() {
    let json = r#"{ "id": "a3", "name": "Rex", "species": "dog", "gender": "yes" }"#;
    let patient: Patient = serde_json::from_str(json).expect("decode patient");
    assert_eq!(patient.gender, Gender::Unknown);
}

#[test]
fn explicit_nulls_decode_like_absent_fields() {
    let json = r#"{
        "id": "a4",
        "name": "Maple",
        "species": "cat",
        "breed": null,
        "age": null,
        "weight": null,
        "gender": null,
        "owner_id": null
    }"#;
    let patient: Patient = serde_json::from_str(json).expect("decode patient");
    assert_eq!(patient.gender, Gender::Unknown);
    assert_eq!(patient.breed, None);
    assert_eq!(patient.age, None);
    assert_eq!(patient.weight, None);
    assert_eq!(patient.owner_id, None);
}

#[test]
fn identity_round_trips_unknown_role() {
    let json = r#"{ "id": "u1", "name": "Sam Park", "role": "receptionist" }"#;
    let identity: Identity = serde_json::from_str(json).expect("decode identity");
    assert_eq!(identity.role, Role::Other("receptionist".to_string()));

    let back = serde_json::to_value(&identity).expect("encode identity");
    assert_eq!(back["role"], "receptionist");
}

#[test]
fn record_decodes_without_prescription_or_notes() {
    let json = r#"{
        "id": "r1",
        "animal_id": "a1",
        "diagnosis": "Otitis externa",
        "treatment": "Ear cleaning and topical drops",
        "created_at": "2026-03-04T10:30:00Z"
    }"#;
    let record: MedicalRecord = serde_json::from_str(json).expect("decode record");
    assert!(record.prescription.is_empty());
    assert_eq!(record.notes, None);
    assert_eq!(record.vet_name, None);
    assert_eq!(record.created_label(), "Mar 4, 2026");
    assert_eq!(record.attending_label(), "Dr. Staff");
}

#[test]
fn null_prescription_decodes_as_empty() {
    let json = r#"{
        "id": "r3",
        "animal_id": "a1",
        "diagnosis": "Annual exam",
        "treatment": "Vaccination booster",
        "notes": null,
        "prescription": null,
        "created_at": "2026-03-04T10:30:00Z",
        "vet_name": null
    }"#;
    let record: MedicalRecord = serde_json::from_str(json).expect("decode record");
    assert!(record.prescription.is_empty());
    assert_eq!(record.notes, None);
    assert_eq!(record.vet_name, None);
}

#[test]
fn record_prescription_order_survives_decode() {
    let json = r#"{
        "id": "r2",
        "animal_id": "a1",
        "diagnosis": "Post-op care",
        "treatment": "Dressing change",
        "prescription": ["Rimadyl 50mg", "Amoxicillin 250mg", "Rimadyl 50mg"],
        "created_at": "2026-03-05T08:00:00+02:00",
        "vet_name": "Alvarez"
    }"#;
    let record: MedicalRecord = serde_json::from_str(json).expect("decode record");
    assert_eq!(
        record.prescription,
        vec!["Rimadyl 50mg", "Amoxicillin 250mg", "Rimadyl 50mg"]
    );
    assert_eq!(record.attending_label(), "Dr. Alvarez");
}
