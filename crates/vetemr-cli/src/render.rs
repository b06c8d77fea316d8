//! Console rendering for the roster and patient timelines.
//!
//! Tables follow the service's row order as-is; nothing here re-sorts.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vetemr_model::{Gender, MedicalRecord, Patient};

/// Copy shown instead of a table when the roster is empty.
pub const NO_PATIENTS: &str = "No patients found";

/// Copy shown under the profile when a patient has no records yet.
pub const NO_RECORDS: &str = "No medical records found";

/// Print the roster table, or the empty-state line.
pub fn print_roster(patients: &[Patient]) {
    if patients.is_empty() {
        println!("{NO_PATIENTS}");
        return;
    }
    println!("{}", roster_table(patients));
}

/// Print a patient profile followed by the record history.
pub fn print_timeline(patient: &Patient, records: &[MedicalRecord]) {
    println!("{}", profile_block(patient));
    println!();
    if records.is_empty() {
        println!("{NO_RECORDS}");
        return;
    }
    println!("{}", records_table(records));
}

/// Build the roster table. The id column is first so `open <PATIENT_ID>`
/// can be typed straight off the listing.
pub fn roster_table(patients: &[Patient]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Species"),
        header_cell("Breed"),
        header_cell("Gender"),
        header_cell("Age"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for patient in patients {
        table.add_row(vec![
            dim_cell(&patient.id),
            Cell::new(&patient.name).add_attribute(Attribute::Bold),
            Cell::new(&patient.species),
            Cell::new(patient.breed_label()),
            gender_cell(patient.gender),
            measurement_cell(patient.age, "yrs"),
            measurement_cell(patient.weight, "kg"),
        ]);
    }
    table
}

/// Profile header for the timeline: name with the gender badge, species and
/// breed, then the recorded measurements.
pub fn profile_block(patient: &Patient) -> String {
    let age = measurement(patient.age, "yrs");
    let weight = measurement(patient.weight, "kg");
    let owner = patient.owner_id.as_deref().unwrap_or("-");
    format!(
        "{} [{}]\n{} \u{2022} {}\nAge: {age}   Weight: {weight}   Owner: {owner}",
        patient.name,
        patient.gender.badge(),
        patient.species,
        patient.breed_label(),
    )
}

/// Build the record history table, rows in served order.
pub fn records_table(records: &[MedicalRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Attending"),
        header_cell("Diagnosis"),
        header_cell("Treatment"),
        header_cell("Notes"),
        header_cell("Prescriptions"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        table.add_row(vec![
            Cell::new(record.created_label()),
            Cell::new(record.attending_label()),
            Cell::new(&record.diagnosis),
            Cell::new(&record.treatment),
            optional_cell(record.notes.as_deref()),
            prescription_cell(&record.prescription),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn gender_cell(gender: Gender) -> Cell {
    match gender {
        Gender::Male | Gender::Female => Cell::new(gender.badge()),
        Gender::Unknown => dim_cell(gender.badge()),
    }
}

fn measurement_cell(value: Option<f64>, unit: &str) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value} {unit}")),
        None => dim_cell("-"),
    }
}

fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value} {unit}"),
        None => "-".to_string(),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn prescription_cell(items: &[String]) -> Cell {
    if items.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(items.join(", "))
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn patient(id: &str, name: &str) -> Patient {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            species: "dog".to_string(),
            breed: None,
            age: None,
            weight: None,
            gender: Gender::Unknown,
            owner_id: None,
        }
    }

    fn record(diagnosis: &str, prescription: &[&str]) -> MedicalRecord {
        MedicalRecord {
            id: "r1".to_string(),
            animal_id: "a1".to_string(),
            diagnosis: diagnosis.to_string(),
            treatment: "Rest".to_string(),
            notes: None,
            prescription: prescription.iter().map(|s| (*s).to_string()).collect(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap(),
            vet_name: None,
        }
    }

    #[test]
    fn roster_rows_follow_input_order() {
        let rendered = roster_table(&[patient("a1", "Ziggy"), patient("a2", "Apollo")]).to_string();
        let ziggy = rendered.find("Ziggy").unwrap();
        let apollo = rendered.find("Apollo").unwrap();
        assert!(ziggy < apollo, "rows were reordered:\n{rendered}");
    }

    #[test]
    fn roster_shows_badges_and_fallbacks() {
        let mut bella = patient("a1", "Bella");
        bella.breed = Some("labrador".to_string());
        bella.gender = Gender::Female;
        bella.age = Some(4.0);
        let mut momo = patient("a2", "Momo");
        momo.species = "cat".to_string();

        let rendered = roster_table(&[bella, momo]).to_string();
        assert!(rendered.contains("FEMALE"));
        assert!(rendered.contains("labrador"));
        assert!(rendered.contains("4 yrs"));
        assert!(rendered.contains("N/A"));
        // Momo has no breed recorded, so the species fills that column too.
        let momo_row = rendered.lines().find(|line| line.contains("Momo")).unwrap();
        assert_eq!(momo_row.matches("cat").count(), 2);
    }

    #[test]
    fn profile_block_shows_known_measurements() {
        let mut bella = patient("a1", "Bella");
        bella.breed = Some("labrador".to_string());
        bella.gender = Gender::Female;
        bella.age = Some(4.0);
        bella.weight = Some(24.5);
        bella.owner_id = Some("o-1001".to_string());

        insta::assert_snapshot!(profile_block(&bella), @r"
        Bella [FEMALE]
        dog • labrador
        Age: 4 yrs   Weight: 24.5 kg   Owner: o-1001
        ");
    }

    #[test]
    fn profile_block_fills_gaps_with_dashes() {
        insta::assert_snapshot!(profile_block(&patient("a1", "Momo")), @r"
        Momo [N/A]
        dog • dog
        Age: -   Weight: -   Owner: -
        ");
    }

    #[test]
    fn record_rows_join_prescriptions_in_served_order() {
        let rendered = records_table(&[record(
            "Kennel cough",
            &["Amoxicillin 250mg", "Rimadyl 50mg"],
        )])
        .to_string();
        assert!(rendered.contains("Amoxicillin 250mg, Rimadyl 50mg"));
        assert!(rendered.contains("Mar 4, 2026"));
        assert!(rendered.contains("Dr. Staff"));
    }

    #[test]
    fn empty_prescriptions_and_notes_render_as_dashes() {
        let rendered = records_table(&[record("Swollen paw", &[])]).to_string();
        let row = rendered
            .lines()
            .find(|line| line.contains("Swollen paw"))
            .unwrap();
        // Notes and prescriptions are both absent here.
        assert_eq!(row.matches(" - ").count(), 2, "row was: {row}");
    }
}
