//! Tests for nik-model types.

use nik_model::{
    Address, Age, BornDate, Gender, NextBirthday, NikValidation, ParsedNik, RegionTable,
};

fn sample_record() -> ParsedNik {
    ParsedNik {
        nik: "3171014505990001".to_string(),
        address: Address {
            province: Some("DKI JAKARTA".to_string()),
            regency: Some("JAKARTA SELATAN".to_string()),
            subdistrict: Some("SETIABUDI".to_string()),
        },
        age: Some(Age {
            years: 25,
            months: 10,
            days: 11,
        }),
        born_date: BornDate {
            year: 1999,
            month: 5,
            day: 5,
        },
        gender: Gender::Female,
        next_birthday: Some(NextBirthday { months: 1, days: 20 }),
        uniq_code: "0001".to_string(),
        zodiac: "Taurus".to_string(),
        valid: true,
    }
}

#[test]
fn record_serializes_round_trip() {
    let record = sample_record();
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: ParsedNik = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round.nik, record.nik);
    assert_eq!(round.gender, Gender::Female);
    assert_eq!(round.born_date, record.born_date);
    assert_eq!(round.uniq_code, "0001");
    assert!(round.valid);
}

#[test]
fn gender_serializes_as_registry_string() {
    let json = serde_json::to_string(&Gender::Female).expect("serialize gender");
    assert_eq!(json, "\"PEREMPUAN\"");
    let json = serde_json::to_string(&Gender::Male).expect("serialize gender");
    assert_eq!(json, "\"LAKI-LAKI\"");
}

#[test]
fn validation_accessors() {
    let valid = NikValidation::Valid(Box::new(sample_record()));
    assert!(valid.is_valid());
    assert_eq!(valid.as_record().map(|r| r.uniq_code.as_str()), Some("0001"));
    assert!(valid.into_record().is_some());

    let invalid = NikValidation::Invalid;
    assert!(!invalid.is_valid());
    assert!(invalid.as_record().is_none());
    assert!(invalid.into_record().is_none());
}

#[test]
fn region_table_deserializes_from_dataset_shape() {
    let json = r#"{
        "provinces": { "31": "DKI JAKARTA" },
        "regencies": { "3171": "JAKARTA SELATAN" },
        "subdistricts": { "317101": "SETIABUDI" }
    }"#;
    let table: RegionTable = serde_json::from_str(json).expect("deserialize table");
    assert_eq!(table.province("31"), Some("DKI JAKARTA"));
    assert_eq!(table.regency("3171"), Some("JAKARTA SELATAN"));
    assert_eq!(table.subdistrict("317101"), Some("SETIABUDI"));
    assert!(!table.is_empty());
}
