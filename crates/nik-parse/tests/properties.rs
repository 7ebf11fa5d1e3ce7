//! Property tests for the validity rule.

use nik_model::RegionTable;
use nik_parse::parse;
use proptest::prelude::*;

fn jakarta_table() -> RegionTable {
    RegionTable::new()
        .with_province("31", "DKI JAKARTA")
        .with_regency("3171", "JAKARTA SELATAN")
        .with_subdistrict("317101", "SETIABUDI")
}

proptest! {
    #[test]
    fn candidates_of_wrong_length_never_validate(s in "[0-9]{0,15}|[0-9]{17,24}") {
        prop_assert!(!parse(&s, &jakarta_table()).is_valid());
    }

    #[test]
    fn sixteen_chars_with_a_non_digit_never_validate(
        prefix in "[0-9]{7}",
        junk in "[a-zA-Z .-]",
        suffix in "[0-9]{8}",
    ) {
        let s = format!("{prefix}{junk}{suffix}");
        prop_assert!(!parse(&s, &jakarta_table()).is_valid());
    }

    #[test]
    fn unmapped_province_codes_never_validate(s in "[4-9][0-9]{15}") {
        // The fixture table only maps province 31.
        prop_assert!(!parse(&s, &jakarta_table()).is_valid());
    }

    #[test]
    fn valid_candidates_pass_through_the_sequence_code(seq in "[0-9]{4}") {
        let s = format!("317101450599{seq}");
        let outcome = parse(&s, &jakarta_table());
        let record = outcome.as_record().expect("fixture codes resolve");
        prop_assert_eq!(record.uniq_code.as_str(), seq.as_str());
    }
}
