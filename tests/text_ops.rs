use opal_runtime::collections::Seq;
use opal_runtime::numeric::sum;
use opal_runtime::text::{contains, length, split, to_int, to_lower, to_upper};

#[test]
fn case_mapping_handles_non_ascii() {
    assert_eq!(to_upper("core πß"), "CORE ΠSS");
    assert_eq!(to_lower("CORE ΠSS"), "core πss");
}

#[test]
fn case_mapping_round_trips_ascii() {
    let input = "Opal Runtime 01";
    assert_eq!(to_lower(&to_upper(input)), "opal runtime 01");
}

#[test]
fn contains_and_length_agree_with_split() {
    let line = "name=opal";
    assert!(contains(line, "="));

    let parts = split(line, "=");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts.as_slice(), ["name", "opal"]);
    assert_eq!(length(line), length("name") + length("=") + length("opal"));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(length("πß"), 2);
    assert!("πß".len() > 2);
}

#[test]
fn split_and_parse_compose_like_a_toy_program() {
    let csv = "1,2,3";
    let numbers: Seq<i64> = split(csv, ",").map(|field| to_int(&field));
    assert_eq!(numbers.as_slice(), [1, 2, 3]);
    assert_eq!(sum(&numbers), 6);
}

#[test]
fn parse_swallows_malformed_fields() {
    let numbers: Seq<i64> = split("4,x,6", ",").map(|field| to_int(&field));
    assert_eq!(numbers.as_slice(), [4, 0, 6]);
}
