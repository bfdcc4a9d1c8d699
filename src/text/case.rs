pub fn to_upper(input: &str) -> String {
    map_case(input, CaseOperation::Upper)
}

pub fn to_lower(input: &str) -> String {
    map_case(input, CaseOperation::Lower)
}

enum CaseOperation {
    Upper,
    Lower,
}

fn map_case(input: &str, operation: CaseOperation) -> String {
    let mut buffer = String::with_capacity(input.len());
    for ch in input.chars() {
        match operation {
            CaseOperation::Upper => buffer.extend(ch.to_uppercase()),
            CaseOperation::Lower => buffer.extend(ch.to_lowercase()),
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        assert_eq!(to_upper("opal"), "OPAL");
        assert_eq!(to_lower("OPAL"), "opal");
    }

    #[test]
    fn unicode_case_mapping_may_change_length() {
        assert_eq!(to_upper("straße"), "STRASSE");
        assert_eq!(to_lower("ΠΣ"), "πσ");
    }

    #[test]
    fn non_cased_characters_pass_through() {
        assert_eq!(to_upper("12-34"), "12-34");
        assert_eq!(to_lower("12-34"), "12-34");
    }
}
