use super::*;

#[test]
fn every_listed_name_is_supported() {
    for name in SUPPORTED_FIELD_NAMES {
        assert!(is_supported_field(name), "{name}");
    }
}

#[test]
fn other_names_are_unsupported() {
    for name in [
        "selector",
        "changeDetection",
        "providers",
        "imports",
        "styleUrls",
        "Template",
        "template ",
        "",
    ] {
        assert!(!is_supported_field(name), "{name:?}");
    }
}

#[test]
fn near_misses_of_listed_names_are_unsupported() {
    for name in SUPPORTED_FIELD_NAMES {
        let upper = name.to_uppercase();
        let plural = format!("{name}s");
        let prefix = &name[..name.len() - 1];
        for near in [upper.as_str(), plural.as_str(), prefix] {
            assert!(!is_supported_field(near), "{near:?}");
        }
    }
}
