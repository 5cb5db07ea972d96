use super::*;
use hmr_ir::{CallExpr, ClassSpec, ObjectSpec, SourceBuilder, SourceVersion};
use pretty_assertions::assert_eq;

fn component_source(metadata: ObjectSpec) -> SourceVersion {
    let mut builder = SourceBuilder::new("src/app/foo.ts");
    builder.statement("import { Component } from '@angular/core';");
    builder.class(&ClassSpec::component("Foo", metadata).export());
    match builder.finish() {
        Ok(source) => source,
        Err(err) => panic!("invalid fixture: {err}"),
    }
}

fn metadata_of(source: &SourceVersion) -> &ObjectLiteral {
    source
        .classes()
        .next()
        .and_then(|class| class.decorators.first())
        .and_then(|decorator| decorator.call())
        .and_then(CallExpr::single_object_argument)
        .unwrap_or_else(|| panic!("fixture has no component metadata"))
}

fn classify(stale: ObjectSpec, updated: ObjectSpec) -> MetadataChange {
    let stale = component_source(stale);
    let updated = component_source(updated);
    analyze_metadata(
        metadata_of(&stale),
        stale.text(),
        metadata_of(&updated),
        updated.text(),
    )
}

fn base() -> ObjectSpec {
    ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'")
        .field("styles", "['p { color: red }']")
        .field("imports", "[CommonModule]")
}

// -- None --

#[test]
fn identical_metadata_is_none() {
    assert_eq!(classify(base(), base()), MetadataChange::None);
}

#[test]
fn empty_metadata_is_none() {
    assert_eq!(
        classify(ObjectSpec::new(), ObjectSpec::new()),
        MetadataChange::None
    );
}

#[test]
fn reordered_supported_fields_are_none() {
    let stale = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'")
        .field("styles", "[]");
    let updated = ObjectSpec::new()
        .field("styles", "[]")
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'");
    assert_eq!(classify(stale, updated), MetadataChange::None);
}

#[test]
fn repeated_supported_name_against_itself_is_none() {
    let metadata = || {
        ObjectSpec::new()
            .field("template", "'a'")
            .field("selector", "'app-foo'")
            .field("template", "'b'")
    };
    assert_eq!(classify(metadata(), metadata()), MetadataChange::None);
}

#[test]
fn repeated_supported_name_compares_last_value() {
    let stale = ObjectSpec::new()
        .field("template", "'a'")
        .field("template", "'b'");
    let same_last = ObjectSpec::new().field("template", "'b'");
    assert_eq!(classify(stale.clone(), same_last), MetadataChange::None);

    let other_last = ObjectSpec::new()
        .field("template", "'b'")
        .field("template", "'a'");
    assert_eq!(classify(stale, other_last), MetadataChange::Supported);
}

#[test]
fn quoted_supported_name_matches_identifier() {
    let stale = ObjectSpec::new().field("template", "'<p>A</p>'");
    let updated = ObjectSpec::new().quoted_field("template", "'<p>A</p>'");
    assert_eq!(classify(stale, updated), MetadataChange::None);
}

// -- Supported --

#[test]
fn template_edit_is_supported() {
    let updated = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>B</p>'")
        .field("styles", "['p { color: red }']")
        .field("imports", "[CommonModule]");
    assert_eq!(classify(base(), updated), MetadataChange::Supported);
}

#[test]
fn every_supported_name_is_hot_swappable() {
    for name in crate::SUPPORTED_FIELD_NAMES {
        let stale = ObjectSpec::new()
            .field("selector", "'app-foo'")
            .field(name, "'a'");
        let updated = ObjectSpec::new()
            .field("selector", "'app-foo'")
            .field(name, "'b'");
        assert_eq!(classify(stale, updated), MetadataChange::Supported, "{name}");
    }
}

#[test]
fn supported_field_added_is_supported() {
    let stale = ObjectSpec::new().field("selector", "'app-foo'");
    let updated = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("styleUrl", "'./foo.css'");
    assert_eq!(classify(stale, updated), MetadataChange::Supported);
}

#[test]
fn supported_field_removed_is_supported() {
    let updated = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'")
        .field("imports", "[CommonModule]");
    assert_eq!(classify(base(), updated), MetadataChange::Supported);
}

#[test]
fn template_switched_to_template_url_is_supported() {
    let stale = ObjectSpec::new().field("template", "'<p>A</p>'");
    let updated = ObjectSpec::new().field("templateUrl", "'./foo.html'");
    assert_eq!(classify(stale, updated), MetadataChange::Supported);
}

// -- Unsupported --

#[test]
fn unsupported_field_value_change() {
    let updated = ObjectSpec::new()
        .field("selector", "'app-bar'")
        .field("template", "'<p>A</p>'")
        .field("styles", "['p { color: red }']")
        .field("imports", "[CommonModule]");
    assert_eq!(
        classify(base(), updated),
        MetadataChange::Unsupported(MetadataIssue::UnsupportedFieldChanged)
    );
}

#[test]
fn unsupported_field_added() {
    let stale = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'");
    let updated = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'")
        .field("changeDetection", "ChangeDetectionStrategy.OnPush");
    assert_eq!(
        classify(stale, updated),
        MetadataChange::Unsupported(MetadataIssue::UnsupportedFieldAdded)
    );
}

#[test]
fn unsupported_field_removed() {
    let updated = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("template", "'<p>A</p>'")
        .field("styles", "['p { color: red }']");
    assert_eq!(
        classify(base(), updated),
        MetadataChange::Unsupported(MetadataIssue::UnsupportedFieldRemoved)
    );
}

#[test]
fn swapped_unsupported_fields_are_unsupported() {
    let stale = ObjectSpec::new()
        .field("selector", "'app-foo'")
        .field("imports", "[CommonModule]");
    let updated = ObjectSpec::new()
        .field("imports", "[CommonModule]")
        .field("selector", "'app-foo'");
    assert_eq!(
        classify(stale, updated),
        MetadataChange::Unsupported(MetadataIssue::UnsupportedFieldChanged)
    );
}

#[test]
fn renamed_unsupported_field_with_same_value_is_unsupported() {
    let stale = ObjectSpec::new().field("standalone", "true");
    let updated = ObjectSpec::new().field("preserveWhitespaces", "true");
    assert_eq!(
        classify(stale, updated),
        MetadataChange::Unsupported(MetadataIssue::UnsupportedFieldChanged)
    );
}

#[test]
fn supported_edit_does_not_mask_unsupported_edit() {
    let stale = ObjectSpec::new()
        .field("template", "'<p>A</p>'")
        .field("providers", "[]");
    let updated = ObjectSpec::new()
        .field("template", "'<p>B</p>'")
        .field("providers", "[Service]");
    assert_eq!(
        classify(stale, updated),
        MetadataChange::Unsupported(MetadataIssue::UnsupportedFieldChanged)
    );
}

#[test]
fn non_assignment_properties_are_unsupported() {
    let shapes = [
        ObjectSpec::new().shorthand("providers"),
        ObjectSpec::new().spread("sharedMetadata"),
        ObjectSpec::new().method("factory", "return 1;"),
        ObjectSpec::new().computed_field("'template'", "'<p>A</p>'"),
    ];
    for shape in shapes {
        // Unsupported on either side.
        assert_eq!(
            classify(shape.clone(), base()),
            MetadataChange::Unsupported(MetadataIssue::PropertyShape)
        );
        assert_eq!(
            classify(base(), shape.clone()),
            MetadataChange::Unsupported(MetadataIssue::PropertyShape)
        );
        // Even when unchanged.
        assert_eq!(
            classify(shape.clone(), shape),
            MetadataChange::Unsupported(MetadataIssue::PropertyShape)
        );
    }
}

// -- Helpers in isolation --

#[test]
fn supported_fields_compare_by_name() {
    let stale = "template: 'a', styles: 'b'";
    let updated = "styles: 'b', template: 'a'";
    let mut fields = SupportedFields::new(stale, updated);
    fields.insert_stale("template", Span::new(10, 13));
    fields.insert_stale("styles", Span::new(23, 26));
    fields.insert_updated("styles", Span::new(8, 11));
    fields.insert_updated("template", Span::new(23, 26));
    assert!(!fields.is_edited());

    fields.insert_updated("styleUrl", Span::new(8, 11));
    assert!(fields.is_edited());
}

#[test]
fn supported_fields_report_edit_and_removal() {
    let text = "template: 'a', template: 'b'";
    let mut edited = SupportedFields::new(text, text);
    edited.insert_stale("template", Span::new(10, 13));
    edited.insert_updated("template", Span::new(25, 28));
    assert!(edited.is_edited());

    let mut removed = SupportedFields::new(text, text);
    removed.insert_stale("template", Span::new(10, 13));
    assert!(removed.is_edited());
}

#[test]
fn supported_fields_keep_last_value_per_name() {
    let text = "template: 'a', template: 'b'";
    let mut fields = SupportedFields::new(text, text);
    fields.insert_stale("template", Span::new(10, 13));
    fields.insert_stale("template", Span::new(25, 28));
    fields.insert_updated("template", Span::new(10, 13));
    fields.insert_updated("template", Span::new(25, 28));
    assert!(!fields.is_edited());
}

#[test]
fn unsupported_fields_match_in_order() {
    let stale = "a: 1, b: 2";
    let updated = "a: 1, b: 2";
    let mut fields = UnsupportedFields::new(stale);
    fields.push(Span::new(0, 4));
    fields.push(Span::new(6, 10));
    assert_eq!(fields.match_next(updated, Span::new(0, 4)), Ok(()));
    assert_eq!(fields.match_next(updated, Span::new(6, 10)), Ok(()));
    assert_eq!(
        fields.match_next(updated, Span::new(0, 4)),
        Err(MetadataIssue::UnsupportedFieldAdded)
    );
    assert_eq!(fields.finish(), Ok(()));
}

#[test]
fn unsupported_fields_reject_out_of_order_and_leftovers() {
    let text = "a: 1, b: 2";
    let mut fields = UnsupportedFields::new(text);
    fields.push(Span::new(0, 4));
    fields.push(Span::new(6, 10));
    assert_eq!(
        fields.match_next(text, Span::new(6, 10)),
        Err(MetadataIssue::UnsupportedFieldChanged)
    );
    assert_eq!(fields.finish(), Err(MetadataIssue::UnsupportedFieldRemoved));
}

#[test]
fn issue_display() {
    assert_eq!(
        MetadataIssue::UnsupportedFieldAdded.to_string(),
        "unsupported metadata field added"
    );
}
