//! Parser tests - the 23 property kinds and their component clauses.

use edmodel::parser::ast::*;
use rstest::rstest;

use crate::helpers::parse_helpers::parse_single_property;
use crate::helpers::source_fixtures::entity_with_property;

fn property(property_source: &str) -> Property {
    parse_single_property(&entity_with_property(property_source))
}

// ============================================================================
// Simple kinds
// ============================================================================

#[rstest]
#[case("bool")]
#[case("currency")]
#[case("date")]
#[case("datetime")]
#[case("duration")]
#[case("percent")]
#[case("time")]
#[case("year")]
fn test_parse_simple_property_kinds(#[case] keyword: &str) {
    let parsed = property(&format!(
        "  {keyword} SampleField\n    documentation \"A field.\"\n    is required\n"
    ));
    let matches_kind = match keyword {
        "bool" => matches!(parsed, Property::Boolean(_)),
        "currency" => matches!(parsed, Property::Currency(_)),
        "date" => matches!(parsed, Property::Date(_)),
        "datetime" => matches!(parsed, Property::Datetime(_)),
        "duration" => matches!(parsed, Property::Duration(_)),
        "percent" => matches!(parsed, Property::Percent(_)),
        "time" => matches!(parsed, Property::Time(_)),
        "year" => matches!(parsed, Property::Year(_)),
        _ => unreachable!(),
    };
    assert!(matches_kind, "wrong variant for '{keyword}': {parsed:?}");
    assert_eq!(parsed.name(), "SampleField");
    assert_eq!(parsed.components().annotation, PropertyAnnotation::Required);
}

// ============================================================================
// Annotations
// ============================================================================

#[rstest]
#[case("is part of identity", PropertyAnnotation::Identity)]
#[case("is required", PropertyAnnotation::Required)]
#[case("is optional", PropertyAnnotation::Optional)]
#[case("is required collection", PropertyAnnotation::RequiredCollection)]
#[case("is optional collection", PropertyAnnotation::OptionalCollection)]
#[case("is queryable only", PropertyAnnotation::QueryableOnly)]
fn test_parse_property_annotations(
    #[case] annotation_source: &str,
    #[case] expected: PropertyAnnotation,
) {
    let parsed = property(&format!(
        "  bool SampleField\n    documentation \"A field.\"\n    {annotation_source}\n"
    ));
    assert_eq!(parsed.components().annotation, expected);
}

#[test]
fn test_parse_identity_rename_annotation() {
    let parsed = property(
        "  integer SchoolId\n    documentation \"Renamed key.\"\n    renames identity property EducationOrganizationId\n",
    );
    assert_eq!(
        parsed.components().annotation,
        PropertyAnnotation::IdentityRename {
            base_key_name: "EducationOrganizationId".into()
        }
    );
}

// ============================================================================
// Component clauses
// ============================================================================

#[test]
fn test_parse_inherited_documentation() {
    let parsed = property("  bool Flag\n    documentation inherited\n    is optional\n");
    assert_eq!(
        parsed.components().documentation,
        PropertyDocumentation::Inherited
    );
}

#[test]
fn test_parse_property_deprecation() {
    let parsed = property(
        "  bool Flag\n    deprecated \"No longer collected.\"\n    documentation \"A flag.\"\n    is optional\n",
    );
    assert_eq!(
        parsed.components().deprecation.as_deref(),
        Some("No longer collected.")
    );
}

#[test]
fn test_parse_role_name_with_shorten_to() {
    let parsed = property(
        "  domain entity School\n    documentation \"The school.\"\n    is required\n    role name AttendedSchool shorten to Attended\n",
    );
    let role_name = parsed.components().role_name.as_ref().unwrap();
    assert_eq!(role_name.name, "AttendedSchool");
    assert_eq!(role_name.shorten_to.as_deref(), Some("Attended"));
}

#[test]
fn test_parse_queryable_field_on_identity_property() {
    // The grammar does not gate 'is queryable field' by annotation kind;
    // it is accepted even on identity properties
    let parsed = property(
        "  integer StudentId\n    documentation \"The id.\"\n    is part of identity\n    is queryable field\n",
    );
    assert_eq!(parsed.components().annotation, PropertyAnnotation::Identity);
    assert!(parsed.components().is_queryable_field);
}

#[test]
fn test_parse_property_model_id() {
    let parsed = property("  bool Flag [204]\n    documentation \"A flag.\"\n    is optional\n");
    let Property::Boolean(simple) = parsed else {
        panic!("expected a boolean property");
    };
    assert_eq!(simple.model_id.as_deref(), Some("204"));
}

// ============================================================================
// Numeric and string constraints
// ============================================================================

#[test]
fn test_parse_integer_property_bounds() {
    let parsed = property(
        "  integer DaysAttended\n    documentation \"Days.\"\n    is required\n    min value 0\n    max value 366\n",
    );
    let Property::Integer(integer) = parsed else {
        panic!("expected an integer property");
    };
    assert_eq!(integer.min_value, Some(IntBound::Value(0)));
    assert_eq!(integer.max_value, Some(IntBound::Value(366)));
}

#[test]
fn test_parse_integer_property_big_bound() {
    let parsed = property(
        "  integer Population\n    documentation \"Count.\"\n    is optional\n    min value 0\n    max value big\n",
    );
    let Property::Integer(integer) = parsed else {
        panic!("expected an integer property");
    };
    assert_eq!(integer.max_value, Some(IntBound::Big));
}

#[test]
fn test_parse_short_property_bounds() {
    let parsed = property(
        "  short PeriodSequence\n    documentation \"Sequence.\"\n    is optional\n    min value -1\n    max value 100\n",
    );
    let Property::Short(short) = parsed else {
        panic!("expected a short property");
    };
    assert_eq!(short.min_value, Some(-1));
    assert_eq!(short.max_value, Some(100));
}

#[test]
fn test_parse_decimal_property_without_bounds() {
    let parsed = property(
        "  decimal Amount\n    documentation \"An amount.\"\n    is required\n    total digits 5\n    decimal places 2\n",
    );
    let Property::Decimal(decimal) = parsed else {
        panic!("expected a decimal property");
    };
    assert_eq!(decimal.total_digits, 5);
    assert_eq!(decimal.decimal_places, 2);
    assert_eq!(decimal.min_value, None);
    assert_eq!(decimal.max_value, None);
}

#[test]
fn test_parse_decimal_property_with_bounds_keeps_digits() {
    let parsed = property(
        "  decimal Amount\n    documentation \"An amount.\"\n    is required\n    total digits 5\n    decimal places 2\n    min value 0\n    max value 100.00\n",
    );
    let Property::Decimal(decimal) = parsed else {
        panic!("expected a decimal property");
    };
    assert_eq!(decimal.total_digits, 5);
    assert_eq!(decimal.decimal_places, 2);
    assert_eq!(decimal.min_value.as_deref(), Some("0"));
    assert_eq!(decimal.max_value.as_deref(), Some("100.00"));
}

#[test]
fn test_parse_string_property_max_length_only() {
    let parsed = property(
        "  string Code\n    documentation \"A code.\"\n    is optional\n    max length 50\n",
    );
    let Property::String(string) = parsed else {
        panic!("expected a string property");
    };
    assert_eq!(string.min_length, None);
    assert_eq!(string.max_length, 50);
}

#[test]
fn test_parse_string_property_min_and_max_length() {
    let parsed = property(
        "  string Code\n    documentation \"A code.\"\n    is optional\n    min length 2\n    max length 50\n",
    );
    let Property::String(string) = parsed else {
        panic!("expected a string property");
    };
    assert_eq!(string.min_length, Some(2));
    assert_eq!(string.max_length, 50);
}

// ============================================================================
// Reference kinds
// ============================================================================

#[rstest]
#[case("enumeration")]
#[case("descriptor")]
#[case("choice")]
#[case("inline common")]
fn test_parse_reference_property_kinds(#[case] keyword: &str) {
    let parsed = property(&format!(
        "  {keyword} GradeLevel\n    documentation \"The target.\"\n    is required\n"
    ));
    let matches_kind = match keyword {
        "enumeration" => matches!(parsed, Property::Enumeration(_)),
        "descriptor" => matches!(parsed, Property::Descriptor(_)),
        "choice" => matches!(parsed, Property::Choice(_)),
        "inline common" => matches!(parsed, Property::InlineCommon(_)),
        _ => unreachable!(),
    };
    assert!(matches_kind, "wrong variant for '{keyword}': {parsed:?}");
    assert_eq!(parsed.name(), "GradeLevel");
}

#[test]
fn test_parse_reference_property_with_namespace_qualifier() {
    let parsed = property(
        "  descriptor EdFi.GradeLevel\n    documentation \"The level.\"\n    is required\n",
    );
    let Property::Descriptor(descriptor) = parsed else {
        panic!("expected a descriptor property");
    };
    assert_eq!(descriptor.target.namespace.as_deref(), Some("EdFi"));
    assert_eq!(descriptor.target.name, "GradeLevel");
}

#[test]
fn test_parse_common_property() {
    let parsed = property("  common Address\n    documentation \"The address.\"\n    is optional collection\n");
    let Property::Common(common) = parsed else {
        panic!("expected a common property");
    };
    assert!(!common.extension_override);
    assert_eq!(common.target.name, "Address");
}

#[test]
fn test_parse_common_extension_override_property() {
    let parsed = property(
        "  common extension Address\n    documentation inherited\n    is optional collection\n",
    );
    let Property::Common(common) = parsed else {
        panic!("expected a common property");
    };
    assert!(common.extension_override);
}

#[test]
fn test_parse_domain_entity_property_markers_and_merge() {
    let parsed = property(
        "  domain entity Session\n    documentation \"The session.\"\n    is required\n    potentially logical\n    is weak\n    merge Session.SchoolYear with SchoolYear\n",
    );
    let Property::DomainEntity(reference) = parsed else {
        panic!("expected a domain entity property");
    };
    assert!(reference.potentially_logical);
    assert!(reference.is_weak);
    assert_eq!(reference.merge_directives.len(), 1);
    assert_eq!(
        reference.merge_directives[0].source,
        vec!["Session", "SchoolYear"]
    );
    assert_eq!(reference.merge_directives[0].target, vec!["SchoolYear"]);
}

#[test]
fn test_parse_association_property() {
    let parsed = property(
        "  association StudentSchoolAssociation\n    documentation \"The enrollment.\"\n    is optional\n",
    );
    assert!(matches!(parsed, Property::Association(_)));
}

#[rstest]
#[case("shared decimal")]
#[case("shared integer")]
#[case("shared short")]
#[case("shared string")]
fn test_parse_shared_property_kinds(#[case] keyword: &str) {
    let parsed = property(&format!(
        "  {keyword} Amount named LocalAmount\n    documentation \"Shared.\"\n    is required\n"
    ));
    let matches_kind = match keyword {
        "shared decimal" => matches!(parsed, Property::SharedDecimal(_)),
        "shared integer" => matches!(parsed, Property::SharedInteger(_)),
        "shared short" => matches!(parsed, Property::SharedShort(_)),
        "shared string" => matches!(parsed, Property::SharedString(_)),
        _ => unreachable!(),
    };
    assert!(matches_kind, "wrong variant for '{keyword}': {parsed:?}");
    // The 'named' rename becomes the property's effective name
    assert_eq!(parsed.name(), "LocalAmount");
}

#[test]
fn test_parse_shared_property_without_rename() {
    let parsed = property(
        "  shared string PersonName\n    documentation \"Shared name.\"\n    is required\n",
    );
    assert_eq!(parsed.name(), "PersonName");
    let Property::SharedString(shared) = parsed else {
        panic!("expected a shared string property");
    };
    assert_eq!(shared.target.name, "PersonName");
    assert_eq!(shared.local_name, None);
}

#[test]
fn test_parse_multiple_merge_directives() {
    let parsed = property(
        "  domain entity ReportCard\n    documentation \"The report card.\"\n    is required\n    merge ReportCard.GradingPeriod.School with School\n    merge ReportCard.Student with Student\n",
    );
    let Property::DomainEntity(reference) = parsed else {
        panic!("expected a domain entity property");
    };
    assert_eq!(reference.merge_directives.len(), 2);
    assert_eq!(
        reference.merge_directives[0].source,
        vec!["ReportCard", "GradingPeriod", "School"]
    );
}
