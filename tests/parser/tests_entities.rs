//! Parser tests - top-level entity families.

use edmodel::parser::ast::*;

use crate::helpers::parse_helpers::{parse_clean, parse_entity};
use crate::helpers::source_fixtures::*;

// ============================================================================
// Domain entities
// ============================================================================

#[test]
fn test_parse_domain_entity_student() {
    let TopLevelEntity::DomainEntity(entity) = parse_entity(STUDENT_ENTITY) else {
        panic!("expected a domain entity");
    };
    assert_eq!(entity.name, "Student");
    assert_eq!(entity.documentation, "A student.");
    assert!(!entity.allow_primary_key_updates);
    assert_eq!(entity.properties.len(), 1);

    let Property::String(property) = &entity.properties[0] else {
        panic!("expected a string property");
    };
    assert_eq!(property.name, "StudentName");
    assert_eq!(
        property.components.annotation,
        PropertyAnnotation::Required
    );
    assert_eq!(property.min_length, None);
    assert_eq!(property.max_length, 75);
}

#[test]
fn test_parse_domain_entity_with_cascade_update() {
    let source = r#"
Domain Entity ClassPeriod
  documentation "A class period."
  allow primary key updates
  string ClassPeriodName
    documentation "The name."
    is part of identity
    max length 60
"#;
    let TopLevelEntity::DomainEntity(entity) = parse_entity(source) else {
        panic!("expected a domain entity");
    };
    assert!(entity.allow_primary_key_updates);
}

#[test]
fn test_parse_domain_entity_with_model_id_and_deprecation() {
    let source = r#"
Domain Entity LegacyRecord [17]
  deprecated "Use CurrentRecord instead."
  documentation "A legacy record."
  bool Active
    documentation "Whether the record is active."
    is optional
"#;
    let TopLevelEntity::DomainEntity(entity) = parse_entity(source) else {
        panic!("expected a domain entity");
    };
    assert_eq!(entity.model_id.as_deref(), Some("17"));
    assert_eq!(entity.deprecation.as_deref(), Some("Use CurrentRecord instead."));
}

#[test]
fn test_parse_domain_entity_extension() {
    let source = r#"
Domain Entity EdFi.Student additions
  bool Tuition
    documentation "Tuition flag."
    is optional
"#;
    let TopLevelEntity::DomainEntityExtension(entity) = parse_entity(source) else {
        panic!("expected a domain entity extension");
    };
    assert_eq!(entity.base.namespace.as_deref(), Some("EdFi"));
    assert_eq!(entity.base.name, "Student");
    assert_eq!(entity.properties.len(), 1);
}

#[test]
fn test_parse_domain_entity_subclass() {
    let source = r#"
Domain Entity School based on EducationOrganization
  documentation "An educational institution."
  integer SchoolId
    documentation "The school identifier."
    is part of identity
"#;
    let TopLevelEntity::DomainEntitySubclass(entity) = parse_entity(source) else {
        panic!("expected a domain entity subclass");
    };
    assert_eq!(entity.name, "School");
    assert_eq!(entity.base, QualifiedRef::local("EducationOrganization"));
    assert_eq!(entity.documentation, "An educational institution.");
}

#[test]
fn test_parse_abstract_entity() {
    let TopLevelEntity::AbstractEntity(entity) = parse_entity(SIMPLE_ABSTRACT_ENTITY) else {
        panic!("expected an abstract entity");
    };
    assert_eq!(entity.name, "EducationOrganization");
    assert_eq!(entity.properties.len(), 1);
    assert_eq!(
        entity.properties[0].components().annotation,
        PropertyAnnotation::Identity
    );
}

// ============================================================================
// Associations
// ============================================================================

#[test]
fn test_parse_association() {
    let TopLevelEntity::Association(entity) = parse_entity(STUDENT_SCHOOL_ASSOCIATION) else {
        panic!("expected an association");
    };
    assert_eq!(entity.name, "StudentSchoolAssociation");
    assert_eq!(entity.first_entity.entity.name, "Student");
    assert_eq!(entity.second_entity.entity.name, "School");
    assert_eq!(entity.properties.len(), 1);
}

#[test]
fn test_parse_association_with_role_names_and_merges() {
    let source = r#"
Association StudentSectionAssociation
  documentation "A student's membership in a section."
  allow primary key updates
  domain entity Student
    documentation "The student."
    role name Enrolled shorten to Enr
  domain entity Section
    documentation "The section."
    merge Section.Session with Session
"#;
    let TopLevelEntity::Association(entity) = parse_entity(source) else {
        panic!("expected an association");
    };
    assert!(entity.allow_primary_key_updates);

    let role_name = entity.first_entity.role_name.as_ref().unwrap();
    assert_eq!(role_name.name, "Enrolled");
    assert_eq!(role_name.shorten_to.as_deref(), Some("Enr"));

    assert_eq!(entity.second_entity.merge_directives.len(), 1);
    let merge = &entity.second_entity.merge_directives[0];
    assert_eq!(merge.source, vec!["Section", "Session"]);
    assert_eq!(merge.target, vec!["Session"]);
    assert!(entity.properties.is_empty());
}

#[test]
fn test_parse_association_extension() {
    let source = r#"
Association EdFi.StudentSchoolAssociation additions
  date ExitDate
    documentation "The exit date."
    is optional
"#;
    let TopLevelEntity::AssociationExtension(entity) = parse_entity(source) else {
        panic!("expected an association extension");
    };
    assert_eq!(entity.base.namespace.as_deref(), Some("EdFi"));
    assert_eq!(entity.base.name, "StudentSchoolAssociation");
}

#[test]
fn test_parse_association_subclass() {
    let source = r#"
Association StudentProgramEnrollment based on StudentProgramAssociation
  documentation "Enrollment in a program."
  date EnrollmentDate
    documentation "The date."
    is required
"#;
    let TopLevelEntity::AssociationSubclass(entity) = parse_entity(source) else {
        panic!("expected an association subclass");
    };
    assert_eq!(entity.name, "StudentProgramEnrollment");
    assert_eq!(entity.base.name, "StudentProgramAssociation");
}

// ============================================================================
// Choices, commons, inline commons
// ============================================================================

#[test]
fn test_parse_choice() {
    let source = r#"
Choice LearningResourceChoice
  documentation "Either a URI or a reference."
  string LearningResourceMetadataURI
    documentation "The URI."
    is required
    max length 255
  domain entity LearningResource
    documentation "The resource."
    is required
"#;
    let TopLevelEntity::Choice(entity) = parse_entity(source) else {
        panic!("expected a choice");
    };
    assert_eq!(entity.name, "LearningResourceChoice");
    assert_eq!(entity.properties.len(), 2);
}

#[test]
fn test_parse_common() {
    let source = r#"
Common Address
  documentation "A physical address."
  string StreetNumberName
    documentation "The street."
    is required
    max length 150
"#;
    let TopLevelEntity::Common(entity) = parse_entity(source) else {
        panic!("expected a common");
    };
    assert_eq!(entity.name, "Address");
}

#[test]
fn test_parse_common_extension() {
    let source = r#"
Common EdFi.Address additions
  string Latitude
    documentation "The latitude."
    is optional
    max length 20
"#;
    let TopLevelEntity::CommonExtension(entity) = parse_entity(source) else {
        panic!("expected a common extension");
    };
    assert_eq!(entity.base.namespace.as_deref(), Some("EdFi"));
    assert_eq!(entity.base.name, "Address");
}

#[test]
fn test_parse_common_subclass() {
    let source = r#"
Common InternationalAddress based on Address
  documentation "An address outside the country."
  string CountryName
    documentation "The country."
    is required
    max length 50
"#;
    let TopLevelEntity::CommonSubclass(entity) = parse_entity(source) else {
        panic!("expected a common subclass");
    };
    assert_eq!(entity.name, "InternationalAddress");
    assert_eq!(entity.base.name, "Address");
}

#[test]
fn test_parse_inline_common() {
    let source = r#"
Inline Common Period
  documentation "A time period."
  date BeginDate
    documentation "The begin date."
    is required
"#;
    let TopLevelEntity::InlineCommon(entity) = parse_entity(source) else {
        panic!("expected an inline common");
    };
    assert_eq!(entity.name, "Period");
}

// ============================================================================
// Descriptors and enumerations
// ============================================================================

#[test]
fn test_parse_descriptor_without_map_type() {
    let source = r#"
Descriptor GradeLevel
  documentation "The grade level."
"#;
    let TopLevelEntity::Descriptor(entity) = parse_entity(source) else {
        panic!("expected a descriptor");
    };
    assert_eq!(entity.name, "GradeLevel");
    assert!(entity.properties.is_empty());
    assert!(entity.map_type.is_none());
}

#[test]
fn test_parse_descriptor_with_required_map_type() {
    let TopLevelEntity::Descriptor(entity) = parse_entity(DESCRIPTOR_WITH_MAP_TYPE) else {
        panic!("expected a descriptor");
    };
    let map_type = entity.map_type.expect("map type should be present");
    assert!(map_type.required);
    assert_eq!(map_type.documentation, "Subject area categories.");
    assert_eq!(map_type.items.len(), 2);
    assert_eq!(map_type.items[0].short_description, "English");
}

#[test]
fn test_parse_descriptor_with_optional_map_type_and_properties() {
    let source = r#"
Descriptor CreditType
  documentation "The type of credit."
  decimal CreditConversion
    documentation "Conversion factor."
    is optional
    total digits 9
    decimal places 2
  with optional map type
    documentation "Credit categories."
    item "Semester hour credit"
"#;
    let TopLevelEntity::Descriptor(entity) = parse_entity(source) else {
        panic!("expected a descriptor");
    };
    assert_eq!(entity.properties.len(), 1);
    let map_type = entity.map_type.expect("map type should be present");
    assert!(!map_type.required);
}

#[test]
fn test_parse_enumeration() {
    let TopLevelEntity::Enumeration(entity) = parse_entity(SIMPLE_ENUMERATION) else {
        panic!("expected an enumeration");
    };
    assert_eq!(entity.name, "SchoolYear");
    assert_eq!(entity.items.len(), 2);
    assert_eq!(entity.items[0].short_description, "2024-2025");
}

#[test]
fn test_parse_enumeration_item_with_model_id_and_documentation() {
    let source = r#"
Enumeration Term
  documentation "The term."
  item "Fall Semester" [9]
    documentation "August through December."
  item "Spring Semester"
"#;
    let TopLevelEntity::Enumeration(entity) = parse_entity(source) else {
        panic!("expected an enumeration");
    };
    assert_eq!(entity.items[0].model_id.as_deref(), Some("9"));
    assert_eq!(
        entity.items[0].documentation.as_deref(),
        Some("August through December.")
    );
    assert!(entity.items[1].documentation.is_none());
}

// ============================================================================
// Shared simple types
// ============================================================================

#[test]
fn test_parse_shared_decimal() {
    let source = r#"
Shared Decimal Amount [123]
  documentation "A money amount."
  total digits 10
  decimal places 2
  min value 0.00
  max value 999.99
"#;
    let TopLevelEntity::SharedDecimal(entity) = parse_entity(source) else {
        panic!("expected a shared decimal");
    };
    assert_eq!(entity.model_id.as_deref(), Some("123"));
    assert_eq!(entity.total_digits, 10);
    assert_eq!(entity.decimal_places, 2);
    assert_eq!(entity.min_value.as_deref(), Some("0.00"));
    assert_eq!(entity.max_value.as_deref(), Some("999.99"));
}

#[test]
fn test_parse_shared_integer_with_big_sentinel() {
    let source = r#"
Shared Integer Count
  documentation "A count."
  min value 0
  max value big
"#;
    let TopLevelEntity::SharedInteger(entity) = parse_entity(source) else {
        panic!("expected a shared integer");
    };
    assert_eq!(entity.min_value, Some(IntBound::Value(0)));
    assert_eq!(entity.max_value, Some(IntBound::Big));
}

#[test]
fn test_parse_shared_short_with_signed_bounds() {
    let source = r#"
Shared Short Offset
  documentation "A signed offset."
  min value -5
  max value +10
"#;
    let TopLevelEntity::SharedShort(entity) = parse_entity(source) else {
        panic!("expected a shared short");
    };
    assert_eq!(entity.min_value, Some(-5));
    assert_eq!(entity.max_value, Some(10));
}

#[test]
fn test_parse_shared_string() {
    let source = r#"
Shared String PersonName
  documentation "A name."
  min length 1
  max length 75
"#;
    let TopLevelEntity::SharedString(entity) = parse_entity(source) else {
        panic!("expected a shared string");
    };
    assert_eq!(entity.min_length, Some(1));
    assert_eq!(entity.max_length, 75);
}

#[test]
fn test_parse_shared_string_without_min_length() {
    let source = r#"
Shared String ShortCode
  documentation "A code."
  max length 10
"#;
    let TopLevelEntity::SharedString(entity) = parse_entity(source) else {
        panic!("expected a shared string");
    };
    assert_eq!(entity.min_length, None);
    assert_eq!(entity.max_length, 10);
}

// ============================================================================
// Namespaces
// ============================================================================

#[test]
fn test_parse_core_namespace() {
    let result = parse_clean(STUDENT_ENTITY);
    let namespace = &result.namespaces[0];
    assert_eq!(namespace.name, "EdFi");
    assert_eq!(namespace.kind, NamespaceKind::Core);
}

#[test]
fn test_parse_extension_namespace() {
    let source = format!("Begin Namespace Sample GrandBend\n{STUDENT_ENTITY}\nEnd Namespace\n");
    let result = edmodel::parse(&source);
    assert!(result.ok());
    let namespace = &result.namespaces[0];
    assert_eq!(namespace.name, "Sample");
    assert_eq!(
        namespace.kind,
        NamespaceKind::Extension("GrandBend".into())
    );
}
