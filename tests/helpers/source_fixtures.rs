//! Common DSL source fixtures for tests.

/// Wrap a single property declaration in a minimal domain entity.
pub fn entity_with_property(property_source: &str) -> String {
    format!("Domain Entity Sample\n  documentation \"An entity.\"\n{property_source}")
}

// Simple entities
pub const STUDENT_ENTITY: &str = r#"
Domain Entity Student
  documentation "A student."
  string StudentName
    documentation "The name of the student."
    is required
    max length 75
"#;

pub const SIMPLE_ABSTRACT_ENTITY: &str = r#"
Abstract Entity EducationOrganization
  documentation "Any public or private institution."
  integer Identifier
    documentation "A unique number."
    is part of identity
"#;

pub const SIMPLE_ENUMERATION: &str = r#"
Enumeration SchoolYear
  documentation "Identifier for the school year."
  item "2024-2025"
  item "2025-2026"
"#;

// Associations
pub const STUDENT_SCHOOL_ASSOCIATION: &str = r#"
Association StudentSchoolAssociation
  documentation "The enrollment of a student in a school."
  domain entity Student
    documentation "The student enrolled."
  domain entity School
    documentation "The school of enrollment."
  date EntryDate
    documentation "The enrollment entry date."
    is part of identity
"#;

// Descriptors
pub const DESCRIPTOR_WITH_MAP_TYPE: &str = r#"
Descriptor AcademicSubject
  documentation "The subject area."
  with map type
    documentation "Subject area categories."
    item "English"
    item "Mathematics"
"#;

// Interchanges
pub const INTERLEAVED_INTERCHANGE: &str = r#"
Interchange StudentEnrollment
  documentation "Enrollment exchange."
  domain entity identity Student
  domain entity School
  association identity StudentSchoolAssociation
  association StudentSchoolAssociation
"#;

// Domains
pub const SIMPLE_DOMAIN: &str = r#"
Domain Enrollment
  documentation "Enrollment domain."
  domain entity Student
  association StudentSchoolAssociation
  descriptor AcademicSubject
  common Address
  inline common Period
  footer documentation "End of domain."
"#;
