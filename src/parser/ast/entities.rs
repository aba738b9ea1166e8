use smol_str::SmolStr;

use super::properties::{
    IntBound, MergeDirective, Property, PropertyDocumentation, QualifiedRef, RoleName,
};

// ============================================================================
// Referencable items (domains, subdomains, interchanges)
// ============================================================================

/// The entity family named by a referencable item keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    Association,
    Common,
    Descriptor,
    DomainEntity,
    InlineCommon,
}

/// A referencable item: keyword, optional namespace qualifier, local name,
/// optional model id. The same shape recurs in Domain, Subdomain, and
/// Interchange bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: RefKind,
    pub namespace: Option<SmolStr>,
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
}

/// One entry of an interchange body, preserving the source interleave of
/// element and identity references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InterchangeItem {
    Element(EntityRef),
    Identity(EntityRef),
}

// ============================================================================
// Property-bearing entities
// ============================================================================

/// `Abstract Entity` - an entity that cannot be instantiated directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbstractEntity {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

/// One of the two mandatory `domain entity` references that define an
/// association. Carries its own documentation, optional role name, and
/// merge directives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefiningDomainEntity {
    pub entity: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: PropertyDocumentation,
    pub role_name: Option<RoleName>,
    pub merge_directives: Vec<MergeDirective>,
}

/// `Association` - exactly two defining domain entities, then properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Association {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    /// `allow primary key updates`
    pub allow_primary_key_updates: bool,
    pub first_entity: DefiningDomainEntity,
    pub second_entity: DefiningDomainEntity,
    pub properties: Vec<Property>,
}

/// `Association <Base> additions` - extension variants carry no
/// documentation clause of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssociationExtension {
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub properties: Vec<Property>,
}

/// `Association <Name> based on <Base>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssociationSubclass {
    pub name: SmolStr,
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

/// `Choice` - exactly one of its properties is expected to appear in data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Choice {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

/// `Common` - a reusable composite type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Common {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

/// `Common <Base> additions`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommonExtension {
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub properties: Vec<Property>,
}

/// `Common <Name> based on <Base>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommonSubclass {
    pub name: SmolStr,
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

/// `Inline Common` - a common type that is always inlined at the use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineCommon {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

/// `Domain Entity` - the central entity family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainEntity {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    /// `allow primary key updates`
    pub allow_primary_key_updates: bool,
    pub properties: Vec<Property>,
}

/// `Domain Entity <Base> additions`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainEntityExtension {
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub properties: Vec<Property>,
}

/// `Domain Entity <Name> based on <Base>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainEntitySubclass {
    pub name: SmolStr,
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
}

// ============================================================================
// Descriptor and enumerations
// ============================================================================

/// `item "<ShortDescription>" [model id] [documentation]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumerationItem {
    pub short_description: String,
    pub model_id: Option<SmolStr>,
    pub documentation: Option<String>,
}

/// The inline enumeration attached to a descriptor, introduced by
/// `with map type` (required) or `with optional map type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapType {
    pub required: bool,
    pub documentation: String,
    pub items: Vec<EnumerationItem>,
}

/// `Descriptor` - zero or more properties, then an optional map type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub properties: Vec<Property>,
    pub map_type: Option<MapType>,
}

/// `Enumeration` - one or more items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enumeration {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub items: Vec<EnumerationItem>,
}

// ============================================================================
// Shared simple types
// ============================================================================

/// `Shared Decimal` - a named decimal type reusable by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedDecimal {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub total_digits: u32,
    pub decimal_places: u32,
    pub min_value: Option<SmolStr>,
    pub max_value: Option<SmolStr>,
}

/// `Shared Integer`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedInteger {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub min_value: Option<IntBound>,
    pub max_value: Option<IntBound>,
}

/// `Shared Short`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedShort {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

/// `Shared String` - max length mandatory, min length optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedString {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub min_length: Option<u32>,
    pub max_length: u32,
}

// ============================================================================
// Domains and interchanges
// ============================================================================

/// `Domain` - one or more referencable items, optional footer text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub items: Vec<EntityRef>,
    pub footer_documentation: Option<String>,
}

/// `Subdomain <Name> of <ParentDomain>` - like a domain, plus an optional
/// explicit ordering position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subdomain {
    pub name: SmolStr,
    pub parent: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub items: Vec<EntityRef>,
    pub position: Option<u32>,
}

/// `Interchange` - a data-interchange manifest. Identity and element
/// references may interleave arbitrarily; at least one element reference
/// is required for the base form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interchange {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub documentation: String,
    pub extended_documentation: Option<String>,
    pub use_case_documentation: Option<String>,
    pub items: Vec<InterchangeItem>,
}

/// `Interchange <Base> additions` - requires at least one item of either
/// kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterchangeExtension {
    pub base: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub deprecation: Option<String>,
    pub items: Vec<InterchangeItem>,
}
