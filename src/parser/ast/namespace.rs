use smol_str::SmolStr;

use super::entities::*;

// ============================================================================
// Root
// ============================================================================

/// The namespace kind tag after the namespace name: the `core` keyword or a
/// custom project-extension identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
    Core,
    Extension(SmolStr),
}

impl NamespaceKind {
    pub fn is_core(&self) -> bool {
        matches!(self, Self::Core)
    }
}

/// `Begin Namespace <Name> <kind> ... End Namespace`
///
/// Owns every entity declared inside its delimiters, in declaration order.
/// Immutable after parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    pub name: SmolStr,
    pub kind: NamespaceKind,
    pub entities: Vec<TopLevelEntity>,
}

// ============================================================================
// Top-level entities
// ============================================================================

/// A tagged variant over the 14 entity families and their extension and
/// subclass forms - every construct that can appear directly inside a
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopLevelEntity {
    AbstractEntity(AbstractEntity),
    Association(Association),
    AssociationExtension(AssociationExtension),
    AssociationSubclass(AssociationSubclass),
    Choice(Choice),
    Common(Common),
    CommonExtension(CommonExtension),
    CommonSubclass(CommonSubclass),
    Descriptor(Descriptor),
    Domain(Domain),
    DomainEntity(DomainEntity),
    DomainEntityExtension(DomainEntityExtension),
    DomainEntitySubclass(DomainEntitySubclass),
    Enumeration(Enumeration),
    InlineCommon(InlineCommon),
    Interchange(Interchange),
    InterchangeExtension(InterchangeExtension),
    SharedDecimal(SharedDecimal),
    SharedInteger(SharedInteger),
    SharedShort(SharedShort),
    SharedString(SharedString),
    Subdomain(Subdomain),
}

impl TopLevelEntity {
    /// The local name of the entity. Extension variants report the name of
    /// the entity they extend.
    pub fn name(&self) -> &SmolStr {
        match self {
            Self::AbstractEntity(e) => &e.name,
            Self::Association(e) => &e.name,
            Self::AssociationExtension(e) => &e.base.name,
            Self::AssociationSubclass(e) => &e.name,
            Self::Choice(e) => &e.name,
            Self::Common(e) => &e.name,
            Self::CommonExtension(e) => &e.base.name,
            Self::CommonSubclass(e) => &e.name,
            Self::Descriptor(e) => &e.name,
            Self::Domain(e) => &e.name,
            Self::DomainEntity(e) => &e.name,
            Self::DomainEntityExtension(e) => &e.base.name,
            Self::DomainEntitySubclass(e) => &e.name,
            Self::Enumeration(e) => &e.name,
            Self::InlineCommon(e) => &e.name,
            Self::Interchange(e) => &e.name,
            Self::InterchangeExtension(e) => &e.base.name,
            Self::SharedDecimal(e) => &e.name,
            Self::SharedInteger(e) => &e.name,
            Self::SharedShort(e) => &e.name,
            Self::SharedString(e) => &e.name,
            Self::Subdomain(e) => &e.name,
        }
    }
}
