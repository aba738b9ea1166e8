use smol_str::SmolStr;

// ============================================================================
// Shared leaf types
// ============================================================================

/// A reference to another entity by name, with an optional explicit
/// namespace qualifier (`EdFi.Student`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedRef {
    pub namespace: Option<SmolStr>,
    pub name: SmolStr,
}

impl QualifiedRef {
    pub fn local(name: impl Into<SmolStr>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }
}

/// A dot-separated chain of identifiers inside a merge directive
/// (`ClassPeriod.School`). Never empty.
pub type PropertyPath = Vec<SmolStr>;

/// `merge <source> with <target>` - declares two reference paths equivalent
/// so a downstream consumer can collapse duplicate inherited references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeDirective {
    pub source: PropertyPath,
    pub target: PropertyPath,
}

/// `role name <Name> [shorten to <Alias>]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName {
    pub name: SmolStr,
    pub shorten_to: Option<SmolStr>,
}

/// An integer bound on `integer` properties and shared integers. `big` is
/// the unbounded sentinel, usable wherever a signed bound is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntBound {
    Value(i64),
    Big,
}

// ============================================================================
// Property components
// ============================================================================

/// Documentation inside a property body: either real text or the literal
/// `inherited` marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyDocumentation {
    Inherited,
    Text(String),
}

/// Exactly one annotation per property, chosen from a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyAnnotation {
    /// `is part of identity`
    Identity,
    /// `renames identity property <BaseKeyName>`
    IdentityRename { base_key_name: SmolStr },
    /// `is required`
    Required,
    /// `is optional`
    Optional,
    /// `is required collection`
    RequiredCollection,
    /// `is optional collection`
    OptionalCollection,
    /// `is queryable only`
    QueryableOnly,
}

/// The clause block shared by every property kind. Clause order in source
/// is fixed: deprecation, documentation, annotation, role name, queryable
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyComponents {
    pub deprecation: Option<String>,
    pub documentation: PropertyDocumentation,
    pub annotation: PropertyAnnotation,
    pub role_name: Option<RoleName>,
    /// `is queryable field` - accepted after any annotation kind; gating
    /// by annotation is left to the semantic layer.
    pub is_queryable_field: bool,
}

// ============================================================================
// Property kind payloads
// ============================================================================

/// Payload for kinds with no trailing constraints: bool, currency, date,
/// datetime, duration, percent, time, year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleProperty {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
}

/// `integer` - optional signed or unbounded min/max after the components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerProperty {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub min_value: Option<IntBound>,
    pub max_value: Option<IntBound>,
}

/// `short` - like `integer` but the `big` sentinel is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortProperty {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

/// `decimal` - total digits and decimal places are mandatory and precede
/// any min/max bound. Bounds keep their source spelling (`100.00`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalProperty {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub total_digits: u32,
    pub decimal_places: u32,
    pub min_value: Option<SmolStr>,
    pub max_value: Option<SmolStr>,
}

/// `string` - max length is mandatory, min length optional and first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringProperty {
    pub name: SmolStr,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub min_length: Option<u32>,
    pub max_length: u32,
}

/// Payload for `enumeration`, `descriptor`, `choice`, and `inline common`
/// references. Merge directives are only ever populated for the latter
/// two; the grammar rejects them on enumeration/descriptor references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceProperty {
    pub target: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub merge_directives: Vec<MergeDirective>,
}

/// `common` / `common extension` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommonProperty {
    pub target: QualifiedRef,
    /// `common extension` - overrides an extension of the common type
    /// rather than referencing the base type.
    pub extension_override: bool,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub merge_directives: Vec<MergeDirective>,
}

/// `association` / `domain entity` reference - the only kinds that accept
/// the `potentially logical` and `is weak` markers, in that order, before
/// any merge directives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityReferenceProperty {
    pub target: QualifiedRef,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub potentially_logical: bool,
    pub is_weak: bool,
    pub merge_directives: Vec<MergeDirective>,
}

/// `shared decimal/integer/short/string <Type> [named <LocalName>]` -
/// references a shared simple type, optionally renamed locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedProperty {
    pub target: QualifiedRef,
    pub local_name: Option<SmolStr>,
    pub model_id: Option<SmolStr>,
    pub components: PropertyComponents,
    pub merge_directives: Vec<MergeDirective>,
}

// ============================================================================
// Property
// ============================================================================

/// A property declared inside an entity body, one of 23 kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Property {
    Association(EntityReferenceProperty),
    Boolean(SimpleProperty),
    Choice(ReferenceProperty),
    Common(CommonProperty),
    Currency(SimpleProperty),
    Date(SimpleProperty),
    Datetime(SimpleProperty),
    Decimal(DecimalProperty),
    Descriptor(ReferenceProperty),
    DomainEntity(EntityReferenceProperty),
    Duration(SimpleProperty),
    Enumeration(ReferenceProperty),
    InlineCommon(ReferenceProperty),
    Integer(IntegerProperty),
    Percent(SimpleProperty),
    SharedDecimal(SharedProperty),
    SharedInteger(SharedProperty),
    SharedShort(SharedProperty),
    SharedString(SharedProperty),
    Short(ShortProperty),
    String(StringProperty),
    Time(SimpleProperty),
    Year(SimpleProperty),
}

impl Property {
    /// The declared name of this property. For reference kinds this is the
    /// referenced entity's local name; a shared property's `named` rename
    /// takes precedence when present.
    pub fn name(&self) -> &SmolStr {
        match self {
            Self::Boolean(p)
            | Self::Currency(p)
            | Self::Date(p)
            | Self::Datetime(p)
            | Self::Duration(p)
            | Self::Percent(p)
            | Self::Time(p)
            | Self::Year(p) => &p.name,
            Self::Integer(p) => &p.name,
            Self::Short(p) => &p.name,
            Self::Decimal(p) => &p.name,
            Self::String(p) => &p.name,
            Self::Choice(p) | Self::Descriptor(p) | Self::Enumeration(p) | Self::InlineCommon(p) => {
                &p.target.name
            }
            Self::Common(p) => &p.target.name,
            Self::Association(p) | Self::DomainEntity(p) => &p.target.name,
            Self::SharedDecimal(p)
            | Self::SharedInteger(p)
            | Self::SharedShort(p)
            | Self::SharedString(p) => p.local_name.as_ref().unwrap_or(&p.target.name),
        }
    }

    /// The components block every kind carries.
    pub fn components(&self) -> &PropertyComponents {
        match self {
            Self::Boolean(p)
            | Self::Currency(p)
            | Self::Date(p)
            | Self::Datetime(p)
            | Self::Duration(p)
            | Self::Percent(p)
            | Self::Time(p)
            | Self::Year(p) => &p.components,
            Self::Integer(p) => &p.components,
            Self::Short(p) => &p.components,
            Self::Decimal(p) => &p.components,
            Self::String(p) => &p.components,
            Self::Choice(p) | Self::Descriptor(p) | Self::Enumeration(p) | Self::InlineCommon(p) => {
                &p.components
            }
            Self::Common(p) => &p.components,
            Self::Association(p) | Self::DomainEntity(p) => &p.components,
            Self::SharedDecimal(p)
            | Self::SharedInteger(p)
            | Self::SharedShort(p)
            | Self::SharedString(p) => &p.components,
        }
    }
}
