//! Token vocabulary for the EdModel DSL.
//!
//! Every keyword in the language is a single token, including the multi-word
//! ones (`Domain Entity`, `is part of identity`, ...). The lexer matches
//! them longest-first, so `domain entity identity` never lexes as
//! `domain entity` followed by `identity`.

/// The kind of a lexed token.
///
/// Keyword variants that share a spelling with an entity keyword carry a
/// `Keyword` suffix: `Association` is the capitalized entity opener,
/// `AssociationKeyword` the lowercase property/item opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================================================
    // TOP-LEVEL ENTITY KEYWORDS (capitalized)
    // =========================================================================
    AbstractEntity,
    Association,
    BeginNamespace,
    EndNamespace,
    Choice,
    Common,
    Descriptor,
    Domain,
    DomainEntity,
    Enumeration,
    InlineCommon,
    Interchange,
    SharedDecimal,
    SharedInteger,
    SharedShort,
    SharedString,
    Subdomain,

    // =========================================================================
    // PROPERTY / ITEM KEYWORDS (lowercase)
    // =========================================================================
    AssociationKeyword,
    AssociationIdentity,
    Boolean,
    ChoiceKeyword,
    CommonKeyword,
    CommonExtension,
    Currency,
    Date,
    Datetime,
    Decimal,
    DescriptorKeyword,
    DomainEntityKeyword,
    DomainEntityIdentity,
    Duration,
    EnumerationKeyword,
    EnumerationItem,
    InlineCommonKeyword,
    Integer,
    Percent,
    SharedDecimalKeyword,
    SharedIntegerKeyword,
    SharedShortKeyword,
    SharedStringKeyword,
    SharedNamed,
    Short,
    String,
    Time,
    Year,

    // =========================================================================
    // CLAUSE KEYWORDS
    // =========================================================================
    Additions,
    BasedOn,
    Big,
    CascadeUpdate,
    Core,
    DecimalPlaces,
    Deprecated,
    Documentation,
    ExtendedDocumentation,
    FooterDocumentation,
    Identity,
    IdentityRename,
    Inherited,
    IsQueryableField,
    IsQueryableOnly,
    IsWeakReference,
    MaxLength,
    MaxValue,
    MergeReference,
    MinLength,
    MinValue,
    Optional,
    OptionalCollection,
    PotentiallyLogical,
    Required,
    RequiredCollection,
    RoleName,
    ShortenTo,
    SubdomainOf,
    SubdomainPosition,
    TotalDigits,
    UseCaseDocumentation,
    With,
    WithMapType,
    WithOptionalMapType,

    // =========================================================================
    // LEGACY RESERVED WORDS (lexed, accepted by no production)
    // =========================================================================
    Inline,
    Type,
    DomainItem,
    Element,
    Reference,

    // =========================================================================
    // TERMINALS
    // =========================================================================
    Id,
    UnsignedInt,
    DecimalValue,
    Text,
    ModelId,
    PosSign,
    NegSign,
    Period,

    /// Input matched no token rule; the parse stream skips these after
    /// reporting a lexical diagnostic.
    Error,
}

impl TokenKind {
    /// Can this token open a top-level entity declaration?
    pub fn starts_top_level_entity(self) -> bool {
        matches!(
            self,
            Self::AbstractEntity
                | Self::Association
                | Self::Choice
                | Self::Common
                | Self::Descriptor
                | Self::Domain
                | Self::DomainEntity
                | Self::Enumeration
                | Self::InlineCommon
                | Self::Interchange
                | Self::SharedDecimal
                | Self::SharedInteger
                | Self::SharedShort
                | Self::SharedString
                | Self::Subdomain
        )
    }

    /// Can this token open one of the 23 property kinds?
    pub fn starts_property(self) -> bool {
        matches!(
            self,
            Self::AssociationKeyword
                | Self::Boolean
                | Self::ChoiceKeyword
                | Self::CommonKeyword
                | Self::CommonExtension
                | Self::Currency
                | Self::Date
                | Self::Datetime
                | Self::Decimal
                | Self::DescriptorKeyword
                | Self::DomainEntityKeyword
                | Self::Duration
                | Self::EnumerationKeyword
                | Self::InlineCommonKeyword
                | Self::Integer
                | Self::Percent
                | Self::SharedDecimalKeyword
                | Self::SharedIntegerKeyword
                | Self::SharedShortKeyword
                | Self::SharedStringKeyword
                | Self::Short
                | Self::String
                | Self::Time
                | Self::Year
        )
    }

    /// Can this token open a domain/subdomain item?
    pub fn starts_domain_item(self) -> bool {
        matches!(
            self,
            Self::AssociationKeyword
                | Self::CommonKeyword
                | Self::DescriptorKeyword
                | Self::DomainEntityKeyword
                | Self::InlineCommonKeyword
        )
    }

    /// Can this token open an interchange element or identity reference?
    pub fn starts_interchange_item(self) -> bool {
        matches!(
            self,
            Self::AssociationKeyword
                | Self::AssociationIdentity
                | Self::DescriptorKeyword
                | Self::DomainEntityKeyword
                | Self::DomainEntityIdentity
        )
    }

    /// Display form used in diagnostics: quoted keyword literals, bare
    /// names for token classes.
    pub fn display(self) -> &'static str {
        match self {
            Self::AbstractEntity => "'Abstract Entity'",
            Self::Association => "'Association'",
            Self::BeginNamespace => "'Begin Namespace'",
            Self::EndNamespace => "'End Namespace'",
            Self::Choice => "'Choice'",
            Self::Common => "'Common'",
            Self::Descriptor => "'Descriptor'",
            Self::Domain => "'Domain'",
            Self::DomainEntity => "'Domain Entity'",
            Self::Enumeration => "'Enumeration'",
            Self::InlineCommon => "'Inline Common'",
            Self::Interchange => "'Interchange'",
            Self::SharedDecimal => "'Shared Decimal'",
            Self::SharedInteger => "'Shared Integer'",
            Self::SharedShort => "'Shared Short'",
            Self::SharedString => "'Shared String'",
            Self::Subdomain => "'Subdomain'",
            Self::AssociationKeyword => "'association'",
            Self::AssociationIdentity => "'association identity'",
            Self::Boolean => "'bool'",
            Self::ChoiceKeyword => "'choice'",
            Self::CommonKeyword => "'common'",
            Self::CommonExtension => "'common extension'",
            Self::Currency => "'currency'",
            Self::Date => "'date'",
            Self::Datetime => "'datetime'",
            Self::Decimal => "'decimal'",
            Self::DescriptorKeyword => "'descriptor'",
            Self::DomainEntityKeyword => "'domain entity'",
            Self::DomainEntityIdentity => "'domain entity identity'",
            Self::Duration => "'duration'",
            Self::EnumerationKeyword => "'enumeration'",
            Self::EnumerationItem => "'item'",
            Self::InlineCommonKeyword => "'inline common'",
            Self::Integer => "'integer'",
            Self::Percent => "'percent'",
            Self::SharedDecimalKeyword => "'shared decimal'",
            Self::SharedIntegerKeyword => "'shared integer'",
            Self::SharedShortKeyword => "'shared short'",
            Self::SharedStringKeyword => "'shared string'",
            Self::SharedNamed => "'named'",
            Self::Short => "'short'",
            Self::String => "'string'",
            Self::Time => "'time'",
            Self::Year => "'year'",
            Self::Additions => "'additions'",
            Self::BasedOn => "'based on'",
            Self::Big => "'big'",
            Self::CascadeUpdate => "'allow primary key updates'",
            Self::Core => "'core'",
            Self::DecimalPlaces => "'decimal places'",
            Self::Deprecated => "'deprecated'",
            Self::Documentation => "'documentation'",
            Self::ExtendedDocumentation => "'extended documentation'",
            Self::FooterDocumentation => "'footer documentation'",
            Self::Identity => "'is part of identity'",
            Self::IdentityRename => "'renames identity property'",
            Self::Inherited => "'inherited'",
            Self::IsQueryableField => "'is queryable field'",
            Self::IsQueryableOnly => "'is queryable only'",
            Self::IsWeakReference => "'is weak'",
            Self::MaxLength => "'max length'",
            Self::MaxValue => "'max value'",
            Self::MergeReference => "'merge'",
            Self::MinLength => "'min length'",
            Self::MinValue => "'min value'",
            Self::Optional => "'is optional'",
            Self::OptionalCollection => "'is optional collection'",
            Self::PotentiallyLogical => "'potentially logical'",
            Self::Required => "'is required'",
            Self::RequiredCollection => "'is required collection'",
            Self::RoleName => "'role name'",
            Self::ShortenTo => "'shorten to'",
            Self::SubdomainOf => "'of'",
            Self::SubdomainPosition => "'position'",
            Self::TotalDigits => "'total digits'",
            Self::UseCaseDocumentation => "'use case documentation'",
            Self::With => "'with'",
            Self::WithMapType => "'with map type'",
            Self::WithOptionalMapType => "'with optional map type'",
            Self::Inline => "'Inline'",
            Self::Type => "'Type'",
            Self::DomainItem => "'domain item'",
            Self::Element => "'element'",
            Self::Reference => "'reference'",
            Self::Id => "ID",
            Self::UnsignedInt => "UNSIGNED_INT",
            Self::DecimalValue => "DECIMAL_VALUE",
            Self::Text => "TEXT",
            Self::ModelId => "MODEL_ID",
            Self::PosSign => "'+'",
            Self::NegSign => "'-'",
            Self::Period => "'.'",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}
