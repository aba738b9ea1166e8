//! Logos-based lexer for the EdModel DSL.
//!
//! Fast tokenization using the logos crate. The derive macro compiles the
//! keyword literal table into the automaton, so the table is process-wide,
//! read-only, and shared by every lexer instance.
//!
//! Multi-word keywords (`Domain Entity`, `is part of identity`, ...) are
//! single literal tokens. Logos picks the longest match, which gives the
//! required priority of `domain entity identity` over `domain entity` over
//! `domain`, and of identifiers over keyword prefixes (`Domains` is an ID,
//! not `Domain` + `s`).

use logos::Logos;
use text_size::TextSize;

use super::token_kind::TokenKind;
use crate::base::Position;

/// A token with its kind, text, byte offset, and line/column position.
///
/// Line is 1-based, column is 0-based (character count within the line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
    pub position: Position,
}

/// Lexer wrapping the logos-generated tokenizer.
///
/// Comments and whitespace are consumed for position tracking but never
/// emitted; unrecognized input is emitted as [`TokenKind::Error`] tokens so
/// the caller can report it and carry on.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    fn advance_position(&mut self, text: &str) {
        self.offset += text.len() as u32;
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let logos_token = self.inner.next()?;
            let text = self.inner.slice();
            let offset = TextSize::new(self.offset);
            let position = Position::new(self.line, self.column);
            self.advance_position(text);

            let kind = match logos_token {
                Ok(LogosToken::Whitespace) | Ok(LogosToken::LineComment) => continue,
                Ok(t) => t.into(),
                Err(()) => TokenKind::Error,
            };

            return Some(Token {
                kind,
                text,
                offset,
                position,
            });
        }
    }
}

/// Tokenize an entire string into a Vec.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA (consumed by the Lexer iterator, never emitted)
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    // =========================================================================
    // TERMINALS
    // =========================================================================
    #[regex(r"[A-Z][a-zA-Z0-9]*")]
    Id,

    #[regex(r"[0-9]+")]
    UnsignedInt,

    #[regex(r"[+-]?[0-9]+\.[0-9]+")]
    DecimalValue,

    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    Text,

    #[regex(r"\[[0-9]+\]")]
    ModelId,

    #[token("+")]
    PosSign,
    #[token("-")]
    NegSign,
    #[token(".")]
    Period,

    // =========================================================================
    // TOP-LEVEL ENTITY KEYWORDS
    // =========================================================================
    #[token("Abstract Entity")]
    AbstractEntityKw,
    #[token("Association")]
    AssociationKw,
    #[token("Begin Namespace")]
    BeginNamespaceKw,
    #[token("End Namespace")]
    EndNamespaceKw,
    #[token("Choice")]
    ChoiceKw,
    #[token("Common")]
    CommonKw,
    #[token("Descriptor")]
    DescriptorKw,
    #[token("Domain")]
    DomainKw,
    #[token("Domain Entity")]
    DomainEntityKw,
    #[token("Enumeration")]
    EnumerationKw,
    #[token("Inline Common")]
    InlineCommonKw,
    #[token("Interchange")]
    InterchangeKw,
    #[token("Shared Decimal")]
    SharedDecimalKw,
    #[token("Shared Integer")]
    SharedIntegerKw,
    #[token("Shared Short")]
    SharedShortKw,
    #[token("Shared String")]
    SharedStringKw,
    #[token("Subdomain")]
    SubdomainKw,

    // =========================================================================
    // PROPERTY / ITEM KEYWORDS
    // =========================================================================
    #[token("association")]
    AssociationKeywordKw,
    #[token("association identity")]
    AssociationIdentityKw,
    #[token("bool")]
    BooleanKw,
    #[token("choice")]
    ChoiceKeywordKw,
    #[token("common")]
    CommonKeywordKw,
    #[token("common extension")]
    CommonExtensionKw,
    #[token("currency")]
    CurrencyKw,
    #[token("date")]
    DateKw,
    #[token("datetime")]
    DatetimeKw,
    #[token("decimal")]
    DecimalKw,
    #[token("descriptor")]
    DescriptorKeywordKw,
    #[token("domain entity")]
    DomainEntityKeywordKw,
    #[token("domain entity identity")]
    DomainEntityIdentityKw,
    #[token("duration")]
    DurationKw,
    #[token("enumeration")]
    EnumerationKeywordKw,
    #[token("item")]
    EnumerationItemKw,
    #[token("inline common")]
    InlineCommonKeywordKw,
    #[token("integer")]
    IntegerKw,
    #[token("percent")]
    PercentKw,
    #[token("shared decimal")]
    SharedDecimalKeywordKw,
    #[token("shared integer")]
    SharedIntegerKeywordKw,
    #[token("shared short")]
    SharedShortKeywordKw,
    #[token("shared string")]
    SharedStringKeywordKw,
    #[token("named")]
    SharedNamedKw,
    #[token("short")]
    ShortKw,
    #[token("string")]
    StringKw,
    #[token("time")]
    TimeKw,
    #[token("year")]
    YearKw,

    // =========================================================================
    // CLAUSE KEYWORDS
    // =========================================================================
    #[token("additions")]
    AdditionsKw,
    #[token("based on")]
    BasedOnKw,
    #[token("big")]
    BigKw,
    #[token("allow primary key updates")]
    CascadeUpdateKw,
    #[token("core")]
    CoreKw,
    #[token("decimal places")]
    DecimalPlacesKw,
    #[token("deprecated")]
    DeprecatedKw,
    #[token("documentation")]
    DocumentationKw,
    #[token("extended documentation")]
    ExtendedDocumentationKw,
    #[token("footer documentation")]
    FooterDocumentationKw,
    #[token("is part of identity")]
    IdentityKw,
    #[token("renames identity property")]
    IdentityRenameKw,
    #[token("inherited")]
    InheritedKw,
    #[token("is queryable field")]
    IsQueryableFieldKw,
    #[token("is queryable only")]
    IsQueryableOnlyKw,
    #[token("is weak")]
    IsWeakReferenceKw,
    #[token("max length")]
    MaxLengthKw,
    #[token("max value")]
    MaxValueKw,
    #[token("merge")]
    MergeReferenceKw,
    #[token("min length")]
    MinLengthKw,
    #[token("min value")]
    MinValueKw,
    #[token("is optional")]
    OptionalKw,
    #[token("is optional collection")]
    OptionalCollectionKw,
    #[token("potentially logical")]
    PotentiallyLogicalKw,
    #[token("is required")]
    RequiredKw,
    #[token("is required collection")]
    RequiredCollectionKw,
    #[token("role name")]
    RoleNameKw,
    #[token("shorten to")]
    ShortenToKw,
    #[token("of")]
    SubdomainOfKw,
    #[token("position")]
    SubdomainPositionKw,
    #[token("total digits")]
    TotalDigitsKw,
    #[token("use case documentation")]
    UseCaseDocumentationKw,
    #[token("with")]
    WithKw,
    #[token("with map type")]
    WithMapTypeKw,
    #[token("with optional map type")]
    WithOptionalMapTypeKw,

    // =========================================================================
    // LEGACY RESERVED WORDS
    // =========================================================================
    #[token("Inline")]
    InlineKw,
    #[token("Type")]
    TypeKw,
    #[token("domain item")]
    DomainItemKw,
    #[token("element")]
    ElementKw,
    #[token("reference")]
    ReferenceKw,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia never reaches this conversion; map defensively anyway
            Whitespace | LineComment => TokenKind::Error,

            Id => TokenKind::Id,
            UnsignedInt => TokenKind::UnsignedInt,
            DecimalValue => TokenKind::DecimalValue,
            Text => TokenKind::Text,
            ModelId => TokenKind::ModelId,
            PosSign => TokenKind::PosSign,
            NegSign => TokenKind::NegSign,
            Period => TokenKind::Period,

            AbstractEntityKw => TokenKind::AbstractEntity,
            AssociationKw => TokenKind::Association,
            BeginNamespaceKw => TokenKind::BeginNamespace,
            EndNamespaceKw => TokenKind::EndNamespace,
            ChoiceKw => TokenKind::Choice,
            CommonKw => TokenKind::Common,
            DescriptorKw => TokenKind::Descriptor,
            DomainKw => TokenKind::Domain,
            DomainEntityKw => TokenKind::DomainEntity,
            EnumerationKw => TokenKind::Enumeration,
            InlineCommonKw => TokenKind::InlineCommon,
            InterchangeKw => TokenKind::Interchange,
            SharedDecimalKw => TokenKind::SharedDecimal,
            SharedIntegerKw => TokenKind::SharedInteger,
            SharedShortKw => TokenKind::SharedShort,
            SharedStringKw => TokenKind::SharedString,
            SubdomainKw => TokenKind::Subdomain,

            AssociationKeywordKw => TokenKind::AssociationKeyword,
            AssociationIdentityKw => TokenKind::AssociationIdentity,
            BooleanKw => TokenKind::Boolean,
            ChoiceKeywordKw => TokenKind::ChoiceKeyword,
            CommonKeywordKw => TokenKind::CommonKeyword,
            CommonExtensionKw => TokenKind::CommonExtension,
            CurrencyKw => TokenKind::Currency,
            DateKw => TokenKind::Date,
            DatetimeKw => TokenKind::Datetime,
            DecimalKw => TokenKind::Decimal,
            DescriptorKeywordKw => TokenKind::DescriptorKeyword,
            DomainEntityKeywordKw => TokenKind::DomainEntityKeyword,
            DomainEntityIdentityKw => TokenKind::DomainEntityIdentity,
            DurationKw => TokenKind::Duration,
            EnumerationKeywordKw => TokenKind::EnumerationKeyword,
            EnumerationItemKw => TokenKind::EnumerationItem,
            InlineCommonKeywordKw => TokenKind::InlineCommonKeyword,
            IntegerKw => TokenKind::Integer,
            PercentKw => TokenKind::Percent,
            SharedDecimalKeywordKw => TokenKind::SharedDecimalKeyword,
            SharedIntegerKeywordKw => TokenKind::SharedIntegerKeyword,
            SharedShortKeywordKw => TokenKind::SharedShortKeyword,
            SharedStringKeywordKw => TokenKind::SharedStringKeyword,
            SharedNamedKw => TokenKind::SharedNamed,
            ShortKw => TokenKind::Short,
            StringKw => TokenKind::String,
            TimeKw => TokenKind::Time,
            YearKw => TokenKind::Year,

            AdditionsKw => TokenKind::Additions,
            BasedOnKw => TokenKind::BasedOn,
            BigKw => TokenKind::Big,
            CascadeUpdateKw => TokenKind::CascadeUpdate,
            CoreKw => TokenKind::Core,
            DecimalPlacesKw => TokenKind::DecimalPlaces,
            DeprecatedKw => TokenKind::Deprecated,
            DocumentationKw => TokenKind::Documentation,
            ExtendedDocumentationKw => TokenKind::ExtendedDocumentation,
            FooterDocumentationKw => TokenKind::FooterDocumentation,
            IdentityKw => TokenKind::Identity,
            IdentityRenameKw => TokenKind::IdentityRename,
            InheritedKw => TokenKind::Inherited,
            IsQueryableFieldKw => TokenKind::IsQueryableField,
            IsQueryableOnlyKw => TokenKind::IsQueryableOnly,
            IsWeakReferenceKw => TokenKind::IsWeakReference,
            MaxLengthKw => TokenKind::MaxLength,
            MaxValueKw => TokenKind::MaxValue,
            MergeReferenceKw => TokenKind::MergeReference,
            MinLengthKw => TokenKind::MinLength,
            MinValueKw => TokenKind::MinValue,
            OptionalKw => TokenKind::Optional,
            OptionalCollectionKw => TokenKind::OptionalCollection,
            PotentiallyLogicalKw => TokenKind::PotentiallyLogical,
            RequiredKw => TokenKind::Required,
            RequiredCollectionKw => TokenKind::RequiredCollection,
            RoleNameKw => TokenKind::RoleName,
            ShortenToKw => TokenKind::ShortenTo,
            SubdomainOfKw => TokenKind::SubdomainOf,
            SubdomainPositionKw => TokenKind::SubdomainPosition,
            TotalDigitsKw => TokenKind::TotalDigits,
            UseCaseDocumentationKw => TokenKind::UseCaseDocumentation,
            WithKw => TokenKind::With,
            WithMapTypeKw => TokenKind::WithMapType,
            WithOptionalMapTypeKw => TokenKind::WithOptionalMapType,

            InlineKw => TokenKind::Inline,
            TypeKw => TokenKind::Type,
            DomainItemKw => TokenKind::DomainItem,
            ElementKw => TokenKind::Element,
            ReferenceKw => TokenKind::Reference,
        }
    }
}
