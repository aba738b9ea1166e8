//! Grammar productions for the EdModel DSL, organized by construct family:
//! - `entities` - the property-bearing entity families, shared simple
//!   types, descriptors, and enumerations
//! - `references` - domains, subdomains, and interchanges (the families
//!   built from referencable items)
//! - `properties` - the 23 property kinds and their shared components
//!
//! Each production is a free function over [`Parser`]. Dispatch at choice
//! points inspects one or two tokens (three across an optional namespace
//! qualifier) and never backtracks. A production that cannot complete
//! returns `None` after reporting a diagnostic; the caller resynchronizes
//! through [`Parser::recover`].

pub(crate) mod entities;
pub(crate) mod properties;
pub(crate) mod references;

// Shared imports, pub(super) so submodules get them via `use super::*;`
pub(super) use smol_str::SmolStr;

pub(super) use super::ast::*;
pub(super) use super::parser::Parser;
pub(super) use super::token_kind::TokenKind;

/// Alternative set shown when a top-level entity keyword was required,
/// in the wording and order diagnostics have always used.
pub(crate) const EXPECT_TOP_LEVEL: &str = "{'Abstract Entity', 'Association', 'Choice', 'Common', \
     'Descriptor', 'Domain', 'Domain Entity', 'Enumeration', 'Interchange', 'Inline Common', \
     'Shared Decimal', 'Shared Integer', 'Shared Short', 'Shared String', 'Subdomain'}";

/// Alternative set shown when a property keyword was required.
pub(crate) const EXPECT_PROPERTY: &str = "{'association', 'bool', 'choice', 'common', \
     'common extension', 'currency', 'date', 'datetime', 'decimal', 'descriptor', \
     'domain entity', 'duration', 'enumeration', 'inline common', 'integer', 'percent', \
     'shared decimal', 'shared integer', 'shared short', 'shared string', 'short', 'string', \
     'time', 'year'}";

// ============================================================================
// Source unit and namespaces
// ============================================================================

/// Source = Namespace+
pub(crate) fn parse_source_unit(p: &mut Parser) -> Vec<Namespace> {
    let mut namespaces = Vec::new();

    while !p.at_eof() {
        let pos_before = p.pos();
        if p.at(TokenKind::BeginNamespace) {
            namespaces.push(parse_namespace(p));
        } else {
            p.error_expecting(TokenKind::BeginNamespace.display());
            p.skip_until(|kind| kind == TokenKind::BeginNamespace);
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.pos() == pos_before && !p.at_eof() {
            p.bump();
        }
    }

    if namespaces.is_empty() {
        p.error_expecting(TokenKind::BeginNamespace.display());
    }

    namespaces
}

/// Namespace = 'Begin Namespace' ID ('core' | ID) TopLevelEntity+ 'End Namespace'
fn parse_namespace(p: &mut Parser) -> Namespace {
    p.bump(); // 'Begin Namespace'

    let name = p.expect_id().unwrap_or_default();
    let kind = if p.eat(TokenKind::Core) {
        NamespaceKind::Core
    } else if p.at(TokenKind::Id) {
        NamespaceKind::Extension(p.expect_id().unwrap_or_default())
    } else {
        p.error_expecting("{'core', ID}");
        NamespaceKind::Core
    };

    let mut entities = Vec::new();
    loop {
        match p.peek() {
            None | Some(TokenKind::EndNamespace) | Some(TokenKind::BeginNamespace) => break,
            Some(kind) if kind.starts_top_level_entity() => {
                let pos_before = p.pos();
                match parse_top_level_entity(p) {
                    Some(entity) => entities.push(entity),
                    None => p.recover_to_top_level(),
                }
                // Safety: if we didn't make progress, force-skip a token
                if p.pos() == pos_before {
                    p.bump();
                }
            }
            Some(_) => {
                p.error_expecting(EXPECT_TOP_LEVEL);
                p.recover_to_top_level();
            }
        }
    }

    if entities.is_empty() {
        p.error_expecting(EXPECT_TOP_LEVEL);
    }

    p.expect(TokenKind::EndNamespace);

    Namespace {
        name,
        kind,
        entities,
    }
}

// ============================================================================
// Top-level entity dispatch
// ============================================================================

/// Select the entity production from the leading keyword. `Association`,
/// `Common`, `Domain Entity`, and `Interchange` need the token after the
/// (possibly namespace-qualified) leading name to separate the plain form
/// from `additions` extensions and `based on` subclasses.
fn parse_top_level_entity(p: &mut Parser) -> Option<TopLevelEntity> {
    match p.peek()? {
        TokenKind::AbstractEntity => {
            entities::parse_abstract_entity(p).map(TopLevelEntity::AbstractEntity)
        }
        TokenKind::Association => match token_after_leading_name(p) {
            Some(TokenKind::Additions) => {
                entities::parse_association_extension(p).map(TopLevelEntity::AssociationExtension)
            }
            Some(TokenKind::BasedOn) => {
                entities::parse_association_subclass(p).map(TopLevelEntity::AssociationSubclass)
            }
            _ => entities::parse_association(p).map(TopLevelEntity::Association),
        },
        TokenKind::Choice => entities::parse_choice(p).map(TopLevelEntity::Choice),
        TokenKind::Common => match token_after_leading_name(p) {
            Some(TokenKind::Additions) => {
                entities::parse_common_extension(p).map(TopLevelEntity::CommonExtension)
            }
            Some(TokenKind::BasedOn) => {
                entities::parse_common_subclass(p).map(TopLevelEntity::CommonSubclass)
            }
            _ => entities::parse_common(p).map(TopLevelEntity::Common),
        },
        TokenKind::Descriptor => entities::parse_descriptor(p).map(TopLevelEntity::Descriptor),
        TokenKind::Domain => references::parse_domain(p).map(TopLevelEntity::Domain),
        TokenKind::DomainEntity => match token_after_leading_name(p) {
            Some(TokenKind::Additions) => entities::parse_domain_entity_extension(p)
                .map(TopLevelEntity::DomainEntityExtension),
            Some(TokenKind::BasedOn) => {
                entities::parse_domain_entity_subclass(p).map(TopLevelEntity::DomainEntitySubclass)
            }
            _ => entities::parse_domain_entity(p).map(TopLevelEntity::DomainEntity),
        },
        TokenKind::Enumeration => entities::parse_enumeration(p).map(TopLevelEntity::Enumeration),
        TokenKind::InlineCommon => {
            entities::parse_inline_common(p).map(TopLevelEntity::InlineCommon)
        }
        TokenKind::Interchange => match token_after_leading_name(p) {
            Some(TokenKind::Additions) => references::parse_interchange_extension(p)
                .map(TopLevelEntity::InterchangeExtension),
            _ => references::parse_interchange(p).map(TopLevelEntity::Interchange),
        },
        TokenKind::SharedDecimal => {
            entities::parse_shared_decimal(p).map(TopLevelEntity::SharedDecimal)
        }
        TokenKind::SharedInteger => {
            entities::parse_shared_integer(p).map(TopLevelEntity::SharedInteger)
        }
        TokenKind::SharedShort => entities::parse_shared_short(p).map(TopLevelEntity::SharedShort),
        TokenKind::SharedString => {
            entities::parse_shared_string(p).map(TopLevelEntity::SharedString)
        }
        TokenKind::Subdomain => references::parse_subdomain(p).map(TopLevelEntity::Subdomain),
        _ => None,
    }
}

/// Lookahead past the entity keyword and the leading (possibly qualified)
/// name: returns the token that decides between the plain, `additions`,
/// and `based on` forms.
fn token_after_leading_name(p: &Parser) -> Option<TokenKind> {
    let mut n = 1;
    if p.nth(n) == Some(TokenKind::Id) {
        n += 1;
        if p.nth(n) == Some(TokenKind::Period) && p.nth(n + 1) == Some(TokenKind::Id) {
            n += 2;
        }
    }
    p.nth(n)
}

// ============================================================================
// Shared clause helpers
// ============================================================================

/// QualifiedName = (ID '.')? ID
pub(crate) fn parse_qualified_ref(p: &mut Parser) -> Option<QualifiedRef> {
    if p.at(TokenKind::Id)
        && p.nth(1) == Some(TokenKind::Period)
        && p.nth(2) == Some(TokenKind::Id)
    {
        let namespace = p.expect_id();
        p.bump(); // '.'
        let name = p.expect_id()?;
        Some(QualifiedRef {
            namespace,
            name,
        })
    } else {
        p.expect_id().map(QualifiedRef::local)
    }
}

/// Deprecated = 'deprecated' TEXT
pub(crate) fn parse_deprecated_opt(p: &mut Parser) -> Option<Option<String>> {
    if p.eat(TokenKind::Deprecated) {
        p.expect_text().map(Some)
    } else {
        Some(None)
    }
}

/// Documentation = 'documentation' TEXT
pub(crate) fn parse_documentation(p: &mut Parser) -> Option<String> {
    p.expect(TokenKind::Documentation)?;
    p.expect_text()
}

/// SignedInt = ('+' | '-')? UNSIGNED_INT
pub(crate) fn parse_signed_int(p: &mut Parser) -> Option<i64> {
    let negative = if p.eat(TokenKind::NegSign) {
        true
    } else {
        p.eat(TokenKind::PosSign);
        false
    };
    let magnitude = p.expect_unsigned()? as i64;
    Some(if negative { -magnitude } else { magnitude })
}

/// IntBound = SignedInt | 'big'
pub(crate) fn parse_int_bound(p: &mut Parser) -> Option<IntBound> {
    if p.eat(TokenKind::Big) {
        Some(IntBound::Big)
    } else {
        parse_signed_int(p).map(IntBound::Value)
    }
}

/// DecimalBound = DECIMAL_VALUE | SignedInt, kept in source spelling.
pub(crate) fn parse_decimal_bound(p: &mut Parser) -> Option<SmolStr> {
    if p.at(TokenKind::DecimalValue) {
        return p.bump().map(|t| SmolStr::new(t.text));
    }
    let value = parse_signed_int(p)?;
    Some(SmolStr::new(value.to_string()))
}

/// TotalDigits = 'total digits' UNSIGNED_INT
pub(crate) fn parse_total_digits(p: &mut Parser) -> Option<u32> {
    p.expect(TokenKind::TotalDigits)?;
    p.expect_unsigned()
}

/// DecimalPlaces = 'decimal places' UNSIGNED_INT
pub(crate) fn parse_decimal_places(p: &mut Parser) -> Option<u32> {
    p.expect(TokenKind::DecimalPlaces)?;
    p.expect_unsigned()
}
