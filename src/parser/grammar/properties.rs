//! Property productions: the 23 property kinds, the shared components
//! block, role names, and merge directives.
//!
//! Every kind follows the same spine - keyword, name, optional model id,
//! components - and differs only in its trailing constraints. Clause order
//! is fixed; the parser does not reorder or forgive.

use super::*;

/// Alternative set shown when a property annotation was required.
pub(crate) const EXPECT_ANNOTATION: &str = "{'is part of identity', \
     'renames identity property', 'is required', 'is optional', 'is required collection', \
     'is optional collection', 'is queryable only'}";

// ============================================================================
// Dispatch
// ============================================================================

/// Property = one of the 23 kinds, selected by the leading keyword.
pub(crate) fn parse_property(p: &mut Parser) -> Option<Property> {
    match p.peek()? {
        TokenKind::AssociationKeyword => {
            parse_entity_reference_property(p).map(Property::Association)
        }
        TokenKind::Boolean => parse_simple_property(p).map(Property::Boolean),
        TokenKind::ChoiceKeyword => parse_reference_property(p, true).map(Property::Choice),
        TokenKind::CommonKeyword | TokenKind::CommonExtension => {
            parse_common_property(p).map(Property::Common)
        }
        TokenKind::Currency => parse_simple_property(p).map(Property::Currency),
        TokenKind::Date => parse_simple_property(p).map(Property::Date),
        TokenKind::Datetime => parse_simple_property(p).map(Property::Datetime),
        TokenKind::Decimal => parse_decimal_property(p).map(Property::Decimal),
        TokenKind::DescriptorKeyword => {
            parse_reference_property(p, false).map(Property::Descriptor)
        }
        TokenKind::DomainEntityKeyword => {
            parse_entity_reference_property(p).map(Property::DomainEntity)
        }
        TokenKind::Duration => parse_simple_property(p).map(Property::Duration),
        TokenKind::EnumerationKeyword => {
            parse_reference_property(p, false).map(Property::Enumeration)
        }
        TokenKind::InlineCommonKeyword => {
            parse_reference_property(p, true).map(Property::InlineCommon)
        }
        TokenKind::Integer => parse_integer_property(p).map(Property::Integer),
        TokenKind::Percent => parse_simple_property(p).map(Property::Percent),
        TokenKind::SharedDecimalKeyword => parse_shared_property(p).map(Property::SharedDecimal),
        TokenKind::SharedIntegerKeyword => parse_shared_property(p).map(Property::SharedInteger),
        TokenKind::SharedShortKeyword => parse_shared_property(p).map(Property::SharedShort),
        TokenKind::SharedStringKeyword => parse_shared_property(p).map(Property::SharedString),
        TokenKind::Short => parse_short_property(p).map(Property::Short),
        TokenKind::String => parse_string_property(p).map(Property::String),
        TokenKind::Time => parse_simple_property(p).map(Property::Time),
        TokenKind::Year => parse_simple_property(p).map(Property::Year),
        _ => None,
    }
}

// ============================================================================
// Components
// ============================================================================

/// PropertyComponents = Deprecated? PropertyDocumentation PropertyAnnotation
///                      RoleName? 'is queryable field'?
pub(crate) fn parse_property_components(p: &mut Parser) -> Option<PropertyComponents> {
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_property_documentation(p)?;
    let annotation = parse_property_annotation(p)?;
    let role_name = parse_role_name_opt(p)?;
    let is_queryable_field = p.eat(TokenKind::IsQueryableField);

    Some(PropertyComponents {
        deprecation,
        documentation,
        annotation,
        role_name,
        is_queryable_field,
    })
}

/// PropertyDocumentation = 'documentation' ('inherited' | TEXT)
pub(crate) fn parse_property_documentation(p: &mut Parser) -> Option<PropertyDocumentation> {
    p.expect(TokenKind::Documentation)?;
    if p.eat(TokenKind::Inherited) {
        Some(PropertyDocumentation::Inherited)
    } else if p.at(TokenKind::Text) {
        p.expect_text().map(PropertyDocumentation::Text)
    } else {
        p.error_expecting("{'inherited', TEXT}");
        None
    }
}

/// PropertyAnnotation = exactly one of the seven annotation keywords.
fn parse_property_annotation(p: &mut Parser) -> Option<PropertyAnnotation> {
    let annotation = match p.peek() {
        Some(TokenKind::Identity) => PropertyAnnotation::Identity,
        Some(TokenKind::IdentityRename) => {
            p.bump();
            let base_key_name = p.expect_id()?;
            return Some(PropertyAnnotation::IdentityRename { base_key_name });
        }
        Some(TokenKind::Required) => PropertyAnnotation::Required,
        Some(TokenKind::Optional) => PropertyAnnotation::Optional,
        Some(TokenKind::RequiredCollection) => PropertyAnnotation::RequiredCollection,
        Some(TokenKind::OptionalCollection) => PropertyAnnotation::OptionalCollection,
        Some(TokenKind::IsQueryableOnly) => PropertyAnnotation::QueryableOnly,
        _ => {
            p.error_expecting(EXPECT_ANNOTATION);
            return None;
        }
    };
    p.bump();
    Some(annotation)
}

/// RoleName = 'role name' ID ('shorten to' ID)?
pub(crate) fn parse_role_name_opt(p: &mut Parser) -> Option<Option<RoleName>> {
    if !p.eat(TokenKind::RoleName) {
        return Some(None);
    }
    let name = p.expect_id()?;
    let shorten_to = if p.eat(TokenKind::ShortenTo) {
        Some(p.expect_id()?)
    } else {
        None
    };
    Some(Some(RoleName { name, shorten_to }))
}

// ============================================================================
// Merge directives
// ============================================================================

/// MergeDirective* where MergeDirective = 'merge' PropertyPath 'with' PropertyPath
pub(crate) fn parse_merge_directives(p: &mut Parser) -> Option<Vec<MergeDirective>> {
    let mut directives = Vec::new();
    while p.eat(TokenKind::MergeReference) {
        let source = parse_property_path(p)?;
        p.expect(TokenKind::With)?;
        let target = parse_property_path(p)?;
        directives.push(MergeDirective { source, target });
    }
    Some(directives)
}

/// PropertyPath = ID ('.' ID)*
fn parse_property_path(p: &mut Parser) -> Option<PropertyPath> {
    let mut path = vec![p.expect_id()?];
    while p.eat(TokenKind::Period) {
        path.push(p.expect_id()?);
    }
    Some(path)
}

// ============================================================================
// Property kinds
// ============================================================================

/// The eight unconstrained kinds: bool, currency, date, datetime,
/// duration, percent, time, year.
fn parse_simple_property(p: &mut Parser) -> Option<SimpleProperty> {
    p.bump(); // kind keyword
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    Some(SimpleProperty {
        name,
        model_id,
        components,
    })
}

/// IntegerProperty = 'integer' ID MODEL_ID? Components MinValue? MaxValue?
fn parse_integer_property(p: &mut Parser) -> Option<IntegerProperty> {
    p.bump();
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let min_value = if p.eat(TokenKind::MinValue) {
        Some(parse_int_bound(p)?)
    } else {
        None
    };
    let max_value = if p.eat(TokenKind::MaxValue) {
        Some(parse_int_bound(p)?)
    } else {
        None
    };
    Some(IntegerProperty {
        name,
        model_id,
        components,
        min_value,
        max_value,
    })
}

/// ShortProperty - like integer, but the 'big' sentinel is not accepted.
fn parse_short_property(p: &mut Parser) -> Option<ShortProperty> {
    p.bump();
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let min_value = if p.eat(TokenKind::MinValue) {
        Some(parse_signed_int(p)?)
    } else {
        None
    };
    let max_value = if p.eat(TokenKind::MaxValue) {
        Some(parse_signed_int(p)?)
    } else {
        None
    };
    Some(ShortProperty {
        name,
        model_id,
        components,
        min_value,
        max_value,
    })
}

/// DecimalProperty = 'decimal' ID MODEL_ID? Components TotalDigits
///                   DecimalPlaces MinValueDecimal? MaxValueDecimal?
fn parse_decimal_property(p: &mut Parser) -> Option<DecimalProperty> {
    p.bump();
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let total_digits = parse_total_digits(p)?;
    let decimal_places = parse_decimal_places(p)?;
    let min_value = if p.eat(TokenKind::MinValue) {
        Some(parse_decimal_bound(p)?)
    } else {
        None
    };
    let max_value = if p.eat(TokenKind::MaxValue) {
        Some(parse_decimal_bound(p)?)
    } else {
        None
    };
    Some(DecimalProperty {
        name,
        model_id,
        components,
        total_digits,
        decimal_places,
        min_value,
        max_value,
    })
}

/// StringProperty = 'string' ID MODEL_ID? Components MinLength? MaxLength
fn parse_string_property(p: &mut Parser) -> Option<StringProperty> {
    p.bump();
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let min_length = if p.eat(TokenKind::MinLength) {
        Some(p.expect_unsigned()?)
    } else {
        None
    };
    p.expect(TokenKind::MaxLength)?;
    let max_length = p.expect_unsigned()?;
    Some(StringProperty {
        name,
        model_id,
        components,
        min_length,
        max_length,
    })
}

/// The reference kinds without extra markers: enumeration, descriptor,
/// choice, inline common. Only the latter two accept merge directives.
fn parse_reference_property(p: &mut Parser, allow_merges: bool) -> Option<ReferenceProperty> {
    p.bump();
    let target = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let merge_directives = if allow_merges {
        parse_merge_directives(p)?
    } else {
        Vec::new()
    };
    Some(ReferenceProperty {
        target,
        model_id,
        components,
        merge_directives,
    })
}

/// CommonProperty = ('common' | 'common extension') QualifiedName MODEL_ID?
///                  Components MergeDirective*
fn parse_common_property(p: &mut Parser) -> Option<CommonProperty> {
    let extension_override = p.at(TokenKind::CommonExtension);
    p.bump();
    let target = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let merge_directives = parse_merge_directives(p)?;
    Some(CommonProperty {
        target,
        extension_override,
        model_id,
        components,
        merge_directives,
    })
}

/// AssociationProperty / DomainEntityProperty = keyword QualifiedName
/// MODEL_ID? Components 'potentially logical'? 'is weak'? MergeDirective*
fn parse_entity_reference_property(p: &mut Parser) -> Option<EntityReferenceProperty> {
    p.bump();
    let target = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let potentially_logical = p.eat(TokenKind::PotentiallyLogical);
    let is_weak = p.eat(TokenKind::IsWeakReference);
    let merge_directives = parse_merge_directives(p)?;
    Some(EntityReferenceProperty {
        target,
        model_id,
        components,
        potentially_logical,
        is_weak,
        merge_directives,
    })
}

/// SharedProperty = keyword QualifiedName ('named' ID)? MODEL_ID?
///                  Components MergeDirective*
fn parse_shared_property(p: &mut Parser) -> Option<SharedProperty> {
    p.bump();
    let target = parse_qualified_ref(p)?;
    let local_name = if p.eat(TokenKind::SharedNamed) {
        Some(p.expect_id()?)
    } else {
        None
    };
    let model_id = p.model_id_opt();
    let components = parse_property_components(p)?;
    let merge_directives = parse_merge_directives(p)?;
    Some(SharedProperty {
        target,
        local_name,
        model_id,
        components,
        merge_directives,
    })
}

// ============================================================================
// Property bodies
// ============================================================================

/// Property+ - at least one property; zero yields a diagnostic and an
/// empty list, never a silently accepted empty body.
pub(crate) fn parse_properties_one_or_more(p: &mut Parser) -> Vec<Property> {
    let properties = parse_properties_zero_or_more(p);
    if properties.is_empty() {
        p.error_expecting(EXPECT_PROPERTY);
    }
    properties
}

/// Property* - a failed property resynchronizes to the next property or
/// top-level boundary, so later siblings still parse.
pub(crate) fn parse_properties_zero_or_more(p: &mut Parser) -> Vec<Property> {
    let mut properties = Vec::new();
    while p.peek().is_some_and(|kind| kind.starts_property()) {
        let pos_before = p.pos();
        match parse_property(p) {
            Some(property) => properties.push(property),
            None => p.recover(|kind| kind.starts_property()),
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.pos() == pos_before {
            p.bump();
        }
    }
    properties
}
