//! Productions for the property-bearing entity families, the shared simple
//! types, descriptors, and enumerations.
//!
//! Every family opens the same way - keyword, name, optional model id,
//! optional deprecation, documentation - and the extension variants drop
//! the documentation clause. Failure anywhere returns `None`; the
//! top-level dispatch resynchronizes and the construct is discarded.

use super::properties::{
    parse_merge_directives, parse_properties_one_or_more, parse_properties_zero_or_more,
    parse_property_documentation, parse_role_name_opt,
};
use super::*;

/// The shared opening of non-extension entities.
struct EntityHeader {
    name: SmolStr,
    model_id: Option<SmolStr>,
    deprecation: Option<String>,
    documentation: String,
}

/// ID MODEL_ID? Deprecated? Documentation
fn parse_entity_header(p: &mut Parser) -> Option<EntityHeader> {
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_documentation(p)?;
    Some(EntityHeader {
        name,
        model_id,
        deprecation,
        documentation,
    })
}

/// QualifiedName 'additions' MODEL_ID? Deprecated? - the opening shared by
/// every `additions` extension form.
struct ExtensionHeader {
    base: QualifiedRef,
    model_id: Option<SmolStr>,
    deprecation: Option<String>,
}

fn parse_extension_header(p: &mut Parser) -> Option<ExtensionHeader> {
    let base = parse_qualified_ref(p)?;
    p.expect(TokenKind::Additions)?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    Some(ExtensionHeader {
        base,
        model_id,
        deprecation,
    })
}

/// ID 'based on' QualifiedName MODEL_ID? Deprecated? Documentation
struct SubclassHeader {
    name: SmolStr,
    base: QualifiedRef,
    model_id: Option<SmolStr>,
    deprecation: Option<String>,
    documentation: String,
}

fn parse_subclass_header(p: &mut Parser) -> Option<SubclassHeader> {
    let name = p.expect_id()?;
    p.expect(TokenKind::BasedOn)?;
    let base = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_documentation(p)?;
    Some(SubclassHeader {
        name,
        base,
        model_id,
        deprecation,
        documentation,
    })
}

// ============================================================================
// Abstract entities and domain entities
// ============================================================================

/// AbstractEntity = 'Abstract Entity' Header Property+
pub(crate) fn parse_abstract_entity(p: &mut Parser) -> Option<AbstractEntity> {
    p.bump();
    let header = parse_entity_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(AbstractEntity {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

/// DomainEntity = 'Domain Entity' Header CascadeUpdate? Property+
pub(crate) fn parse_domain_entity(p: &mut Parser) -> Option<DomainEntity> {
    p.bump();
    let header = parse_entity_header(p)?;
    let allow_primary_key_updates = p.eat(TokenKind::CascadeUpdate);
    let properties = parse_properties_one_or_more(p);
    Some(DomainEntity {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        allow_primary_key_updates,
        properties,
    })
}

/// DomainEntityExtension = 'Domain Entity' ExtensionHeader Property+
pub(crate) fn parse_domain_entity_extension(p: &mut Parser) -> Option<DomainEntityExtension> {
    p.bump();
    let header = parse_extension_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(DomainEntityExtension {
        base: header.base,
        model_id: header.model_id,
        deprecation: header.deprecation,
        properties,
    })
}

/// DomainEntitySubclass = 'Domain Entity' SubclassHeader Property+
pub(crate) fn parse_domain_entity_subclass(p: &mut Parser) -> Option<DomainEntitySubclass> {
    p.bump();
    let header = parse_subclass_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(DomainEntitySubclass {
        name: header.name,
        base: header.base,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

// ============================================================================
// Associations
// ============================================================================

/// Association = 'Association' Header CascadeUpdate?
///               DefiningDomainEntity DefiningDomainEntity Property*
pub(crate) fn parse_association(p: &mut Parser) -> Option<Association> {
    p.bump();
    let header = parse_entity_header(p)?;
    let allow_primary_key_updates = p.eat(TokenKind::CascadeUpdate);
    let first_entity = parse_defining_domain_entity(p)?;
    let second_entity = parse_defining_domain_entity(p)?;
    let properties = parse_properties_zero_or_more(p);
    Some(Association {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        allow_primary_key_updates,
        first_entity,
        second_entity,
        properties,
    })
}

/// DefiningDomainEntity = 'domain entity' QualifiedName MODEL_ID?
///                        Deprecated? PropertyDocumentation RoleName?
///                        MergeDirective*
fn parse_defining_domain_entity(p: &mut Parser) -> Option<DefiningDomainEntity> {
    p.expect(TokenKind::DomainEntityKeyword)?;
    let entity = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_property_documentation(p)?;
    let role_name = parse_role_name_opt(p)?;
    let merge_directives = parse_merge_directives(p)?;
    Some(DefiningDomainEntity {
        entity,
        model_id,
        deprecation,
        documentation,
        role_name,
        merge_directives,
    })
}

/// AssociationExtension = 'Association' ExtensionHeader Property+
pub(crate) fn parse_association_extension(p: &mut Parser) -> Option<AssociationExtension> {
    p.bump();
    let header = parse_extension_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(AssociationExtension {
        base: header.base,
        model_id: header.model_id,
        deprecation: header.deprecation,
        properties,
    })
}

/// AssociationSubclass = 'Association' SubclassHeader Property+
pub(crate) fn parse_association_subclass(p: &mut Parser) -> Option<AssociationSubclass> {
    p.bump();
    let header = parse_subclass_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(AssociationSubclass {
        name: header.name,
        base: header.base,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

// ============================================================================
// Choices and commons
// ============================================================================

/// Choice = 'Choice' Header Property+
pub(crate) fn parse_choice(p: &mut Parser) -> Option<Choice> {
    p.bump();
    let header = parse_entity_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(Choice {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

/// Common = 'Common' Header Property+
pub(crate) fn parse_common(p: &mut Parser) -> Option<Common> {
    p.bump();
    let header = parse_entity_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(Common {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

/// CommonExtension = 'Common' ExtensionHeader Property+
pub(crate) fn parse_common_extension(p: &mut Parser) -> Option<CommonExtension> {
    p.bump();
    let header = parse_extension_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(CommonExtension {
        base: header.base,
        model_id: header.model_id,
        deprecation: header.deprecation,
        properties,
    })
}

/// CommonSubclass = 'Common' SubclassHeader Property+
pub(crate) fn parse_common_subclass(p: &mut Parser) -> Option<CommonSubclass> {
    p.bump();
    let header = parse_subclass_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(CommonSubclass {
        name: header.name,
        base: header.base,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

/// InlineCommon = 'Inline Common' Header Property+
pub(crate) fn parse_inline_common(p: &mut Parser) -> Option<InlineCommon> {
    p.bump();
    let header = parse_entity_header(p)?;
    let properties = parse_properties_one_or_more(p);
    Some(InlineCommon {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
    })
}

// ============================================================================
// Descriptors and enumerations
// ============================================================================

/// Descriptor = 'Descriptor' Header Property* WithMapType?
pub(crate) fn parse_descriptor(p: &mut Parser) -> Option<Descriptor> {
    p.bump();
    let header = parse_entity_header(p)?;
    let properties = parse_properties_zero_or_more(p);
    let map_type = if p.at(TokenKind::WithMapType) || p.at(TokenKind::WithOptionalMapType) {
        Some(parse_with_map_type(p)?)
    } else {
        None
    };
    Some(Descriptor {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        properties,
        map_type,
    })
}

/// WithMapType = ('with map type' | 'with optional map type')
///               Documentation EnumerationItem+
fn parse_with_map_type(p: &mut Parser) -> Option<MapType> {
    let required = p.at(TokenKind::WithMapType);
    p.bump();
    let documentation = parse_documentation(p)?;
    let items = parse_enumeration_items(p);
    Some(MapType {
        required,
        documentation,
        items,
    })
}

/// Enumeration = 'Enumeration' Header EnumerationItem+
pub(crate) fn parse_enumeration(p: &mut Parser) -> Option<Enumeration> {
    p.bump();
    let header = parse_entity_header(p)?;
    let items = parse_enumeration_items(p);
    Some(Enumeration {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        items,
    })
}

/// EnumerationItem+ - zero items yields a diagnostic and an empty list.
fn parse_enumeration_items(p: &mut Parser) -> Vec<EnumerationItem> {
    let mut items = Vec::new();
    while p.at(TokenKind::EnumerationItem) {
        let pos_before = p.pos();
        match parse_enumeration_item(p) {
            Some(item) => items.push(item),
            None => p.recover(|kind| kind == TokenKind::EnumerationItem),
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.pos() == pos_before {
            p.bump();
        }
    }
    if items.is_empty() {
        p.error_expecting(TokenKind::EnumerationItem.display());
    }
    items
}

/// EnumerationItem = 'item' TEXT MODEL_ID? Documentation?
fn parse_enumeration_item(p: &mut Parser) -> Option<EnumerationItem> {
    p.bump();
    let short_description = p.expect_text()?;
    let model_id = p.model_id_opt();
    let documentation = if p.at(TokenKind::Documentation) {
        Some(parse_documentation(p)?)
    } else {
        None
    };
    Some(EnumerationItem {
        short_description,
        model_id,
        documentation,
    })
}

// ============================================================================
// Shared simple types
// ============================================================================

/// SharedDecimal = 'Shared Decimal' Header TotalDigits DecimalPlaces
///                 MinValueDecimal? MaxValueDecimal?
pub(crate) fn parse_shared_decimal(p: &mut Parser) -> Option<SharedDecimal> {
    p.bump();
    let header = parse_entity_header(p)?;
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
    Some(SharedDecimal {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        total_digits,
        decimal_places,
        min_value,
        max_value,
    })
}

/// SharedInteger = 'Shared Integer' Header MinValue? MaxValue?
pub(crate) fn parse_shared_integer(p: &mut Parser) -> Option<SharedInteger> {
    p.bump();
    let header = parse_entity_header(p)?;
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
    Some(SharedInteger {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        min_value,
        max_value,
    })
}

/// SharedShort = 'Shared Short' Header MinValueShort? MaxValueShort?
pub(crate) fn parse_shared_short(p: &mut Parser) -> Option<SharedShort> {
    p.bump();
    let header = parse_entity_header(p)?;
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
    Some(SharedShort {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        min_value,
        max_value,
    })
}

/// SharedString = 'Shared String' Header MinLength? MaxLength
pub(crate) fn parse_shared_string(p: &mut Parser) -> Option<SharedString> {
    p.bump();
    let header = parse_entity_header(p)?;
    let min_length = if p.eat(TokenKind::MinLength) {
        Some(p.expect_unsigned()?)
    } else {
        None
    };
    p.expect(TokenKind::MaxLength)?;
    let max_length = p.expect_unsigned()?;
    Some(SharedString {
        name: header.name,
        model_id: header.model_id,
        deprecation: header.deprecation,
        documentation: header.documentation,
        min_length,
        max_length,
    })
}
