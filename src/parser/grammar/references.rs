//! Productions for the families built from referencable items: domains,
//! subdomains, and interchanges.
//!
//! A referencable item names another entity by family keyword, an optional
//! explicit namespace qualifier, a local name, and an optional model id.
//! The shape is identical across all three families; only the allowed
//! keyword sets differ.

use super::*;

/// Alternative set shown when a domain item keyword was required.
pub(crate) const EXPECT_DOMAIN_ITEM: &str =
    "{'association', 'common', 'descriptor', 'domain entity', 'inline common'}";

/// Alternative set shown when an interchange element was required.
pub(crate) const EXPECT_INTERCHANGE_ELEMENT: &str =
    "{'association', 'descriptor', 'domain entity'}";

/// Alternative set shown when any interchange item was required.
pub(crate) const EXPECT_INTERCHANGE_ITEM: &str = "{'association', 'association identity', \
     'descriptor', 'domain entity', 'domain entity identity'}";

// ============================================================================
// Domains
// ============================================================================

/// Domain = 'Domain' ID MODEL_ID? Deprecated? Documentation DomainItem+
///          FooterDocumentation?
pub(crate) fn parse_domain(p: &mut Parser) -> Option<Domain> {
    p.bump();
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_documentation(p)?;
    let items = parse_domain_items(p);
    let footer_documentation = if p.eat(TokenKind::FooterDocumentation) {
        Some(p.expect_text()?)
    } else {
        None
    };
    Some(Domain {
        name,
        model_id,
        deprecation,
        documentation,
        items,
        footer_documentation,
    })
}

/// Subdomain = 'Subdomain' ID 'of' ID MODEL_ID? Deprecated? Documentation
///             DomainItem+ ('position' UNSIGNED_INT)?
pub(crate) fn parse_subdomain(p: &mut Parser) -> Option<Subdomain> {
    p.bump();
    let name = p.expect_id()?;
    p.expect(TokenKind::SubdomainOf)?;
    let parent = p.expect_id()?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_documentation(p)?;
    let items = parse_domain_items(p);
    let position = if p.eat(TokenKind::SubdomainPosition) {
        Some(p.expect_unsigned()?)
    } else {
        None
    };
    Some(Subdomain {
        name,
        parent,
        model_id,
        deprecation,
        documentation,
        items,
        position,
    })
}

/// DomainItem+ - zero items yields a diagnostic and an empty list.
fn parse_domain_items(p: &mut Parser) -> Vec<EntityRef> {
    let mut items = Vec::new();
    while p.peek().is_some_and(|kind| kind.starts_domain_item()) {
        let pos_before = p.pos();
        match parse_domain_item(p) {
            Some(item) => items.push(item),
            None => p.recover(|kind| kind.starts_domain_item()),
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.pos() == pos_before {
            p.bump();
        }
    }
    if items.is_empty() {
        p.error_expecting(EXPECT_DOMAIN_ITEM);
    }
    items
}

/// DomainItem = keyword QualifiedName MODEL_ID?
fn parse_domain_item(p: &mut Parser) -> Option<EntityRef> {
    let kind = match p.peek()? {
        TokenKind::AssociationKeyword => RefKind::Association,
        TokenKind::CommonKeyword => RefKind::Common,
        TokenKind::DescriptorKeyword => RefKind::Descriptor,
        TokenKind::DomainEntityKeyword => RefKind::DomainEntity,
        TokenKind::InlineCommonKeyword => RefKind::InlineCommon,
        _ => return None,
    };
    p.bump();
    let target = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    Some(EntityRef {
        kind,
        namespace: target.namespace,
        name: target.name,
        model_id,
    })
}

// ============================================================================
// Interchanges
// ============================================================================

/// Interchange = 'Interchange' ID MODEL_ID? Deprecated? Documentation
///               ExtendedDocumentation? UseCaseDocumentation?
///               InterchangeIdentity* InterchangeElement
///               (InterchangeElement | InterchangeIdentity)*
pub(crate) fn parse_interchange(p: &mut Parser) -> Option<Interchange> {
    p.bump();
    let name = p.expect_id()?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;
    let documentation = parse_documentation(p)?;
    let extended_documentation = if p.eat(TokenKind::ExtendedDocumentation) {
        Some(p.expect_text()?)
    } else {
        None
    };
    let use_case_documentation = if p.eat(TokenKind::UseCaseDocumentation) {
        Some(p.expect_text()?)
    } else {
        None
    };

    let items = parse_interchange_items(p);
    // Identities may precede or interleave, but at least one element
    // reference is required for the base form
    if !items
        .iter()
        .any(|item| matches!(item, InterchangeItem::Element(_)))
    {
        p.error_expecting(EXPECT_INTERCHANGE_ELEMENT);
    }

    Some(Interchange {
        name,
        model_id,
        deprecation,
        documentation,
        extended_documentation,
        use_case_documentation,
        items,
    })
}

/// InterchangeExtension = 'Interchange' QualifiedName 'additions' MODEL_ID?
///                        Deprecated? (InterchangeElement | InterchangeIdentity)+
pub(crate) fn parse_interchange_extension(p: &mut Parser) -> Option<InterchangeExtension> {
    p.bump();
    let base = parse_qualified_ref(p)?;
    p.expect(TokenKind::Additions)?;
    let model_id = p.model_id_opt();
    let deprecation = parse_deprecated_opt(p)?;

    let items = parse_interchange_items(p);
    if items.is_empty() {
        p.error_expecting(EXPECT_INTERCHANGE_ITEM);
    }

    Some(InterchangeExtension {
        base,
        model_id,
        deprecation,
        items,
    })
}

/// (InterchangeElement | InterchangeIdentity)* in source order - the
/// interleave is preserved exactly as written.
fn parse_interchange_items(p: &mut Parser) -> Vec<InterchangeItem> {
    let mut items = Vec::new();
    while p.peek().is_some_and(|kind| kind.starts_interchange_item()) {
        let pos_before = p.pos();
        match parse_interchange_item(p) {
            Some(item) => items.push(item),
            None => p.recover(|kind| kind.starts_interchange_item()),
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.pos() == pos_before {
            p.bump();
        }
    }
    items
}

/// InterchangeElement  = ('association' | 'descriptor' | 'domain entity') ...
/// InterchangeIdentity = ('association identity' | 'domain entity identity') ...
fn parse_interchange_item(p: &mut Parser) -> Option<InterchangeItem> {
    let (identity, kind) = match p.peek()? {
        TokenKind::AssociationKeyword => (false, RefKind::Association),
        TokenKind::DescriptorKeyword => (false, RefKind::Descriptor),
        TokenKind::DomainEntityKeyword => (false, RefKind::DomainEntity),
        TokenKind::AssociationIdentity => (true, RefKind::Association),
        TokenKind::DomainEntityIdentity => (true, RefKind::DomainEntity),
        _ => return None,
    };
    p.bump();
    let target = parse_qualified_ref(p)?;
    let model_id = p.model_id_opt();
    let entity_ref = EntityRef {
        kind,
        namespace: target.namespace,
        name: target.name,
        model_id,
    };
    Some(if identity {
        InterchangeItem::Identity(entity_ref)
    } else {
        InterchangeItem::Element(entity_ref)
    })
}
