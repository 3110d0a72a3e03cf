//! `sdo:`: schema.org.
//!
//! Only the terms used by the organisation and person mappings are listed;
//! use [`NAMESPACE`]`.term(..)` for anything else.

use super::Namespace;
use crate::model::iris;
use crate::model::Iri;

/// The `sdo:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "sdo",
    iri: iris::SDO,
};

/// `sdo:Person`.
pub const PERSON: Iri = Iri::from_static("https://schema.org/Person");
/// `sdo:Organization`.
pub const ORGANIZATION: Iri = Iri::from_static("https://schema.org/Organization");
/// `sdo:ContactPoint`.
pub const CONTACT_POINT: Iri = Iri::from_static("https://schema.org/ContactPoint");
/// `sdo:name`.
pub const NAME: Iri = Iri::from_static("https://schema.org/name");
/// `sdo:alternateName`.
pub const ALTERNATE_NAME: Iri = Iri::from_static("https://schema.org/alternateName");
/// `sdo:description`.
pub const DESCRIPTION: Iri = Iri::from_static("https://schema.org/description");
/// `sdo:identifier`.
pub const IDENTIFIER: Iri = Iri::from_static("https://schema.org/identifier");
/// `sdo:email`.
pub const EMAIL: Iri = Iri::from_static("https://schema.org/email");
/// `sdo:url`.
pub const URL: Iri = Iri::from_static("https://schema.org/url");
/// `sdo:logo`.
pub const LOGO: Iri = Iri::from_static("https://schema.org/logo");
/// `sdo:contactPoint`.
pub const HAS_CONTACT_POINT: Iri = Iri::from_static("https://schema.org/contactPoint");
