//! Turtle and N-Triples parsing, backed by `sophia_turtle`.

use sophia_api::source::TripleSource;
use sophia_api::term::SimpleTerm;
use sophia_turtle::parser::{nt, turtle};

use crate::error::RdfError;
use crate::model::{BlankNode, Iri, Literal, Node, Triple};
use crate::serializer::Format;

type RawGraph = Vec<[SimpleTerm<'static>; 3]>;

/// Parses `text` in the given syntax into triples, in document order.
///
/// # Errors
///
/// Returns [`RdfError::Syntax`] if the text is malformed, or
/// [`RdfError::UnsupportedTerm`] for quoted triples and variables.
pub fn parse(text: &str, format: Format) -> Result<Vec<Triple>, RdfError> {
    let raw = match format {
        Format::Turtle => turtle::parse_str(text)
            .collect_triples::<RawGraph>()
            .map_err(|e| RdfError::Syntax(e.to_string()))?,
        Format::NTriples => nt::parse_str(text)
            .collect_triples::<RawGraph>()
            .map_err(|e| RdfError::Syntax(e.to_string()))?,
    };

    raw.iter()
        .map(|[s, p, o]| {
            let predicate = match convert(p)? {
                Node::Iri(iri) => iri,
                other => {
                    return Err(RdfError::UnsupportedTerm(format!(
                        "{} in predicate position",
                        other.kind()
                    )))
                }
            };
            Ok(Triple {
                subject: convert(s)?,
                predicate,
                object: convert(o)?,
            })
        })
        .collect()
}

/// Parses a Turtle document.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_turtle(text: &str) -> Result<Vec<Triple>, RdfError> {
    parse(text, Format::Turtle)
}

fn convert(term: &SimpleTerm<'_>) -> Result<Node, RdfError> {
    match term {
        SimpleTerm::Iri(iri) => Ok(Node::Iri(Iri::new(iri.as_str()))),
        SimpleTerm::BlankNode(id) => Ok(Node::Blank(BlankNode::new(id.as_str()))),
        SimpleTerm::LiteralDatatype(lex, dt) => Ok(Node::Literal(Literal::typed(
            lex.to_string(),
            Iri::new(dt.as_str()),
        ))),
        SimpleTerm::LiteralLanguage(lex, tag) => {
            Ok(Node::Literal(Literal::lang(lex.to_string(), tag.as_str())))
        }
        SimpleTerm::Triple(_) => Err(RdfError::UnsupportedTerm("quoted triple".into())),
        SimpleTerm::Variable(v) => Err(RdfError::UnsupportedTerm(format!(
            "variable ?{}",
            v.as_str()
        ))),
        #[allow(unreachable_patterns)]
        _ => Err(RdfError::UnsupportedTerm("unknown term kind".into())),
    }
}
