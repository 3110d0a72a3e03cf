//! N-Triples serializer.
//!
//! Produces one triple per line with absolute IRIs, in the order given.

use crate::model::Triple;

/// Serializes `triples` to an N-Triples string.
#[must_use]
pub fn to_ntriples(triples: &[Triple]) -> String {
    let mut out = String::with_capacity(triples.len() * 128);
    for t in triples {
        out.push_str(&t.to_string());
        out.push('\n');
    }
    out
}
