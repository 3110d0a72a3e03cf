//! Indexed, read-only view over a slice of triples.

use std::collections::{HashMap, HashSet, VecDeque};

use meemoo_rdf::model::iris;
use meemoo_rdf::{Node, Triple};

/// Subject/object/predicate indexes over a borrowed fact set. Every lookup
/// returns matches in insertion order.
pub(crate) struct Graph<'a> {
    triples: &'a [Triple],
    by_subject: HashMap<&'a Node, Vec<usize>>,
    by_object: HashMap<&'a Node, Vec<usize>>,
    by_predicate: HashMap<&'a str, Vec<usize>>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(triples: &'a [Triple]) -> Self {
        let mut by_subject: HashMap<&'a Node, Vec<usize>> = HashMap::new();
        let mut by_object: HashMap<&'a Node, Vec<usize>> = HashMap::new();
        let mut by_predicate: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (i, t) in triples.iter().enumerate() {
            by_subject.entry(&t.subject).or_default().push(i);
            by_object.entry(&t.object).or_default().push(i);
            by_predicate.entry(t.predicate.as_str()).or_default().push(i);
        }
        Self {
            triples,
            by_subject,
            by_object,
            by_predicate,
        }
    }

    /// All triples with `subject`, in order.
    pub(crate) fn outgoing(&self, subject: &Node) -> impl Iterator<Item = &'a Triple> + '_ {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .map(|&i| &self.triples[i])
    }

    pub(crate) fn objects(&self, subject: &Node, predicate: &str) -> Vec<&'a Node> {
        self.outgoing(subject)
            .filter(|t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
            .collect()
    }

    pub(crate) fn object(&self, subject: &Node, predicate: &str) -> Option<&'a Node> {
        self.outgoing(subject)
            .find(|t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    pub(crate) fn subjects(&self, predicate: &str, object: &Node) -> Vec<&'a Node> {
        self.by_object
            .get(object)
            .into_iter()
            .flatten()
            .map(|&i| &self.triples[i])
            .filter(|t| t.predicate.as_str() == predicate)
            .map(|t| &t.subject)
            .collect()
    }

    pub(crate) fn with_predicate(&self, predicate: &str) -> impl Iterator<Item = &'a Triple> + '_ {
        self.by_predicate
            .get(predicate)
            .into_iter()
            .flatten()
            .map(|&i| &self.triples[i])
    }

    /// Distinct subjects in order of first appearance.
    pub(crate) fn subjects_in_order(&self) -> Vec<&'a Node> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub(crate) fn has_type(&self, node: &Node, class: &str) -> bool {
        self.objects(node, iris::RDF_TYPE)
            .iter()
            .any(|t| matches!(t, Node::Iri(iri) if iri.as_str() == class))
    }

    /// True if `node` is an instance of `class` or of one of its
    /// `rdfs:subClassOf*` descendants.
    pub(crate) fn is_instance_of(&self, node: &Node, class: &str) -> bool {
        let mut queue: VecDeque<&Node> = self.objects(node, iris::RDF_TYPE).into_iter().collect();
        let mut seen: HashSet<&Node> = HashSet::new();
        while let Some(ty) = queue.pop_front() {
            if !seen.insert(ty) {
                continue;
            }
            if matches!(ty, Node::Iri(iri) if iri.as_str() == class) {
                return true;
            }
            queue.extend(self.objects(ty, iris::RDFS_SUBCLASS_OF));
        }
        false
    }

    /// All nodes that are instances of `class`, honouring `rdfs:subClassOf*`,
    /// in order of first appearance.
    pub(crate) fn instances_of(&self, class: &str) -> Vec<&'a Node> {
        let mut seen = HashSet::new();
        self.with_predicate(iris::RDF_TYPE)
            .map(|t| &t.subject)
            .filter(|s| self.is_instance_of(s, class))
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Collects the members of an RDF list. Returns `None` if the list is
    /// cyclic or a cell lacks `rdf:first` / `rdf:rest`.
    pub(crate) fn list(&self, head: &'a Node) -> Option<Vec<&'a Node>> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut cell = head;
        loop {
            if matches!(cell, Node::Iri(iri) if iri.as_str() == iris::RDF_NIL) {
                return Some(items);
            }
            if !visited.insert(cell) {
                return None;
            }
            items.push(self.object(cell, iris::RDF_FIRST)?);
            cell = self.object(cell, iris::RDF_REST)?;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use meemoo_rdf::namespaces::{rdf, rdfs, sdo, A};
    use meemoo_rdf::{BlankNode, Iri, Literal};

    fn iri(s: &str) -> Node {
        Node::Iri(Iri::new(s))
    }

    #[test]
    fn subclass_instances_are_found() {
        let triples = vec![
            Triple::new(Iri::new("urn:Employee"), rdfs::SUB_CLASS_OF, sdo::PERSON),
            Triple::new(Iri::new("urn:jane"), A, Iri::new("urn:Employee")),
            Triple::new(Iri::new("urn:acme"), A, sdo::ORGANIZATION),
        ];
        let g = Graph::new(&triples);
        assert!(g.is_instance_of(&iri("urn:jane"), sdo::PERSON.as_str()));
        assert!(!g.is_instance_of(&iri("urn:acme"), sdo::PERSON.as_str()));
        assert_eq!(g.instances_of(sdo::PERSON.as_str()), vec![&iri("urn:jane")]);
    }

    #[test]
    fn list_members_in_order() {
        let l0 = BlankNode::new("l0");
        let l1 = BlankNode::new("l1");
        let triples = vec![
            Triple::new(l0.clone(), rdf::FIRST, Literal::string("a")),
            Triple::new(l0.clone(), rdf::REST, l1.clone()),
            Triple::new(l1.clone(), rdf::FIRST, Literal::string("b")),
            Triple::new(l1, rdf::REST, rdf::NIL),
        ];
        let g = Graph::new(&triples);
        let head = Node::Blank(l0);
        let items = g.list(&head).unwrap();
        assert_eq!(
            items,
            vec![
                &Node::Literal(Literal::string("a")),
                &Node::Literal(Literal::string("b"))
            ]
        );
    }

    #[test]
    fn cyclic_list_is_rejected() {
        let l0 = BlankNode::new("l0");
        let triples = vec![
            Triple::new(l0.clone(), rdf::FIRST, Literal::string("a")),
            Triple::new(l0.clone(), rdf::REST, l0.clone()),
        ];
        let g = Graph::new(&triples);
        let head = Node::Blank(l0);
        assert!(g.list(&head).is_none());
    }
}
