//! Pre-order traversal over ICU messages.

use bon::Builder;

use crate::parser::{Message, Node, ParseError, Plural, Select, Span};

/// Options controlling [`traverse`] and [`walk`].
///
/// ```
/// use gt_icu::TraverseOptions;
///
/// let options = TraverseOptions::builder().capture_location(true).build();
/// assert!(options.capture_location);
/// assert!(!options.recurse_into_visited);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct TraverseOptions {
    /// Descend into the children of a node after visiting it.
    #[builder(default)]
    pub recurse_into_visited: bool,

    /// Pass each visited node's source span to the visitor.
    #[builder(default)]
    pub capture_location: bool,
}

/// Parse `text` and walk it, calling `visit` on every node for which
/// `should_visit` returns true.
///
/// Parser errors are returned unchanged. The visitor may rewrite the node it
/// is given; the (possibly rewritten) message is returned.
pub fn traverse<P, V>(
    text: &str,
    should_visit: P,
    visit: V,
    options: TraverseOptions,
) -> Result<Message, ParseError>
where
    P: Fn(&Node) -> bool,
    V: FnMut(&mut Node, Option<Span>),
{
    let mut message = Message::parse(text)?;
    let visited = walk(&mut message.nodes, should_visit, visit, options);
    tracing::trace!(len = text.len(), visited, "traversed message");
    Ok(message)
}

/// Walk already-parsed nodes in document order. Returns the number of nodes
/// visited.
pub fn walk<P, V>(nodes: &mut [Node], should_visit: P, visit: V, options: TraverseOptions) -> usize
where
    P: Fn(&Node) -> bool,
    V: FnMut(&mut Node, Option<Span>),
{
    let mut walker = Walker {
        should_visit,
        visit,
        options,
        visited: 0,
    };
    walker.walk(nodes);
    walker.visited
}

struct Walker<P, V> {
    should_visit: P,
    visit: V,
    options: TraverseOptions,
    visited: usize,
}

impl<P, V> Walker<P, V>
where
    P: Fn(&Node) -> bool,
    V: FnMut(&mut Node, Option<Span>),
{
    fn walk(&mut self, nodes: &mut [Node]) {
        for node in nodes {
            if (self.should_visit)(&*node) {
                self.visited += 1;
                let location = if self.options.capture_location {
                    node.span()
                } else {
                    None
                };
                (self.visit)(&mut *node, location);
                if !self.options.recurse_into_visited {
                    continue;
                }
            }

            match node {
                Node::Select(Select { options, .. }) | Node::Plural(Plural { options, .. }) => {
                    for case in options {
                        self.walk(&mut case.children);
                    }
                }
                Node::Tag(tag) => self.walk(&mut tag.children),
                Node::Literal(_)
                | Node::Argument(_)
                | Node::Number(_)
                | Node::Date(_)
                | Node::Time(_)
                | Node::Pound(_) => {}
            }
        }
    }
}
