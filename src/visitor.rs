use roxmltree::Node;

use crate::descriptor::{Attributes, ComponentDescriptor, DescriptorNode};
use crate::registry::Registry;

/// Everything a visit needs, threaded by reference through the recursion:
/// the converter registry and the opaque side-channel data. `data` reaches
/// every converter invocation unchanged, at every depth.
pub(crate) struct ConversionContext<'a, D> {
    pub registry: &'a Registry<D>,
    pub data: Option<&'a D>,
}

/// Visit one markup node, depth first.
///
/// - Text nodes (including CDATA) pass through verbatim as
///   [`DescriptorNode::Text`] - no trimming, no registry lookup.
/// - Elements are dispatched by tag name. An unmapped element yields `None`:
///   it contributes nothing to its parent's children, but siblings are
///   still processed.
/// - Comments and processing instructions yield `None`.
///
/// For a mapped element, all children are visited in document order and the
/// surviving results collected into one flat ordered list before the
/// converter runs, so the converter's output gets its children attached
/// post-order.
pub(crate) fn visit_node<'a, D>(
    node: Node<'a, 'a>,
    ctx: &ConversionContext<'_, D>,
) -> Option<DescriptorNode> {
    if node.is_text() {
        return node.text().map(|t| DescriptorNode::Text(t.to_string()));
    }

    if !node.is_element() {
        return None;
    }

    let converter = ctx.registry.get(node.tag_name().name())?;

    let children: Vec<DescriptorNode> = node
        .children()
        .filter_map(|child| visit_node(child, ctx))
        .collect();

    let attributes = collect_attributes(node);
    let parts = converter(&attributes, ctx.data);

    Some(DescriptorNode::Element(ComponentDescriptor {
        component: parts.component,
        props: parts.props,
        children,
    }))
}

fn collect_attributes(node: Node) -> Attributes {
    node.attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect()
}
