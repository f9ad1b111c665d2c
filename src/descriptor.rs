use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Attributes of one markup element, as read from the XML source.
pub type Attributes = HashMap<String, String>;

/// Props of a component descriptor. JSON values let converters inject
/// data-derived fields next to plain attribute strings.
pub type Props = HashMap<String, Value>;

/// What a converter returns for one element: the component it resolves to
/// plus its props. The visitor attaches children after the converter runs,
/// so converters must not assume a `children` prop pre-exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentParts {
    pub component: String,
    pub props: Props,
}

impl ComponentParts {
    pub fn new(component: impl Into<String>, props: Props) -> Self {
        ComponentParts {
            component: component.into(),
            props,
        }
    }
}

/// One node of the output tree - the renderer-agnostic description of a
/// UI component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub component: String,
    pub props: Props,
    pub children: Vec<DescriptorNode>,
}

/// A child of a descriptor: either a nested descriptor or raw character
/// data carried over verbatim from the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorNode {
    Element(ComponentDescriptor),
    Text(String),
}

impl DescriptorNode {
    /// Returns the descriptor if this node is an element.
    pub fn as_element(&self) -> Option<&ComponentDescriptor> {
        match self {
            DescriptorNode::Element(d) => Some(d),
            DescriptorNode::Text(_) => None,
        }
    }

    /// Returns the character data if this node is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DescriptorNode::Element(_) => None,
            DescriptorNode::Text(t) => Some(t),
        }
    }
}

/// Turn an element's attributes into props, each value a JSON string.
/// Handy for converters that forward attributes unchanged.
pub fn props_from_attributes(attributes: &Attributes) -> Props {
    attributes
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}
