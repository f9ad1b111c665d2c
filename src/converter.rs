use crate::descriptor::{ComponentDescriptor, DescriptorNode};
use crate::error::ConvertResult;
use crate::registry::Registry;
use crate::visitor::{visit_node, ConversionContext};

/// Converts XML documents into [`ComponentDescriptor`] trees using a
/// caller-supplied [`Registry`].
///
/// Constructed once per registry; each [`convert`](TreeConverter::convert)
/// call parses its own markup tree and discards it on return. No instance
/// state is written after construction, so one instance can serve
/// concurrent call sites.
pub struct TreeConverter<D> {
    registry: Registry<D>,
}

impl<D> TreeConverter<D> {
    /// Validate `registry` and take ownership of it.
    ///
    /// Fails with [`ConvertError::InvalidTagName`](crate::ConvertError::InvalidTagName)
    /// if any registered tag could never appear in well-formed markup. An
    /// empty registry is accepted.
    pub fn new(registry: Registry<D>) -> ConvertResult<Self> {
        registry.validate()?;
        Ok(TreeConverter { registry })
    }

    /// Convert one XML document, threading `data` to every converter.
    ///
    /// Returns `None` when the markup is structurally invalid (empty input,
    /// unterminated or malformed tags, mismatched close tags, multiple
    /// roots) - the visitor is never invoked in that case - and when the
    /// root tag has no registered converter. The two `None` cases are
    /// deliberately indistinguishable here; callers that care must check
    /// their input before calling.
    pub fn convert(&self, markup: &str, data: Option<&D>) -> Option<ComponentDescriptor> {
        let doc = roxmltree::Document::parse(markup).ok()?;

        let ctx = ConversionContext {
            registry: &self.registry,
            data,
        };

        match visit_node(doc.root_element(), &ctx)? {
            DescriptorNode::Element(descriptor) => Some(descriptor),
            // The document root is always an element
            DescriptorNode::Text(_) => None,
        }
    }

    /// The registry this converter was constructed with.
    pub fn registry(&self) -> &Registry<D> {
        &self.registry
    }
}

impl<D> std::fmt::Debug for TreeConverter<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeConverter")
            .field("registry", &self.registry)
            .finish()
    }
}
