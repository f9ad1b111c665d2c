use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::descriptor::{Attributes, ComponentParts};
use crate::error::{ConvertError, ConvertResult};

/// A caller-supplied conversion function for one tag name.
///
/// Receives the element's attributes and the opaque side-channel data,
/// and decides which component the element maps to and with which props.
/// The visitor attaches children afterwards.
pub type Converter<D> = Box<dyn Fn(&Attributes, Option<&D>) -> ComponentParts + Send + Sync>;

/// An immutable mapping from tag name to [`Converter`].
///
/// Built once, handed to [`TreeConverter::new`](crate::TreeConverter::new),
/// and never mutated afterwards. Dispatch is by exact tag name only;
/// attribute values never influence the lookup. Registering the same tag
/// twice keeps the last converter.
///
/// An empty registry is valid - every conversion will simply produce `None`.
pub struct Registry<D> {
    converters: HashMap<String, Converter<D>>,
}

impl<D> Registry<D> {
    pub fn new() -> Self {
        Registry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter for `tag`, builder style.
    pub fn register<F>(mut self, tag: impl Into<String>, converter: F) -> Self
    where
        F: Fn(&Attributes, Option<&D>) -> ComponentParts + Send + Sync + 'static,
    {
        self.converters.insert(tag.into(), Box::new(converter));
        self
    }

    /// Look up the converter for a tag name.
    pub fn get(&self, tag: &str) -> Option<&Converter<D>> {
        self.converters.get(tag)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Registered tag names, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.converters.keys().map(|k| k.as_str())
    }

    /// Check that every registered tag is a syntactically valid XML
    /// element name. A tag that can never appear in well-formed markup is
    /// a configuration mistake, surfaced at construction rather than as a
    /// silently dead registry entry.
    pub(crate) fn validate(&self) -> ConvertResult<()> {
        for tag in self.converters.keys() {
            if !tag_name_regex().is_match(tag) {
                return Err(ConvertError::InvalidTagName { tag: tag.clone() });
            }
        }
        Ok(())
    }
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Registry::new()
    }
}

impl<D> std::fmt::Debug for Registry<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}

fn tag_name_regex() -> &'static Regex {
    static TAG_NAME: OnceLock<Regex> = OnceLock::new();
    TAG_NAME.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9._-]*$").unwrap())
}
