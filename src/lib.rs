//! # xml-to-ui
//!
//! Converts XML documents into trees of renderer-agnostic UI component
//! descriptors, driven by a caller-supplied registry that maps tag names to
//! converter functions.
//!
//! ## Features
//! - Registry-based dispatch: one converter per tag name, validated at
//!   construction
//! - Depth-first conversion with verbatim text pass-through and mixed
//!   content support
//! - Opaque side-channel data handed unchanged to every converter
//! - Malformed markup and unknown tags degrade to `None`, never a panic
//!
//! ## Example
//! ```ignore
//! use xml_to_ui::{props_from_attributes, ComponentParts, Registry, TreeConverter};
//!
//! let registry: Registry<()> = Registry::new()
//!     .register("panel", |attrs, _data| {
//!         ComponentParts::new("Panel", props_from_attributes(attrs))
//!     })
//!     .register("label", |attrs, _data| {
//!         ComponentParts::new("Label", props_from_attributes(attrs))
//!     });
//!
//! let converter = TreeConverter::new(registry).expect("valid registry");
//! let tree = converter.convert(r#"<panel title="Stats"><label /></panel>"#, None);
//! ```

pub mod converter;
pub mod descriptor;
pub mod error;
pub mod registry;
mod visitor;

// --- Core types ---
pub use converter::TreeConverter;
pub use descriptor::{
    props_from_attributes, Attributes, ComponentDescriptor, ComponentParts, DescriptorNode, Props,
};
pub use error::{ConvertError, ConvertResult};
pub use registry::{Converter, Registry};
