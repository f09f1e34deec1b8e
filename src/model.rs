//! Data model for parsed documentation — format-agnostic.

/// Parsed output of one input file.
#[derive(Debug, PartialEq)]
pub enum Document {
    Element(ElementMeta),
    Changelog(Vec<Release>),
}

/// Everything extracted from one annotated web-component source file.
#[derive(Debug, Default, PartialEq)]
pub struct ElementMeta {
    /// @element tag name, e.g. "x-slider"
    pub element_name: String,
    /// Taken from the `class X extends Y` declaration; hardcoded to
    /// "HTMLDialogElement" for the built-in dialog element.
    pub class_name: String,
    /// @event entries, in source order
    pub events: Vec<EventMeta>,
    /// @part entries, in source order
    pub parts: Vec<PartMeta>,
    /// @property blocks, in source order
    pub properties: Vec<PropertyMeta>,
    /// @method blocks, in source order
    pub methods: Vec<MethodMeta>,
}

/// A single @event entry. A `^` prefix on the annotated name marks the
/// event as bubbling and is stripped.
#[derive(Debug, Default, PartialEq)]
pub struct EventMeta {
    pub name: String,
    pub description: String,
    pub bubbles: bool,
}

/// A single @part entry (a styleable shadow part).
#[derive(Debug, Default, PartialEq)]
pub struct PartMeta {
    pub name: String,
    pub description: String,
}

/// A declared property type: either a single type or a union of
/// alternatives (`string || number` in the annotation).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Single(String),
    Union(Vec<String>),
}

/// One documented accessor property.
#[derive(Debug, Default, PartialEq)]
pub struct PropertyMeta {
    /// Name of the getter, extracted from the accessor declaration
    pub property_name: String,
    /// @attribute; missing or empty values default to the lowercased
    /// property name once the block is parsed
    pub attribute_name: Option<String>,
    /// @type
    pub type_decl: Option<TypeDecl>,
    /// @default, stored verbatim
    pub default: Option<String>,
    /// @readOnly
    pub read_only: bool,
    /// Plain comment text inside the property block
    pub description: String,
}

/// One documented method.
#[derive(Debug, Default, PartialEq)]
pub struct MethodMeta {
    /// The full signature text up through the closing paren, e.g.
    /// "expandGroup(groupName)" — not just the identifier. Rendering
    /// relies on the parameter list being present.
    pub name: String,
    /// @type (function-signature annotation)
    pub type_decl: Option<String>,
    /// Plain comment text inside the method block
    pub description: String,
}

/// One changelog release, in document order (newest first by convention).
#[derive(Debug, Default, PartialEq)]
pub struct Release {
    pub version: String,
    /// Literal date text from the subtitle; "PENDING" for unreleased
    /// versions, empty when the subtitle carries no parenthesized date.
    pub date: String,
    pub items: Vec<ReleaseItem>,
}

/// One changelog bullet with its leading `[tag]` markers.
#[derive(Debug, Default, PartialEq)]
pub struct ReleaseItem {
    pub tags: Vec<String>,
    pub text: String,
}
