//! Abstract syntax tree for imports, paths, and type expressions.
//!
//! Nodes own their children (a tree, never a graph) but borrow every name from the source buffer, so an AST can
//! not outlive the text it was parsed from.
//!
//! ## Notes
//! - `Display` renders nodes back in canonical source form (`std.io.write(string) : void`, `int32**&`).
//! - [`Visitor`] provides overridable hooks with default walks for every node kind.

use std::fmt;

pub use cherry_core::lang::primitives::Primitive;

// ============================================================================
// PATHS
// ============================================================================

/// A dotted sequence of plain identifiers, e.g. `std.io.file`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimplePath<'src> {
    pub segments: Vec<&'src str>,
}

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<'src> {
    /// A built-in scalar type keyword.
    Primitive(Primitive),
    /// A named segment, optionally applied to type arguments (`list<int32>`).
    Generic { name: &'src str, inputs: Vec<Type<'src>> },
}

/// A dotted sequence of segments, e.g. `std.map<string, int32>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpr<'src> {
    pub segments: Vec<Segment<'src>>,
}

// ============================================================================
// TYPES
// ============================================================================

/// A type expression. Every variant carries the segments of its leading path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type<'src> {
    /// A plain named type.
    Raw { segments: Vec<Segment<'src>> },
    /// A function type: `path(inputs) : output`.
    Fn {
        segments: Vec<Segment<'src>>,
        inputs: Vec<Type<'src>>,
        output: Option<Box<Type<'src>>>,
    },
    /// An array type: `path[]`. Dimensions are not modelled yet.
    Arr { segments: Vec<Segment<'src>> },
    /// A pointer/reference type. `depth[i]` is `true` for `*` and `false` for `&`, leftmost first.
    Ref {
        segments: Vec<Segment<'src>>,
        depth: Vec<bool>,
    },
}

impl<'src> Type<'src> {
    /// Segments of the leading path.
    pub fn segments(&self) -> &[Segment<'src>] {
        match self {
            Type::Raw { segments }
            | Type::Fn { segments, .. }
            | Type::Arr { segments }
            | Type::Ref { segments, .. } => segments,
        }
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// `using some.module;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import<'src> {
    pub path: SimplePath<'src>,
}

/// A parsed compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Document<'src> {
    pub imports: Vec<Import<'src>>,
}

impl<'src> Document<'src> {
    /// Walk this document with `visitor`.
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_document(self);
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], separator: &str) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for SimplePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.segments, ".")
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Primitive(primitive) => write!(f, "{primitive}"),
            Segment::Generic { name, inputs } => {
                f.write_str(name)?;
                if !inputs.is_empty() {
                    f.write_str("<")?;
                    write_separated(f, inputs, ", ")?;
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PathExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.segments, ".")
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, self.segments(), ".")?;
        match self {
            Type::Raw { .. } => Ok(()),
            Type::Fn { inputs, output, .. } => {
                f.write_str("(")?;
                write_separated(f, inputs, ", ")?;
                f.write_str(")")?;
                match output {
                    Some(output) => write!(f, " : {output}"),
                    None => Ok(()),
                }
            }
            Type::Arr { .. } => f.write_str("[]"),
            Type::Ref { depth, .. } => {
                for &pointer in depth {
                    f.write_str(if pointer { "*" } else { "&" })?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Import<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "using {};", self.path)
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for import in &self.imports {
            writeln!(f, "{import}")?;
        }
        Ok(())
    }
}

// ============================================================================
// VISITOR
// ============================================================================

/// Read-only traversal hooks.
///
/// Every hook defaults to the matching `walk_*` function, so an implementation only overrides the nodes it cares
/// about and calls `walk_*` itself when it still wants to descend.
pub trait Visitor<'src> {
    fn visit_document(&mut self, document: &Document<'src>) {
        walk_document(self, document);
    }

    fn visit_import(&mut self, import: &Import<'src>) {
        walk_import(self, import);
    }

    fn visit_simple_path(&mut self, _path: &SimplePath<'src>) {}

    fn visit_path_expr(&mut self, path: &PathExpr<'src>) {
        walk_path_expr(self, path);
    }

    fn visit_segment(&mut self, segment: &Segment<'src>) {
        walk_segment(self, segment);
    }

    fn visit_type(&mut self, ty: &Type<'src>) {
        walk_type(self, ty);
    }
}

pub fn walk_document<'src, V: Visitor<'src> + ?Sized>(visitor: &mut V, document: &Document<'src>) {
    for import in &document.imports {
        visitor.visit_import(import);
    }
}

pub fn walk_import<'src, V: Visitor<'src> + ?Sized>(visitor: &mut V, import: &Import<'src>) {
    visitor.visit_simple_path(&import.path);
}

pub fn walk_path_expr<'src, V: Visitor<'src> + ?Sized>(visitor: &mut V, path: &PathExpr<'src>) {
    for segment in &path.segments {
        visitor.visit_segment(segment);
    }
}

pub fn walk_segment<'src, V: Visitor<'src> + ?Sized>(visitor: &mut V, segment: &Segment<'src>) {
    if let Segment::Generic { inputs, .. } = segment {
        for input in inputs {
            visitor.visit_type(input);
        }
    }
}

pub fn walk_type<'src, V: Visitor<'src> + ?Sized>(visitor: &mut V, ty: &Type<'src>) {
    for segment in ty.segments() {
        visitor.visit_segment(segment);
    }
    if let Type::Fn { inputs, output, .. } = ty {
        for input in inputs {
            visitor.visit_type(input);
        }
        if let Some(output) = output {
            visitor.visit_type(output);
        }
    }
}
