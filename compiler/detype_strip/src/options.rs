//! Stripping options.

/// What to do with the type that follows an optional marker (`?:`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OptionalAnnotation {
    /// `age?: number` becomes `age: number`. Only the `?` is removed.
    #[default]
    Keep,
    /// `age?: number` becomes `age`. The type is skipped like any annotation.
    Elide,
}

/// Knobs for [`strip_with`](crate::strip_with).
///
/// The default reproduces the plain heuristic behaviour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct StripOptions {
    pub optional_annotation: OptionalAnnotation,
}

impl StripOptions {
    /// Options with `?:` types removed as well.
    #[must_use]
    pub fn elide_optional_types(mut self) -> Self {
        self.optional_annotation = OptionalAnnotation::Elide;
        self
    }
}
