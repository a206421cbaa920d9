//! Ordered enumeration of every compatible method configuration.

use crate::method::{is_compatible, Center, Decay, Encoding, Extremize, MethodConfig};

/// Immutable, ordered list of method configurations.
///
/// Order is outer-to-inner over center, encoding, decay, extremize, in the
/// order the axis values were supplied. Incompatible tuples are skipped
/// before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCatalog {
    methods: Vec<MethodConfig>,
}

impl MethodCatalog {
    /// Catalog over every variant of every axis.
    pub fn new() -> Self {
        Self::from_axes(Center::ALL, Encoding::ALL, Decay::ALL, Extremize::ALL)
    }

    /// Catalog over caller-supplied axis values. Repeated values are
    /// enumerated once, at their first position.
    pub fn from_axes(
        centers: &[Center],
        encodings: &[Encoding],
        decays: &[Decay],
        extremizers: &[Extremize],
    ) -> Self {
        let centers = dedup(centers);
        let encodings = dedup(encodings);
        let decays = dedup(decays);
        let extremizers = dedup(extremizers);

        let mut methods = Vec::new();
        for &center in &centers {
            for &encoding in &encodings {
                for &decay in &decays {
                    if !is_compatible(center, encoding, decay) {
                        continue;
                    }
                    for &extremize in &extremizers {
                        if let Ok(method) = MethodConfig::new(center, encoding, decay, extremize) {
                            methods.push(method);
                        }
                    }
                }
            }
        }
        Self { methods }
    }

    /// Number of methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when no axis combination was compatible.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Methods in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, MethodConfig> {
        self.methods.iter()
    }

    /// Method at enumeration index `index`.
    pub fn get(&self, index: usize) -> Option<&MethodConfig> {
        self.methods.get(index)
    }

    /// Enumeration index of `method`, if the catalog contains it.
    pub fn position(&self, method: &MethodConfig) -> Option<usize> {
        self.methods.iter().position(|m| m == method)
    }

    /// All methods as a slice, in enumeration order.
    pub fn as_slice(&self) -> &[MethodConfig] {
        &self.methods
    }
}

impl Default for MethodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MethodCatalog {
    type Item = &'a MethodConfig;
    type IntoIter = std::slice::Iter<'a, MethodConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn dedup<T: Copy + PartialEq>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for &v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
