//! Allowed-colors registry.
//!
//! Access rules
//! - `ColorRegistry` is a plain value: reads borrow `&self`, registration
//!   needs `&mut self`, so the borrow checker serializes writers.
//! - `SharedColorRegistry` is the handle for cross-thread use. Writers take
//!   the write lock; validating readers work on a `snapshot()` or a short read
//!   lock and never observe a half-applied append.
//!
//! Membership is checked at point construction only. Points built earlier are
//! not re-validated when the registry changes.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Colors accepted by a freshly created registry, in order.
pub const DEFAULT_COLORS: [&str; 7] = [
    "red",
    "blue",
    "green",
    "yellow",
    "black",
    "white",
    "periwinkle",
];

/// Insertion-ordered list of allowed color names. Duplicates are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRegistry {
    colors: Vec<String>,
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::from_colors(DEFAULT_COLORS)
    }
}

impl ColorRegistry {
    /// Registry that accepts nothing until colors are added.
    pub fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn from_colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    #[inline]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Append a color; later constructions against this registry accept it.
    pub fn add_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        tracing::debug!(color = %color, total = self.colors.len() + 1, "color registered");
        self.colors.push(color);
    }
}

/// Cloneable, thread-safe handle around one `ColorRegistry`.
///
/// A poisoned lock is recovered: appends are single pushes, so the inner list
/// is never left half-written.
#[derive(Clone, Debug, Default)]
pub struct SharedColorRegistry {
    inner: Arc<RwLock<ColorRegistry>>,
}

impl SharedColorRegistry {
    pub fn new(registry: ColorRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn add_color(&self, color: impl Into<String>) {
        self.write().add_color(color);
    }

    pub fn contains(&self, color: &str) -> bool {
        self.read().contains(color)
    }

    /// Point-in-time copy, usable for any number of validations.
    pub fn snapshot(&self) -> ColorRegistry {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, ColorRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ColorRegistry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ColorRegistry> for SharedColorRegistry {
    fn from(registry: ColorRegistry) -> Self {
        Self::new(registry)
    }
}
