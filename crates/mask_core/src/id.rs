//! Identifier for masked fields.
//!
//! A plain `u64` newtype. Adapters convert their own widget or element ids
//! into it with `From` impls.

/// Opaque identifier for a field within a [`MaskedFieldStore`](crate::MaskedFieldStore).
///
/// One id stands for one matched input surface. The value has no meaning
/// within this crate; it is only a key.
///
/// # Integration
///
/// ```ignore
/// use mask_core::FieldId;
///
/// impl From<WidgetId> for FieldId {
///     fn from(id: WidgetId) -> Self {
///         FieldId::from_raw(id.0 as u64)
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}
