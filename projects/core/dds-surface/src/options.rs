//! Options controlling how much of the header is validated.

/// How the 4 byte `"DDS "` magic at the start of the source is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MagicCheck {
    /// Fail with [`DecodeError::BadMagic`](crate::DecodeError::BadMagic) unless the
    /// magic is exactly `"DDS "`.
    #[default]
    Verify,

    /// Consume the 4 bytes without looking at them.
    ///
    /// For files where the magic has been overwritten (e.g. with transform details)
    /// but the rest of the header is intact.
    Skip,
}

/// Options for [`decode_with_options`](crate::decode_with_options).
///
/// The default validates everything [`decode`](crate::decode) validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecodeOptions {
    pub magic: MagicCheck,
}

impl DecodeOptions {
    /// Options that skip magic validation.
    pub const fn ignore_magic() -> Self {
        Self {
            magic: MagicCheck::Skip,
        }
    }
}
