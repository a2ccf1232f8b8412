//! Runtime word width shared by every arithmetic operation.

pub const DEFAULT_WIDTH: u32 = 64;
pub const MAX_WIDTH: u32 = 64;

/// Active bit width plus the derived mask with the low `width` bits set.
///
/// The session owns exactly one of these and hands it down by value; callers must always
/// re-read it from the session rather than caching it across a width change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskConfig {
    width: u32,
    mask: u64,
}

impl MaskConfig {
    /// Builds a configuration for `requested` bits. Anything outside `1..=64` falls back to
    /// the 64-bit default instead of being rejected.
    pub fn with_width(requested: u32) -> Self {
        let width = if (1..=MAX_WIDTH).contains(&requested) {
            requested
        } else {
            DEFAULT_WIDTH
        };
        Self {
            width,
            mask: mask_for_bits(width),
        }
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn mask(self) -> u64 {
        self.mask
    }

    #[inline(always)]
    pub fn apply(self, value: u64) -> u64 {
        value & self.mask
    }

    /// Number of whole bytes touched by the active width.
    pub fn byte_len(self) -> u32 {
        self.width.div_ceil(8)
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }
}

pub fn mask_for_bits(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else if width == 0 {
        0
    } else {
        (1u64 << width) - 1
    }
}
