/// Flags that can be encoded into the last byte of a serialized field or
/// curve element without growing the buffer, as long as the element's
/// modulus leaves at least `len()` spare bits in its top byte.
pub trait Flags: Default + Clone + Copy + Sized {
    /// The bitmask occupying the high bits of the output byte.
    fn u8_bitmask(&self) -> u8;

    /// Recovers the flags from the high bits of `value`, and clears those
    /// bits in `value` in place.
    fn from_u8_remove_flags(value: &mut u8) -> Self;

    /// Number of bits these flags require.
    fn len() -> usize;
}

/// The empty flag. Encodes to zero and never changes the binary
/// representation of the value it is attached to.
#[derive(Default, Clone, Copy, Debug)]
pub struct EmptyFlags;

impl Flags for EmptyFlags {
    fn u8_bitmask(&self) -> u8 {
        0
    }

    fn from_u8_remove_flags(_value: &mut u8) -> Self {
        EmptyFlags
    }

    fn len() -> usize {
        0
    }
}

/// Flags for a Weierstrass curve point: whether it is the point at
/// infinity, and if not, the sign of its `y`-coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SWFlags {
    Infinity,
    PositiveY,
    NegativeY,
}

impl SWFlags {
    pub fn infinity() -> Self {
        SWFlags::Infinity
    }

    pub fn from_y_sign(is_positive: bool) -> Self {
        if is_positive {
            SWFlags::PositiveY
        } else {
            SWFlags::NegativeY
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, SWFlags::Infinity)
    }

    /// `None` for the point at infinity, otherwise the sign of `y`.
    pub fn is_positive(&self) -> Option<bool> {
        match self {
            SWFlags::Infinity => None,
            SWFlags::PositiveY => Some(true),
            SWFlags::NegativeY => Some(false),
        }
    }

    /// Decodes flags from the high bits of a masked byte, as produced by
    /// `u8_bitmask`.
    pub fn from_u8(value: u8) -> Self {
        let is_infinity = (value >> 7) & 1 == 1;
        let is_positive = (value >> 6) & 1 == 1;
        if is_infinity {
            SWFlags::Infinity
        } else if is_positive {
            SWFlags::PositiveY
        } else {
            SWFlags::NegativeY
        }
    }
}

impl Default for SWFlags {
    fn default() -> Self {
        SWFlags::NegativeY
    }
}

impl Flags for SWFlags {
    fn u8_bitmask(&self) -> u8 {
        match self {
            SWFlags::Infinity => 1 << 7,
            SWFlags::PositiveY => 1 << 6,
            SWFlags::NegativeY => 0,
        }
    }

    fn from_u8_remove_flags(value: &mut u8) -> Self {
        let flags = Self::from_u8(*value);
        *value &= 0x3F;
        flags
    }

    fn len() -> usize {
        2
    }
}

/// Flags for a twisted Edwards curve point: the sign of its
/// `y`-coordinate. Edwards points have no point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdwardsFlags {
    PositiveY,
    NegativeY,
}

impl EdwardsFlags {
    pub fn from_y_sign(is_positive: bool) -> Self {
        if is_positive {
            EdwardsFlags::PositiveY
        } else {
            EdwardsFlags::NegativeY
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, EdwardsFlags::PositiveY)
    }

    pub fn from_u8(value: u8) -> Self {
        if (value >> 7) & 1 == 1 {
            EdwardsFlags::PositiveY
        } else {
            EdwardsFlags::NegativeY
        }
    }
}

impl Default for EdwardsFlags {
    fn default() -> Self {
        EdwardsFlags::NegativeY
    }
}

impl Flags for EdwardsFlags {
    fn u8_bitmask(&self) -> u8 {
        match self {
            EdwardsFlags::PositiveY => 1 << 7,
            EdwardsFlags::NegativeY => 0,
        }
    }

    fn from_u8_remove_flags(value: &mut u8) -> Self {
        let flags = Self::from_u8(*value);
        *value &= 0x7F;
        flags
    }

    fn len() -> usize {
        1
    }
}
