/// Flags describing the properties of an outline point.
///
/// Quadratic outlines distinguish points on the glyph boundary from control
/// points that pull the curve toward an implied midpoint. Following the
/// TrueType convention, an off-curve point is signified by the absence of
/// the on-curve bit.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PointFlags(u8);

impl PointFlags {
    const ON_CURVE: u8 = 0x01;

    /// Creates a new on curve point flag.
    pub const fn on_curve() -> Self {
        Self(Self::ON_CURVE)
    }

    /// Creates a new off curve point flag.
    pub const fn off_curve() -> Self {
        Self(0)
    }

    /// Creates a point flag from the given bits, ignoring anything but the
    /// on-curve bit.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ON_CURVE)
    }

    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        self.0 & Self::ON_CURVE != 0
    }

    /// Returns true if this is an off curve control point.
    #[inline]
    pub const fn is_off_curve(self) -> bool {
        !self.is_on_curve()
    }
}
