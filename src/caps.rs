/// Host capability description, consulted once per call by the path selector.
///
/// Abstracts the CPU-feature gating a host performs at setup time: the host
/// decides which kernel paths its environment supports and injects the
/// answers here instead of the kernel probing the CPU itself.
pub trait Capabilities {
    /// Whether the vectorized kernel path may be used.
    fn simd(&self) -> bool;
    /// Whether half-precision planes are accepted. When this is false, a
    /// half-precision request fails with
    /// [`ReconError::UnsupportedPrecision`](crate::ReconError::UnsupportedPrecision)
    /// rather than silently downgrading.
    fn half_precision(&self) -> bool;
}

/// Default capability provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostCaps {
    /// Allow the vectorized path.
    pub simd: bool,
    /// Accept half-precision planes.
    pub half_precision: bool,
}

impl HostCaps {
    /// Capabilities of the current host.
    ///
    /// `wide` lowers to whatever vector ISA the target offers (with a scalar
    /// fallback) and `half` converts in software where F16C is absent, so
    /// both paths work on every target this crate compiles for. Hosts that
    /// gate half precision on hardware support construct the struct directly.
    pub fn detect() -> Self {
        Self { simd: true, half_precision: true }
    }
}

impl Default for HostCaps {
    fn default() -> Self {
        Self::detect()
    }
}

impl Capabilities for HostCaps {
    fn simd(&self) -> bool {
        self.simd
    }

    fn half_precision(&self) -> bool {
        self.half_precision
    }
}
