//! Optional-engine capabilities and the probes that report them.
//!
//! A capability is something an optional writer needs that a given build or
//! host may lack.  Probing is advisory: the writers stay safe even when a
//! probe reports `available` wrongly, they just return `false` instead.

use std::fmt;

/// An optional engine one of the writers depends on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Capability {
    /// Spreadsheet engine behind the `xlsx` feature.
    Spreadsheet,
    /// Word-processing automation engine behind the `docx` feature.
    Document,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Spreadsheet, Capability::Document];

    /// Cargo feature that compiles the engine in.
    pub fn feature(self) -> &'static str {
        match self {
            Capability::Spreadsheet => "xlsx",
            Capability::Document    => "docx",
        }
    }

    /// Whether this build was compiled with the engine.
    pub fn compiled_in(self) -> bool {
        match self {
            Capability::Spreadsheet => cfg!(feature = "xlsx"),
            Capability::Document    => cfg!(feature = "docx"),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Spreadsheet => "spreadsheet",
            Capability::Document    => "document",
        })
    }
}

/// Result of probing one capability.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CapabilityStatus {
    pub capability: Capability,
    pub available:  bool,
}

impl CapabilityStatus {
    pub fn missing(capability: Capability) -> Self {
        CapabilityStatus { capability, available: false }
    }
}

/// Reports whether an optional engine can be used.
///
/// Implementations must be cheap and free of side effects; the driver calls
/// `probe` once per capability before each tier's batch of writes.
pub trait CapabilityProbe {
    fn probe(&self, capability: Capability) -> CapabilityStatus;
}

/// Reports the engines compiled into this build.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildProbe;

impl CapabilityProbe for BuildProbe {
    fn probe(&self, capability: Capability) -> CapabilityStatus {
        CapabilityStatus { capability, available: capability.compiled_in() }
    }
}

/// Wraps another probe and forces selected capabilities off.
///
/// Used for `--no-xlsx` / `--no-docx` and to simulate a missing engine.
#[derive(Debug, Clone)]
pub struct OverrideProbe<P> {
    inner:    P,
    disabled: Vec<Capability>,
}

impl<P: CapabilityProbe> OverrideProbe<P> {
    pub fn new(inner: P) -> Self {
        OverrideProbe { inner, disabled: Vec::new() }
    }

    /// Report `capability` as missing regardless of the inner probe.
    pub fn disable(mut self, capability: Capability) -> Self {
        if !self.disabled.contains(&capability) {
            self.disabled.push(capability);
        }
        self
    }

    /// Report every capability as missing.
    pub fn disable_all(self) -> Self {
        Capability::ALL.into_iter().fold(self, Self::disable)
    }
}

impl<P: CapabilityProbe> CapabilityProbe for OverrideProbe<P> {
    fn probe(&self, capability: Capability) -> CapabilityStatus {
        if self.disabled.contains(&capability) {
            return CapabilityStatus::missing(capability);
        }
        self.inner.probe(capability)
    }
}
