//! Parser and canonicalizing writer for Telesis-style package/net lists.
//!
//! A Telesis document describes a board as two `;`-segmented sections: a
//! `$PACKAGES` section binding reference designators to definition clauses
//! (`FOOTPRINT ! PART ! VALUE`) and a `$NETS` section binding net names to
//! `REF.PIN` connections. Neither section has fixed field positions; the
//! boundaries are inferred from the shape of the words themselves.
//!
//! [`NetList`] parses a whole document into the component value map and the
//! connection map; [`render`] re-serializes both as an LTspice-style netlist
//! with unit normalization and deterministic pin ordering.
//!
//! ```
//! use telesis_netlist::{render, NetList};
//!
//! let doc = "$PACKAGES
//! SM_0603 ! RES_10K ! '10k'; R1 R2;
//! $NETS
//! 'VCC'; R1.1 R2.1 'GND'; R1.2 R2.2";
//!
//! let netlist = NetList::try_from(doc).unwrap();
//! let lines = render(&netlist, "demo.cir");
//! assert!(lines.contains(&"R1 VCC GND 10k".to_string()));
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;

mod error;
mod parse;
mod raw;
mod render;
mod stream;

pub use error::FormatError;
pub use render::render;

/// The parsed model of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetList {
    /// Component values keyed by reference designator. A designator that
    /// reappears in the package section keeps its last value.
    pub values: BTreeMap<RefDes, Value>,
    /// Net name per `(ref, pin)` connection.
    pub connections: BTreeMap<RefDes, BTreeMap<PinId, String>>,
}

/// A component reference designator (`R1`, `U3`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefDes(pub String);

impl RefDes {
    /// SPICE element class implied by the leading class letter.
    pub fn class(&self) -> DeviceClass {
        match self.0.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('R') => DeviceClass::Resistor,
            Some('L') => DeviceClass::Inductor,
            Some('C') => DeviceClass::Capacitor,
            Some('Q') => DeviceClass::Transistor,
            Some('D') => DeviceClass::Diode,
            _ => DeviceClass::Subcircuit,
        }
    }
}

impl Display for RefDes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Device classes the writer distinguishes. The first five are SPICE
/// primitive elements; everything else instantiates a subcircuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Resistor,
    Inductor,
    Capacitor,
    Transistor,
    Diode,
    Subcircuit,
}

/// A per-component pin name or number
///
/// Pins order numerically when they are all digits and lexicographically
/// otherwise, with numbered pins ahead of named ones. Equal numbers fall back
/// to the string form so the order agrees with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PinId(pub String);

impl PinId {
    fn number(&self) -> Option<u64> {
        if !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl Ord for PinId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for PinId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for PinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A component value resolved from a definition clause.
///
/// `NoModel` marks clauses that carried no usable value; it becomes the
/// literal `NM` text only when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    NoModel,
    Model(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::NoModel => write!(f, "NM"),
            Value::Model(model) => write!(f, "{}", model),
        }
    }
}

/// Parse a raw Telesis document.
///
/// The only hard failure is a document with no `$NETS` marker; all other
/// irregular input resolves through the grammar's fallback rules.
pub fn parse(input: &str) -> Result<NetList, FormatError> {
    NetList::try_from(input)
}
