use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of valence functional forms.
///
/// Discriminants are stable and shared with C callers of the FFI crate.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermKind {
    Harmonic = 0,
    #[serde(rename = "polyfour")]
    PolyFour = 1,
    Fues = 2,
    Cross = 3,
    Cosine = 4,
    Chebychev1 = 5,
    Chebychev2 = 6,
}

impl TermKind {
    pub const COUNT: usize = 7;

    pub const ALL: [TermKind; Self::COUNT] = [
        TermKind::Harmonic,
        TermKind::PolyFour,
        TermKind::Fues,
        TermKind::Cross,
        TermKind::Cosine,
        TermKind::Chebychev1,
        TermKind::Chebychev2,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            TermKind::Harmonic => "harmonic",
            TermKind::PolyFour => "polyfour",
            TermKind::Fues => "fues",
            TermKind::Cross => "cross",
            TermKind::Cosine => "cosine",
            TermKind::Chebychev1 => "chebychev1",
            TermKind::Chebychev2 => "chebychev2",
        }
    }

    /// Number of internal coordinates a term of this kind depends on.
    pub fn coordinate_count(self) -> usize {
        match self {
            TermKind::Cross => 2,
            _ => 1,
        }
    }

    /// Number of leading parameter slots a term of this kind reads.
    pub fn parameter_count(self) -> usize {
        match self {
            TermKind::Harmonic | TermKind::Fues => 2,
            TermKind::PolyFour => 4,
            TermKind::Cross | TermKind::Cosine => 3,
            TermKind::Chebychev1 | TermKind::Chebychev2 => 1,
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TermKind {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TermKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TermError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TermError {
    #[error("Unknown valence term kind '{0}'")]
    UnknownKind(String),
    #[error("A {kind} term needs {expected} internal coordinate(s), got {found}")]
    WrongCoordinateCount {
        kind: TermKind,
        expected: usize,
        found: usize,
    },
    #[error("A {kind} term needs {expected} parameter(s), got {found}")]
    WrongParameterCount {
        kind: TermKind,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TopologyError {
    #[error("Term {term} references internal coordinate {index}, but only {len} exist")]
    CoordinateOutOfRange {
        term: usize,
        index: usize,
        len: usize,
    },
}

/// One valence interaction term.
///
/// The layout is shared with C callers: a kind tag, two coordinate indices (`ic1` only
/// read by [`TermKind::Cross`]), four parameter slots and the energy written by the
/// most recent forward pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValenceTerm {
    pub kind: TermKind,
    pub ic0: usize,
    pub ic1: usize,
    pub pars: [f64; 4],
    pub energy: f64,
}

impl ValenceTerm {
    fn single(kind: TermKind, ic: usize, pars: [f64; 4]) -> Self {
        Self {
            kind,
            ic0: ic,
            ic1: 0,
            pars,
            energy: 0.0,
        }
    }

    /// `0.5·k·(x−x0)²`
    pub fn harmonic(ic: usize, force_constant: f64, rest_value: f64) -> Self {
        Self::single(TermKind::Harmonic, ic, [force_constant, rest_value, 0.0, 0.0])
    }

    /// `c1·x + c2·x² + c3·x³ + c4·x⁴`
    pub fn polyfour(ic: usize, coeffs: [f64; 4]) -> Self {
        Self::single(TermKind::PolyFour, ic, coeffs)
    }

    /// Fues potential, `0.5·k·x0²·(1 + u(u−2))` with `u = x0/x`.
    pub fn fues(ic: usize, force_constant: f64, rest_value: f64) -> Self {
        Self::single(TermKind::Fues, ic, [force_constant, rest_value, 0.0, 0.0])
    }

    /// `k·(x−x0)·(y−y0)`
    pub fn cross(ic0: usize, ic1: usize, force_constant: f64, rest0: f64, rest1: f64) -> Self {
        Self {
            kind: TermKind::Cross,
            ic0,
            ic1,
            pars: [force_constant, rest0, rest1, 0.0],
            energy: 0.0,
        }
    }

    /// `0.5·A·(1 − cos(m·(x−φ0)))`
    pub fn cosine(ic: usize, multiplicity: f64, amplitude: f64, rest_value: f64) -> Self {
        Self::single(TermKind::Cosine, ic, [multiplicity, amplitude, rest_value, 0.0])
    }

    /// `0.5·A·(1−x)`, usually applied to a cosine of a dihedral.
    pub fn chebychev1(ic: usize, amplitude: f64) -> Self {
        Self::single(TermKind::Chebychev1, ic, [amplitude, 0.0, 0.0, 0.0])
    }

    /// `A·(1−x²)`
    pub fn chebychev2(ic: usize, amplitude: f64) -> Self {
        Self::single(TermKind::Chebychev2, ic, [amplitude, 0.0, 0.0, 0.0])
    }

    /// Builds a term from untyped parts, checking coordinate and parameter arity.
    pub fn from_parts(kind: TermKind, ics: &[usize], pars: &[f64]) -> Result<Self, TermError> {
        if ics.len() != kind.coordinate_count() {
            return Err(TermError::WrongCoordinateCount {
                kind,
                expected: kind.coordinate_count(),
                found: ics.len(),
            });
        }
        if pars.len() != kind.parameter_count() {
            return Err(TermError::WrongParameterCount {
                kind,
                expected: kind.parameter_count(),
                found: pars.len(),
            });
        }

        let mut slots = [0.0; 4];
        slots[..pars.len()].copy_from_slice(pars);
        Ok(Self {
            kind,
            ic0: ics[0],
            ic1: ics.get(1).copied().unwrap_or(0),
            pars: slots,
            energy: 0.0,
        })
    }

    /// Checks that every coordinate this term reads exists in a table of `len` entries.
    pub fn check_coordinates(&self, position: usize, len: usize) -> Result<(), TopologyError> {
        match self.coordinates().find(|&index| index >= len) {
            Some(index) => Err(TopologyError::CoordinateOutOfRange {
                term: position,
                index,
                len,
            }),
            None => Ok(()),
        }
    }

    /// Coordinate indices this term actually reads.
    pub fn coordinates(&self) -> impl Iterator<Item = usize> {
        let second = (self.kind.coordinate_count() == 2).then_some(self.ic1);
        std::iter::once(self.ic0).chain(second)
    }
}
