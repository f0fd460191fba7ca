use crate::core::models::term::{TermKind, ValenceTerm};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Energy split by functional form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KindEnergies {
    by_kind: [f64; TermKind::COUNT],
}

impl KindEnergies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the energies stored on the terms by the most recent forward pass.
    pub fn from_terms(terms: &[ValenceTerm]) -> Self {
        let mut energies = Self::default();
        for term in terms {
            energies.record(term.kind, term.energy);
        }
        energies
    }

    #[inline]
    pub fn record(&mut self, kind: TermKind, energy: f64) {
        self.by_kind[kind.index()] += energy;
    }

    #[inline]
    pub fn get(&self, kind: TermKind) -> f64 {
        self.by_kind[kind.index()]
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.by_kind.iter().sum()
    }

    /// Kinds with their energies, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = (TermKind, f64)> + '_ {
        TermKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl Add for KindEnergies {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for KindEnergies {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.by_kind.iter_mut().zip(rhs.by_kind) {
            *lhs += rhs;
        }
    }
}

impl Sum for KindEnergies {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, energies| acc + energies)
    }
}
