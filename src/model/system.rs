use super::atom::Atom;

#[derive(Debug, Clone, Default)]
pub struct System {
    pub atoms: Vec<Atom>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a system from parallel coordinate and atomic-number arrays.
    ///
    /// # Panics
    ///
    /// Panics if the two arrays differ in length.
    pub fn from_arrays(coordinates: &[[f64; 3]], numbers: &[u8]) -> Self {
        assert_eq!(
            coordinates.len(),
            numbers.len(),
            "coordinates and numbers must have the same length"
        );
        Self {
            atoms: coordinates
                .iter()
                .zip(numbers)
                .map(|(&position, &number)| Atom::new(number, position))
                .collect(),
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns `true` if any atom carries the given atomic number.
    pub fn contains_number(&self, number: u8) -> bool {
        self.atoms.iter().any(|atom| atom.number == number)
    }
}
