/// A proper dihedral as listed by SMOG: four atom serials followed by the
/// function type and its coefficients, which are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DihedralRecord {
    pub atoms: [usize; 4],
    pub parameters: Vec<String>,
}

impl DihedralRecord {
    pub fn new(atoms: [usize; 4], parameters: Vec<String>) -> Self {
        Self { atoms, parameters }
    }
}

/// A nonbonded pair: two atom serials, the function type and coefficients,
/// and whether the pair only exists in the acidic-pH model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRecord {
    pub ai: usize,
    pub aj: usize,
    pub parameters: Vec<String>,
    pub acid: bool,
}

impl PairRecord {
    pub fn new(ai: usize, aj: usize, parameters: Vec<String>) -> Self {
        Self {
            ai,
            aj,
            parameters,
            acid: false,
        }
    }

    pub fn acid(mut self) -> Self {
        self.acid = true;
        self
    }
}
