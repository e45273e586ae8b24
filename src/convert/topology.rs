use super::dictionary::element_of;
use super::error::Error;
use crate::model::atom::AtomRecord;
use crate::model::topology::TopologyAtom;
use crate::model::types::Element;

/// Rebuilds the GROMOS atom listing as topology `[ atoms ]` rows: one charge
/// group per atom, and the element mass wherever the listing gave none.
pub fn gromos_topology(
    atoms: &[AtomRecord],
    fallback: Option<Element>,
) -> Result<Vec<TopologyAtom>, Error> {
    atoms
        .iter()
        .map(|atom| -> Result<TopologyAtom, Error> {
            let mass = match atom.mass {
                Some(mass) => mass,
                None => element_of(atom, fallback)?.atomic_mass(),
            };

            Ok(TopologyAtom {
                serial: atom.serial,
                atom_type: atom.atom_type.clone(),
                residue_index: atom.residue_index,
                residue_name: atom.residue_name.clone(),
                atom_name: atom.atom_name.clone(),
                charge_group: atom.serial,
                charge: atom.charge,
                mass,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_splits_charge_groups() {
        let mut n = AtomRecord::new(1, "NL", 1, "MET", "N");
        n.charge_group = 1;
        n.charge = 0.129;
        n.mass = Some(14.0067);
        let mut h = AtomRecord::new(2, "H", 1, "MET", "H1");
        h.charge_group = 1;
        h.charge = 0.248;

        let rows = gromos_topology(&[n, h], None).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].serial, 1);
        assert_eq!(rows[0].mass, 14.0067);
        assert_eq!(rows[0].charge, 0.129);
        assert_eq!(rows[1].charge_group, 2);
        assert_eq!(rows[1].mass, Element::H.atomic_mass());
        assert_eq!(rows[1].atom_type, "H");
    }

    #[test]
    fn unknown_element_without_mass_is_fatal() {
        let err = gromos_topology(&[AtomRecord::new(3, "DUM", 1, "UNK", "XX")], None).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { serial: 3, .. }));
    }

    #[test]
    fn fallback_element_fills_missing_mass() {
        let mut site = AtomRecord::new(4, "MW", 1, "SOL", "MW");
        site.mass = Some(0.0);
        let dummy = AtomRecord::new(5, "DUM", 2, "DUM", "DUM");

        let rows = gromos_topology(&[site, dummy], Some(Element::H)).unwrap();

        assert_eq!(rows[0].mass, 0.0);
        assert_eq!(rows[1].mass, Element::H.atomic_mass());
        assert_eq!(rows[1].charge_group, 5);
    }
}
