//! Federal entity codes embedded at positions 11..13 of a CURP.
//!
//! The table is closed: 31 states, Mexico City, and the `NE` sentinel for
//! people born abroad. It is initialized once and never mutated.

use std::collections::BTreeMap;
use std::sync::LazyLock;

static ENTITIES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("AG", "Aguascalientes"),
        ("BC", "Baja California"),
        ("BS", "Baja California Sur"),
        ("CC", "Campeche"),
        ("CL", "Coahuila"),
        ("CM", "Colima"),
        ("CS", "Chiapas"),
        ("CH", "Chihuahua"),
        ("DF", "Ciudad de México"),
        ("DG", "Durango"),
        ("GT", "Guanajuato"),
        ("GR", "Guerrero"),
        ("HG", "Hidalgo"),
        ("JC", "Jalisco"),
        ("MC", "México"),
        ("MN", "Michoacán"),
        ("MS", "Morelos"),
        ("NT", "Nayarit"),
        ("NL", "Nuevo León"),
        ("OC", "Oaxaca"),
        ("PL", "Puebla"),
        ("QT", "Querétaro"),
        ("QR", "Quintana Roo"),
        ("SP", "San Luis Potosí"),
        ("SL", "Sinaloa"),
        ("SR", "Sonora"),
        ("TC", "Tabasco"),
        ("TS", "Tamaulipas"),
        ("TL", "Tlaxcala"),
        ("VZ", "Veracruz"),
        ("YN", "Yucatán"),
        ("ZS", "Zacatecas"),
        ("NE", "Nacido en el Extranjero"),
    ])
});

/// Resolve an entity code to its full name.
pub fn entity_name(code: &str) -> Option<&'static str> {
    ENTITIES.get(code).copied()
}

/// Membership test against the closed entity table.
pub fn is_entity_code(code: &str) -> bool {
    ENTITIES.contains_key(code)
}

/// The full code -> name table, ordered by code.
pub fn entity_table() -> impl Iterator<Item = (&'static str, &'static str)> {
    ENTITIES.iter().map(|(code, name)| (*code, *name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_thirty_three_entries() {
        assert_eq!(entity_table().count(), 33);
    }

    #[test]
    fn resolves_known_codes() {
        assert_eq!(entity_name("DF"), Some("Ciudad de México"));
        assert_eq!(entity_name("NE"), Some("Nacido en el Extranjero"));
        assert_eq!(entity_name("ZS"), Some("Zacatecas"));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(!is_entity_code("XX"));
        assert!(!is_entity_code("df"));
        assert!(!is_entity_code(""));
    }
}
