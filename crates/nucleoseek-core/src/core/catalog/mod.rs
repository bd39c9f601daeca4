mod elements;

use serde::Serialize;

/// A catalog entry for one known chemical element.
///
/// The display coordinates place the element in the conventional 18-column
/// periodic table: periods occupy rows 1 through 7, the lanthanide series sits
/// on row 8 and the actinide series on row 9, both spanning columns 3 to 17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementDef {
    /// The atomic number Z, in 1..=118.
    pub atomic_number: u32,
    /// The one- or two-letter IUPAC symbol.
    pub symbol: &'static str,
    /// The English element name.
    pub name: &'static str,
    /// The display row in the 18-column layout.
    pub display_row: u8,
    /// The display column in the 18-column layout.
    pub display_column: u8,
}

/// Returns the catalog entry for atomic number `z`, or `None` when `z` lies
/// outside the 118 known elements.
pub fn lookup(z: u32) -> Option<&'static ElementDef> {
    if z == 0 {
        return None;
    }
    elements::ELEMENTS.get(z as usize - 1)
}

/// All known elements in ascending atomic-number order.
pub fn all() -> &'static [ElementDef] {
    &elements::ELEMENTS
}
