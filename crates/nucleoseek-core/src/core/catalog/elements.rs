use super::ElementDef;

/// The 118 known elements of the canonical IUPAC periodic table, ascending
/// by atomic number. Row/column pairs address the 18-column display grid.
#[rustfmt::skip]
pub(super) static ELEMENTS: [ElementDef; 118] = [
    ElementDef { atomic_number: 1, symbol: "H", name: "Hydrogen", display_row: 1, display_column: 1 },
    ElementDef { atomic_number: 2, symbol: "He", name: "Helium", display_row: 1, display_column: 18 },
    ElementDef { atomic_number: 3, symbol: "Li", name: "Lithium", display_row: 2, display_column: 1 },
    ElementDef { atomic_number: 4, symbol: "Be", name: "Beryllium", display_row: 2, display_column: 2 },
    ElementDef { atomic_number: 5, symbol: "B", name: "Boron", display_row: 2, display_column: 13 },
    ElementDef { atomic_number: 6, symbol: "C", name: "Carbon", display_row: 2, display_column: 14 },
    ElementDef { atomic_number: 7, symbol: "N", name: "Nitrogen", display_row: 2, display_column: 15 },
    ElementDef { atomic_number: 8, symbol: "O", name: "Oxygen", display_row: 2, display_column: 16 },
    ElementDef { atomic_number: 9, symbol: "F", name: "Fluorine", display_row: 2, display_column: 17 },
    ElementDef { atomic_number: 10, symbol: "Ne", name: "Neon", display_row: 2, display_column: 18 },
    ElementDef { atomic_number: 11, symbol: "Na", name: "Sodium", display_row: 3, display_column: 1 },
    ElementDef { atomic_number: 12, symbol: "Mg", name: "Magnesium", display_row: 3, display_column: 2 },
    ElementDef { atomic_number: 13, symbol: "Al", name: "Aluminium", display_row: 3, display_column: 13 },
    ElementDef { atomic_number: 14, symbol: "Si", name: "Silicon", display_row: 3, display_column: 14 },
    ElementDef { atomic_number: 15, symbol: "P", name: "Phosphorus", display_row: 3, display_column: 15 },
    ElementDef { atomic_number: 16, symbol: "S", name: "Sulfur", display_row: 3, display_column: 16 },
    ElementDef { atomic_number: 17, symbol: "Cl", name: "Chlorine", display_row: 3, display_column: 17 },
    ElementDef { atomic_number: 18, symbol: "Ar", name: "Argon", display_row: 3, display_column: 18 },
    ElementDef { atomic_number: 19, symbol: "K", name: "Potassium", display_row: 4, display_column: 1 },
    ElementDef { atomic_number: 20, symbol: "Ca", name: "Calcium", display_row: 4, display_column: 2 },
    ElementDef { atomic_number: 21, symbol: "Sc", name: "Scandium", display_row: 4, display_column: 3 },
    ElementDef { atomic_number: 22, symbol: "Ti", name: "Titanium", display_row: 4, display_column: 4 },
    ElementDef { atomic_number: 23, symbol: "V", name: "Vanadium", display_row: 4, display_column: 5 },
    ElementDef { atomic_number: 24, symbol: "Cr", name: "Chromium", display_row: 4, display_column: 6 },
    ElementDef { atomic_number: 25, symbol: "Mn", name: "Manganese", display_row: 4, display_column: 7 },
    ElementDef { atomic_number: 26, symbol: "Fe", name: "Iron", display_row: 4, display_column: 8 },
    ElementDef { atomic_number: 27, symbol: "Co", name: "Cobalt", display_row: 4, display_column: 9 },
    ElementDef { atomic_number: 28, symbol: "Ni", name: "Nickel", display_row: 4, display_column: 10 },
    ElementDef { atomic_number: 29, symbol: "Cu", name: "Copper", display_row: 4, display_column: 11 },
    ElementDef { atomic_number: 30, symbol: "Zn", name: "Zinc", display_row: 4, display_column: 12 },
    ElementDef { atomic_number: 31, symbol: "Ga", name: "Gallium", display_row: 4, display_column: 13 },
    ElementDef { atomic_number: 32, symbol: "Ge", name: "Germanium", display_row: 4, display_column: 14 },
    ElementDef { atomic_number: 33, symbol: "As", name: "Arsenic", display_row: 4, display_column: 15 },
    ElementDef { atomic_number: 34, symbol: "Se", name: "Selenium", display_row: 4, display_column: 16 },
    ElementDef { atomic_number: 35, symbol: "Br", name: "Bromine", display_row: 4, display_column: 17 },
    ElementDef { atomic_number: 36, symbol: "Kr", name: "Krypton", display_row: 4, display_column: 18 },
    ElementDef { atomic_number: 37, symbol: "Rb", name: "Rubidium", display_row: 5, display_column: 1 },
    ElementDef { atomic_number: 38, symbol: "Sr", name: "Strontium", display_row: 5, display_column: 2 },
    ElementDef { atomic_number: 39, symbol: "Y", name: "Yttrium", display_row: 5, display_column: 3 },
    ElementDef { atomic_number: 40, symbol: "Zr", name: "Zirconium", display_row: 5, display_column: 4 },
    ElementDef { atomic_number: 41, symbol: "Nb", name: "Niobium", display_row: 5, display_column: 5 },
    ElementDef { atomic_number: 42, symbol: "Mo", name: "Molybdenum", display_row: 5, display_column: 6 },
    ElementDef { atomic_number: 43, symbol: "Tc", name: "Technetium", display_row: 5, display_column: 7 },
    ElementDef { atomic_number: 44, symbol: "Ru", name: "Ruthenium", display_row: 5, display_column: 8 },
    ElementDef { atomic_number: 45, symbol: "Rh", name: "Rhodium", display_row: 5, display_column: 9 },
    ElementDef { atomic_number: 46, symbol: "Pd", name: "Palladium", display_row: 5, display_column: 10 },
    ElementDef { atomic_number: 47, symbol: "Ag", name: "Silver", display_row: 5, display_column: 11 },
    ElementDef { atomic_number: 48, symbol: "Cd", name: "Cadmium", display_row: 5, display_column: 12 },
    ElementDef { atomic_number: 49, symbol: "In", name: "Indium", display_row: 5, display_column: 13 },
    ElementDef { atomic_number: 50, symbol: "Sn", name: "Tin", display_row: 5, display_column: 14 },
    ElementDef { atomic_number: 51, symbol: "Sb", name: "Antimony", display_row: 5, display_column: 15 },
    ElementDef { atomic_number: 52, symbol: "Te", name: "Tellurium", display_row: 5, display_column: 16 },
    ElementDef { atomic_number: 53, symbol: "I", name: "Iodine", display_row: 5, display_column: 17 },
    ElementDef { atomic_number: 54, symbol: "Xe", name: "Xenon", display_row: 5, display_column: 18 },
    ElementDef { atomic_number: 55, symbol: "Cs", name: "Caesium", display_row: 6, display_column: 1 },
    ElementDef { atomic_number: 56, symbol: "Ba", name: "Barium", display_row: 6, display_column: 2 },
    ElementDef { atomic_number: 57, symbol: "La", name: "Lanthanum", display_row: 8, display_column: 3 },
    ElementDef { atomic_number: 58, symbol: "Ce", name: "Cerium", display_row: 8, display_column: 4 },
    ElementDef { atomic_number: 59, symbol: "Pr", name: "Praseodymium", display_row: 8, display_column: 5 },
    ElementDef { atomic_number: 60, symbol: "Nd", name: "Neodymium", display_row: 8, display_column: 6 },
    ElementDef { atomic_number: 61, symbol: "Pm", name: "Promethium", display_row: 8, display_column: 7 },
    ElementDef { atomic_number: 62, symbol: "Sm", name: "Samarium", display_row: 8, display_column: 8 },
    ElementDef { atomic_number: 63, symbol: "Eu", name: "Europium", display_row: 8, display_column: 9 },
    ElementDef { atomic_number: 64, symbol: "Gd", name: "Gadolinium", display_row: 8, display_column: 10 },
    ElementDef { atomic_number: 65, symbol: "Tb", name: "Terbium", display_row: 8, display_column: 11 },
    ElementDef { atomic_number: 66, symbol: "Dy", name: "Dysprosium", display_row: 8, display_column: 12 },
    ElementDef { atomic_number: 67, symbol: "Ho", name: "Holmium", display_row: 8, display_column: 13 },
    ElementDef { atomic_number: 68, symbol: "Er", name: "Erbium", display_row: 8, display_column: 14 },
    ElementDef { atomic_number: 69, symbol: "Tm", name: "Thulium", display_row: 8, display_column: 15 },
    ElementDef { atomic_number: 70, symbol: "Yb", name: "Ytterbium", display_row: 8, display_column: 16 },
    ElementDef { atomic_number: 71, symbol: "Lu", name: "Lutetium", display_row: 8, display_column: 17 },
    ElementDef { atomic_number: 72, symbol: "Hf", name: "Hafnium", display_row: 6, display_column: 4 },
    ElementDef { atomic_number: 73, symbol: "Ta", name: "Tantalum", display_row: 6, display_column: 5 },
    ElementDef { atomic_number: 74, symbol: "W", name: "Tungsten", display_row: 6, display_column: 6 },
    ElementDef { atomic_number: 75, symbol: "Re", name: "Rhenium", display_row: 6, display_column: 7 },
    ElementDef { atomic_number: 76, symbol: "Os", name: "Osmium", display_row: 6, display_column: 8 },
    ElementDef { atomic_number: 77, symbol: "Ir", name: "Iridium", display_row: 6, display_column: 9 },
    ElementDef { atomic_number: 78, symbol: "Pt", name: "Platinum", display_row: 6, display_column: 10 },
    ElementDef { atomic_number: 79, symbol: "Au", name: "Gold", display_row: 6, display_column: 11 },
    ElementDef { atomic_number: 80, symbol: "Hg", name: "Mercury", display_row: 6, display_column: 12 },
    ElementDef { atomic_number: 81, symbol: "Tl", name: "Thallium", display_row: 6, display_column: 13 },
    ElementDef { atomic_number: 82, symbol: "Pb", name: "Lead", display_row: 6, display_column: 14 },
    ElementDef { atomic_number: 83, symbol: "Bi", name: "Bismuth", display_row: 6, display_column: 15 },
    ElementDef { atomic_number: 84, symbol: "Po", name: "Polonium", display_row: 6, display_column: 16 },
    ElementDef { atomic_number: 85, symbol: "At", name: "Astatine", display_row: 6, display_column: 17 },
    ElementDef { atomic_number: 86, symbol: "Rn", name: "Radon", display_row: 6, display_column: 18 },
    ElementDef { atomic_number: 87, symbol: "Fr", name: "Francium", display_row: 7, display_column: 1 },
    ElementDef { atomic_number: 88, symbol: "Ra", name: "Radium", display_row: 7, display_column: 2 },
    ElementDef { atomic_number: 89, symbol: "Ac", name: "Actinium", display_row: 9, display_column: 3 },
    ElementDef { atomic_number: 90, symbol: "Th", name: "Thorium", display_row: 9, display_column: 4 },
    ElementDef { atomic_number: 91, symbol: "Pa", name: "Protactinium", display_row: 9, display_column: 5 },
    ElementDef { atomic_number: 92, symbol: "U", name: "Uranium", display_row: 9, display_column: 6 },
    ElementDef { atomic_number: 93, symbol: "Np", name: "Neptunium", display_row: 9, display_column: 7 },
    ElementDef { atomic_number: 94, symbol: "Pu", name: "Plutonium", display_row: 9, display_column: 8 },
    ElementDef { atomic_number: 95, symbol: "Am", name: "Americium", display_row: 9, display_column: 9 },
    ElementDef { atomic_number: 96, symbol: "Cm", name: "Curium", display_row: 9, display_column: 10 },
    ElementDef { atomic_number: 97, symbol: "Bk", name: "Berkelium", display_row: 9, display_column: 11 },
    ElementDef { atomic_number: 98, symbol: "Cf", name: "Californium", display_row: 9, display_column: 12 },
    ElementDef { atomic_number: 99, symbol: "Es", name: "Einsteinium", display_row: 9, display_column: 13 },
    ElementDef { atomic_number: 100, symbol: "Fm", name: "Fermium", display_row: 9, display_column: 14 },
    ElementDef { atomic_number: 101, symbol: "Md", name: "Mendelevium", display_row: 9, display_column: 15 },
    ElementDef { atomic_number: 102, symbol: "No", name: "Nobelium", display_row: 9, display_column: 16 },
    ElementDef { atomic_number: 103, symbol: "Lr", name: "Lawrencium", display_row: 9, display_column: 17 },
    ElementDef { atomic_number: 104, symbol: "Rf", name: "Rutherfordium", display_row: 7, display_column: 4 },
    ElementDef { atomic_number: 105, symbol: "Db", name: "Dubnium", display_row: 7, display_column: 5 },
    ElementDef { atomic_number: 106, symbol: "Sg", name: "Seaborgium", display_row: 7, display_column: 6 },
    ElementDef { atomic_number: 107, symbol: "Bh", name: "Bohrium", display_row: 7, display_column: 7 },
    ElementDef { atomic_number: 108, symbol: "Hs", name: "Hassium", display_row: 7, display_column: 8 },
    ElementDef { atomic_number: 109, symbol: "Mt", name: "Meitnerium", display_row: 7, display_column: 9 },
    ElementDef { atomic_number: 110, symbol: "Ds", name: "Darmstadtium", display_row: 7, display_column: 10 },
    ElementDef { atomic_number: 111, symbol: "Rg", name: "Roentgenium", display_row: 7, display_column: 11 },
    ElementDef { atomic_number: 112, symbol: "Cn", name: "Copernicium", display_row: 7, display_column: 12 },
    ElementDef { atomic_number: 113, symbol: "Nh", name: "Nihonium", display_row: 7, display_column: 13 },
    ElementDef { atomic_number: 114, symbol: "Fl", name: "Flerovium", display_row: 7, display_column: 14 },
    ElementDef { atomic_number: 115, symbol: "Mc", name: "Moscovium", display_row: 7, display_column: 15 },
    ElementDef { atomic_number: 116, symbol: "Lv", name: "Livermorium", display_row: 7, display_column: 16 },
    ElementDef { atomic_number: 117, symbol: "Ts", name: "Tennessine", display_row: 7, display_column: 17 },
    ElementDef { atomic_number: 118, symbol: "Og", name: "Oganesson", display_row: 7, display_column: 18 },
];
