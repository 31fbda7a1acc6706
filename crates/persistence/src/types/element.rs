//! The element record and its filterable fields.

// Fields are documented by the dataset column they serialize as
#![allow(missing_docs)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// One chemical element as stored in the dataset.
///
/// Field order matches the wire schema, and every field serializes under its
/// dataset column name. Absent measurements are `None` and serialize as `null`.
/// The classification flags (`Radioactive`, `Natural`, `Metal`, `Nonmetal`,
/// `Metalloid`) stay string-typed: the dataset stores them as short tokens
/// such as `"yes"`, and the wire contract keeps them that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "AtomicNumber")]
    pub atomic_number: i64,

    #[serde(rename = "Element")]
    pub name: String,

    #[serde(rename = "Symbol")]
    pub symbol: String,

    #[serde(rename = "AtomicMass", default)]
    pub atomic_mass: Option<f64>,

    #[serde(rename = "NumberofNeutrons", default)]
    pub number_of_neutrons: Option<i64>,

    #[serde(rename = "NumberofProtons", default)]
    pub number_of_protons: Option<i64>,

    #[serde(rename = "NumberofElectrons", default)]
    pub number_of_electrons: Option<i64>,

    #[serde(rename = "Period", default)]
    pub period: Option<i64>,

    #[serde(rename = "Group", default)]
    pub group: Option<i64>,

    #[serde(rename = "Phase", default)]
    pub phase: Option<String>,

    #[serde(rename = "Radioactive", default)]
    pub radioactive: Option<String>,

    #[serde(rename = "Natural", default)]
    pub natural: Option<String>,

    #[serde(rename = "Metal", default)]
    pub metal: Option<String>,

    #[serde(rename = "Nonmetal", default)]
    pub nonmetal: Option<String>,

    #[serde(rename = "Metalloid", default)]
    pub metalloid: Option<String>,

    #[serde(rename = "Type", default)]
    pub element_type: Option<String>,

    #[serde(rename = "AtomicRadius", default)]
    pub atomic_radius: Option<f64>,

    #[serde(rename = "Electronegativity", default)]
    pub electronegativity: Option<f64>,

    #[serde(rename = "FirstIonization", default)]
    pub first_ionization: Option<f64>,

    #[serde(rename = "Density", default)]
    pub density: Option<f64>,

    #[serde(rename = "MeltingPoint", default)]
    pub melting_point: Option<f64>,

    #[serde(rename = "BoilingPoint", default)]
    pub boiling_point: Option<f64>,

    #[serde(rename = "NumberOfIsotopes", default)]
    pub number_of_isotopes: Option<i64>,

    #[serde(rename = "Discoverer", default)]
    pub discoverer: Option<String>,

    #[serde(rename = "Year", default)]
    pub year: Option<i64>,

    #[serde(rename = "SpecificHeat", default)]
    pub specific_heat: Option<f64>,

    #[serde(rename = "NumberofShells", default)]
    pub number_of_shells: Option<i64>,

    #[serde(rename = "NumberofValence", default)]
    pub number_of_valence: Option<i64>,
}

impl Element {
    /// Creates an element with only its identity populated.
    pub fn new(atomic_number: i64, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            atomic_number,
            name: name.into(),
            symbol: symbol.into(),
            atomic_mass: None,
            number_of_neutrons: None,
            number_of_protons: None,
            number_of_electrons: None,
            period: None,
            group: None,
            phase: None,
            radioactive: None,
            natural: None,
            metal: None,
            nonmetal: None,
            metalloid: None,
            element_type: None,
            atomic_radius: None,
            electronegativity: None,
            first_ionization: None,
            density: None,
            melting_point: None,
            boiling_point: None,
            number_of_isotopes: None,
            discoverer: None,
            year: None,
            specific_heat: None,
            number_of_shells: None,
            number_of_valence: None,
        }
    }

    /// Returns the value of a numeric filter field.
    pub fn numeric(&self, field: NumericField) -> Option<i64> {
        match field {
            NumericField::AtomicNumber => Some(self.atomic_number),
            NumericField::Period => self.period,
            NumericField::Group => self.group,
        }
    }

    /// Returns the value of a text filter field.
    pub fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(&self.name),
            TextField::Symbol => Some(&self.symbol),
            TextField::Type => self.element_type.as_deref(),
            TextField::Phase => self.phase.as_deref(),
            TextField::Radioactive => self.radioactive.as_deref(),
            TextField::Natural => self.natural.as_deref(),
            TextField::Metal => self.metal.as_deref(),
            TextField::Nonmetal => self.nonmetal.as_deref(),
            TextField::Metalloid => self.metalloid.as_deref(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.symbol, self.name)
    }
}

/// Integer columns that support exact-match filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    AtomicNumber,
    Period,
    Group,
}

impl NumericField {
    /// Returns the dataset column name.
    pub fn column(&self) -> &'static str {
        match self {
            NumericField::AtomicNumber => "AtomicNumber",
            NumericField::Period => "Period",
            NumericField::Group => "Group",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// String columns that support case-insensitive filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// The element name, stored in the `Element` column.
    Name,
    Symbol,
    Type,
    Phase,
    Radioactive,
    Natural,
    Metal,
    Nonmetal,
    Metalloid,
}

impl TextField {
    /// Returns the dataset column name.
    pub fn column(&self) -> &'static str {
        match self {
            TextField::Name => "Element",
            TextField::Symbol => "Symbol",
            TextField::Type => "Type",
            TextField::Phase => "Phase",
            TextField::Radioactive => "Radioactive",
            TextField::Natural => "Natural",
            TextField::Metal => "Metal",
            TextField::Nonmetal => "Nonmetal",
            TextField::Metalloid => "Metalloid",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
