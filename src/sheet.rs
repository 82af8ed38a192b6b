//! The three-column parameter sheet printed under the drawing.

use std::fmt;

use crate::field::Field;
use crate::format::{fmt_num, format_radius};
use crate::params::{LensParameters, Material, Side, Surface, SurfaceType};

/// One labelled value of the sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub label: &'static str,
    pub value: String,
    /// The field an edit of this row goes to; `None` for read-only rows
    pub field: Option<Field>,
}

impl SheetRow {
    fn new(label: &'static str, value: impl Into<String>, field: Option<Field>) -> Self {
        Self {
            label,
            value: value.into(),
            field,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetColumn {
    pub title: &'static str,
    pub rows: Vec<SheetRow>,
}

impl SheetColumn {
    /// First row with the given label
    pub fn row(&self, label: &str) -> Option<&SheetRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

impl fmt::Display for SheetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for row in &self.rows {
            if row.label.is_empty() {
                write!(f, "\n    {}", row.value)?;
            } else {
                write!(f, "\n{}: {}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}

/// LEFT SURFACE | MATERIAL | RIGHT SURFACE
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSheet {
    pub left: SheetColumn,
    pub material: SheetColumn,
    pub right: SheetColumn,
}

impl ParameterSheet {
    pub fn new(params: &LensParameters) -> Self {
        Self {
            left: surface_column("LEFT SURFACE", Side::Left, params.surface(Side::Left)),
            material: material_column(&params.material),
            right: surface_column("RIGHT SURFACE", Side::Right, params.surface(Side::Right)),
        }
    }

    pub fn columns(&self) -> [&SheetColumn; 3] {
        [&self.left, &self.material, &self.right]
    }
}

/// Surface type as offered in the type selector
pub fn type_label(kind: SurfaceType) -> &'static str {
    match kind {
        SurfaceType::Plano => "∞",
        other => other.code(),
    }
}

fn surface_column(title: &'static str, side: Side, surface: &Surface) -> SheetColumn {
    // A flat surface has no radius to edit
    let radius_field = (!surface.kind.is_plano()).then_some(Field::Radius(side));
    let mut rows = vec![
        SheetRow::new("R (mm)", format_radius(surface.radius, surface.kind), radius_field),
        SheetRow::new("TYPE", type_label(surface.kind), Some(Field::Type(side))),
        SheetRow::new("∅e", format!("{} MIN", fmt_num(surface.effective_diameter.raw())), None),
        SheetRow::new(
            "PROT. CHAMFER",
            fmt_num(surface.chamfer.raw()),
            Some(Field::Chamfer(side)),
        ),
        SheetRow::new("⊚λ", fmt_num(surface.wavelength), Some(Field::Wavelength(side))),
    ];

    let mut coating = surface.anti_reflection.lines();
    rows.push(SheetRow::new(
        "3/",
        coating.next().unwrap_or_default(),
        Some(Field::AntiReflection(side)),
    ));
    rows.extend(coating.map(|line| SheetRow::new("", line, Some(Field::AntiReflection(side)))));

    rows.extend([
        SheetRow::new("4/", surface.bevel.as_str(), Some(Field::Bevel(side))),
        SheetRow::new("5/", surface.imperfections.as_str(), Some(Field::Imperfections(side))),
        SheetRow::new("6/", surface.laser_damage.as_str(), Some(Field::LaserDamage(side))),
    ]);

    SheetColumn { title, rows }
}

fn material_column(material: &Material) -> SheetColumn {
    SheetColumn {
        title: "MATERIAL",
        rows: vec![
            SheetRow::new("GLASS", material.glass.to_uppercase(), Some(Field::Glass)),
            SheetRow::new("Nd", fmt_num(material.nd_tolerance), Some(Field::NdTolerance)),
            SheetRow::new("Vd", fmt_num(material.vd_tolerance), Some(Field::VdTolerance)),
            SheetRow::new("0/", material.bubbles.as_str(), Some(Field::Bubbles)),
            SheetRow::new("1/", material.inclusions.as_str(), Some(Field::Inclusions)),
            SheetRow::new("2/", material.stress.as_str(), Some(Field::Stress)),
        ],
    }
}
