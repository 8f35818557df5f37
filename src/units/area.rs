use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 면적 단위. 메뉴에 표시되는 순서를 그대로 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMetres,
    SquareKilometers,
    SquareMiles,
    SquareInches,
    SquareFeet,
    SquareYards,
    Hectares,
    Acres,
}

impl MetricUnit for AreaUnit {
    const ALL: &'static [Self] = &[
        AreaUnit::SquareMetres,
        AreaUnit::SquareKilometers,
        AreaUnit::SquareMiles,
        AreaUnit::SquareInches,
        AreaUnit::SquareFeet,
        AreaUnit::SquareYards,
        AreaUnit::Hectares,
        AreaUnit::Acres,
    ];

    fn name(self) -> &'static str {
        match self {
            AreaUnit::SquareMetres => "Square Metres",
            AreaUnit::SquareKilometers => "Square Kilometers",
            AreaUnit::SquareMiles => "Square Miles",
            AreaUnit::SquareInches => "Square Inches",
            AreaUnit::SquareFeet => "Square Feet",
            AreaUnit::SquareYards => "Square Yards",
            AreaUnit::Hectares => "Hectares",
            AreaUnit::Acres => "Acres",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use AreaUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (SquareMetres, SquareKilometers) => Divide(1e+6),
            (SquareMetres, SquareMiles) => Divide(2589988.10),
            (SquareMetres, SquareYards) => Multiply(1.1959900463),
            (SquareMetres, SquareFeet) => Multiply(10.76391042),
            (SquareMetres, SquareInches) => Multiply(1550.0),
            (SquareMetres, Hectares) => Divide(10000.0),
            (SquareMetres, Acres) => Divide(4046.86),
            (SquareKilometers, SquareMetres) => Multiply(1e+6),
            (SquareKilometers, SquareMiles) => Divide(2.58999),
            (SquareKilometers, SquareYards) => Multiply(1195990.05),
            (SquareKilometers, SquareFeet) => Multiply(10763910.41671),
            (SquareKilometers, SquareInches) => Multiply(1550003100.00),
            (SquareKilometers, Hectares) => Multiply(100.0),
            (SquareKilometers, Acres) => Multiply(247.105),
            (Acres, SquareKilometers) => Divide(247.105),
            (Acres, SquareMetres) => Multiply(4046.86),
            (Acres, SquareMiles) => Divide(640.0),
            (Acres, SquareYards) => Multiply(4840.0),
            (Acres, SquareFeet) => Multiply(43560.0),
            (Acres, SquareInches) => Multiply(6272640.0),
            (Acres, Hectares) => Divide(2.4710538146717),
            (Hectares, SquareKilometers) => Divide(100.0),
            (Hectares, SquareMetres) => Multiply(10000.0),
            (Hectares, SquareMiles) => Divide(258.99881103),
            (Hectares, SquareYards) => Multiply(11959.900463011),
            (Hectares, SquareFeet) => Multiply(107639.0),
            (Hectares, SquareInches) => Multiply(15500031.0),
            (Hectares, Acres) => Multiply(2.4710538146717),
            (SquareFeet, SquareKilometers) => Divide(10763910.41671),
            (SquareFeet, SquareMetres) => Divide(10.76391042),
            (SquareFeet, SquareMiles) => Divide(27878400.0),
            (SquareFeet, SquareYards) => Divide(9.0),
            (SquareFeet, SquareInches) => Multiply(144.0),
            (SquareFeet, Hectares) => Divide(107639.0),
            (SquareFeet, Acres) => Divide(43560.0),
            (SquareInches, SquareKilometers) => Divide(1550003100.00),
            (SquareInches, SquareMetres) => Divide(1550.0),
            (SquareInches, SquareMiles) => Divide(4014489600.0),
            (SquareInches, SquareYards) => Divide(1296.0),
            (SquareInches, SquareFeet) => Divide(144.0),
            (SquareInches, Hectares) => Divide(15500031.0),
            (SquareInches, Acres) => Divide(6272640.0),
            (SquareMiles, SquareKilometers) => Multiply(2.58999),
            (SquareMiles, SquareMetres) => Multiply(2589988.10),
            (SquareMiles, SquareYards) => Multiply(3097600.0),
            (SquareMiles, SquareFeet) => Multiply(27878400.0),
            (SquareMiles, SquareInches) => Multiply(4014489600.0),
            (SquareMiles, Hectares) => Multiply(258.99881103),
            (SquareMiles, Acres) => Multiply(640.0),
            (SquareYards, SquareKilometers) => Divide(1195990.05),
            (SquareYards, SquareMetres) => Divide(1.1959900463),
            (SquareYards, SquareMiles) => Divide(3097600.0),
            (SquareYards, SquareFeet) => Multiply(9.0),
            (SquareYards, SquareInches) => Multiply(1296.0),
            (SquareYards, Hectares) => Divide(11959.900463011),
            (SquareYards, Acres) => Divide(4840.0),
            _ => return None,
        };
        Some(rule)
    }
}

/// 면적을 다른 단위로 변환한다.
pub fn convert_area(
    value: f64,
    from: AreaUnit,
    to: AreaUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
