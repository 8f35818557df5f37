use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 체적 단위. 영국식(임페리얼) 계량 단위를 포함한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    Millilitres,
    Litres,
    Kilolitres,
    Teaspoons,
    Tablespoons,
    Quarts,
    Pints,
    Gallons,
    FluidOunces,
    CubicMetres,
    CubicFeet,
    CubicInches,
    OilBarrels,
}

impl MetricUnit for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Millilitres,
        VolumeUnit::Litres,
        VolumeUnit::Kilolitres,
        VolumeUnit::Teaspoons,
        VolumeUnit::Tablespoons,
        VolumeUnit::Quarts,
        VolumeUnit::Pints,
        VolumeUnit::Gallons,
        VolumeUnit::FluidOunces,
        VolumeUnit::CubicMetres,
        VolumeUnit::CubicFeet,
        VolumeUnit::CubicInches,
        VolumeUnit::OilBarrels,
    ];

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::Millilitres => "Millilitres",
            VolumeUnit::Litres => "Litres",
            VolumeUnit::Kilolitres => "Kilolitres",
            VolumeUnit::Teaspoons => "Teaspoons",
            VolumeUnit::Tablespoons => "Tablespoons",
            VolumeUnit::Quarts => "Quarts",
            VolumeUnit::Pints => "Pints",
            VolumeUnit::Gallons => "Gallons",
            VolumeUnit::FluidOunces => "Fluid Ounces",
            VolumeUnit::CubicMetres => "Cubic Metres",
            VolumeUnit::CubicFeet => "Cubic Feet",
            VolumeUnit::CubicInches => "Cubic Inches",
            VolumeUnit::OilBarrels => "Oil Barrels",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use VolumeUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Millilitres, Litres) => Divide(1000.0),
            (Millilitres, Kilolitres) => Divide(1000000.0),
            (Millilitres, Teaspoons) => Divide(5.9193904674479161344),
            (Millilitres, Tablespoons) => Divide(17.758171402343747584),
            (Millilitres, Quarts) => Divide(1136.52296975),
            (Millilitres, Pints) => Divide(568.26148487499988992),
            (Millilitres, Gallons) => Divide(4546.091879),
            (Millilitres, FluidOunces) => Divide(28.413074243749994496),
            (Millilitres, CubicMetres) => Divide(1000000.0),
            (Millilitres, CubicFeet) => Divide(28316.8),
            (Millilitres, CubicInches) => Divide(16.3871),
            (Millilitres, OilBarrels) => Divide(158987.0),
            (Litres, Millilitres) => Multiply(1000.0),
            (Litres, Kilolitres) => Divide(1000.0),
            (Litres, Teaspoons) => Divide(0.005919390467447916134),
            (Litres, Tablespoons) => Divide(0.017758171402343747584),
            (Litres, Quarts) => Divide(1.13652296975),
            (Litres, Pints) => Divide(0.56826148487499988992),
            (Litres, Gallons) => Divide(4.546091879),
            (Litres, FluidOunces) => Divide(0.028413074243749994496),
            (Litres, CubicMetres) => Divide(1000.0),
            (Litres, CubicFeet) => Divide(28.3168),
            (Litres, CubicInches) => Multiply(61.0237),
            (Litres, OilBarrels) => Divide(158.987),
            (Kilolitres, Millilitres) => Multiply(1000000.0),
            (Kilolitres, Litres) => Multiply(1000.0),
            (Kilolitres, Teaspoons) => Divide(0.000005919390467447916),
            (Kilolitres, Tablespoons) => Divide(0.000017758171402343747),
            (Kilolitres, Quarts) => Divide(0.00113652296975),
            (Kilolitres, Pints) => Divide(0.000568261484874999889),
            (Kilolitres, Gallons) => Divide(0.0045460918799),
            (Kilolitres, FluidOunces) => Divide(0.0000284130742437499946),
            (Kilolitres, CubicMetres) => Multiply(1.0),
            (Kilolitres, CubicFeet) => Multiply(35.3147),
            (Kilolitres, CubicInches) => Multiply(61023.7),
            (Kilolitres, OilBarrels) => Multiply(6.28981),
            (Teaspoons, Millilitres) => Multiply(5.9193904674479161344),
            (Teaspoons, Litres) => Multiply(0.005919390467447916134),
            (Teaspoons, Kilolitres) => Multiply(0.000005919390467447916),
            (Teaspoons, Tablespoons) => Divide(3.0),
            (Teaspoons, Quarts) => Divide(192.0),
            (Teaspoons, Pints) => Divide(96.0),
            (Teaspoons, Gallons) => Divide(768.0),
            (Teaspoons, FluidOunces) => Divide(4.8),
            (Teaspoons, CubicMetres) => Divide(168936.0),
            (Teaspoons, CubicFeet) => Divide(4783.74),
            (Teaspoons, CubicInches) => Divide(2.76837),
            (Teaspoons, OilBarrels) => Divide(26858.7),
            (Tablespoons, Millilitres) => Multiply(17.758171402343747584),
            (Tablespoons, Litres) => Multiply(0.017758171402343747584),
            (Tablespoons, Kilolitres) => Multiply(0.000017758171402343747),
            (Tablespoons, Teaspoons) => Multiply(3.0),
            (Tablespoons, Quarts) => Divide(64.0),
            (Tablespoons, Pints) => Divide(32.0),
            (Tablespoons, Gallons) => Divide(256.0),
            (Tablespoons, FluidOunces) => Divide(1.6),
            (Tablespoons, CubicMetres) => Divide(56312.1),
            (Tablespoons, CubicFeet) => Divide(1594.58),
            (Tablespoons, CubicInches) => Multiply(1.08367),
            (Tablespoons, OilBarrels) => Divide(8952.91),
            (Quarts, Millilitres) => Multiply(1136.52296975),
            (Quarts, Litres) => Multiply(1.13652296975),
            (Quarts, Kilolitres) => Multiply(0.00113652296975),
            (Quarts, Teaspoons) => Multiply(192.0),
            (Quarts, Tablespoons) => Multiply(64.0),
            (Quarts, Pints) => Multiply(2.0),
            (Quarts, Gallons) => Divide(4.0),
            (Quarts, FluidOunces) => Multiply(40.0),
            (Quarts, CubicMetres) => Divide(879.877),
            (Quarts, CubicFeet) => Divide(24.9153),
            (Quarts, CubicInches) => Multiply(69.3549),
            (Quarts, OilBarrels) => Divide(139.889),
            (Pints, Millilitres) => Multiply(568.26148487499988992),
            (Pints, Litres) => Multiply(0.56826148487499988992),
            (Pints, Kilolitres) => Multiply(0.000568261484874999889),
            (Pints, Teaspoons) => Multiply(96.0),
            (Pints, Tablespoons) => Multiply(32.0),
            (Pints, Quarts) => Divide(2.0),
            (Pints, Gallons) => Divide(8.0),
            (Pints, FluidOunces) => Multiply(20.0),
            (Pints, CubicMetres) => Divide(1759.75),
            (Pints, CubicFeet) => Divide(49.8307),
            (Pints, CubicInches) => Multiply(34.6774),
            (Pints, OilBarrels) => Divide(279.779),
            (Gallons, Millilitres) => Multiply(4546.091879),
            (Gallons, Litres) => Multiply(4.546091879),
            (Gallons, Kilolitres) => Multiply(0.0045460918799),
            (Gallons, Teaspoons) => Multiply(768.0),
            (Gallons, Tablespoons) => Multiply(256.0),
            (Gallons, Quarts) => Multiply(4.0),
            (Gallons, Pints) => Multiply(8.0),
            (Gallons, FluidOunces) => Multiply(160.0),
            (Gallons, CubicMetres) => Divide(219.969),
            (Gallons, CubicFeet) => Divide(6.22884),
            (Gallons, CubicInches) => Multiply(277.419),
            (Gallons, OilBarrels) => Divide(34.9723),
            (FluidOunces, Millilitres) => Multiply(28.413074243749994496),
            (FluidOunces, Litres) => Multiply(0.028413074243749994496),
            (FluidOunces, Kilolitres) => Multiply(0.000028413074243749994),
            (FluidOunces, Teaspoons) => Multiply(4.8),
            (FluidOunces, Tablespoons) => Multiply(1.6),
            (FluidOunces, Quarts) => Divide(40.0),
            (FluidOunces, Pints) => Divide(20.0),
            (FluidOunces, Gallons) => Divide(160.0),
            (FluidOunces, CubicMetres) => Divide(35195.1),
            (FluidOunces, CubicFeet) => Divide(996.614),
            (FluidOunces, CubicInches) => Multiply(1.73387),
            (FluidOunces, OilBarrels) => Divide(5595.57),
            (CubicMetres, Millilitres) => Multiply(1000000.0),
            (CubicMetres, Litres) => Multiply(1000.0),
            (CubicMetres, Kilolitres) => Multiply(1.0),
            (CubicMetres, Teaspoons) => Multiply(168936.0),
            (CubicMetres, Tablespoons) => Multiply(56312.1),
            (CubicMetres, Quarts) => Multiply(879.877),
            (CubicMetres, Pints) => Multiply(1759.75),
            (CubicMetres, Gallons) => Multiply(219.969),
            (CubicMetres, FluidOunces) => Multiply(35195.1),
            (CubicMetres, CubicFeet) => Multiply(35.3147),
            (CubicMetres, CubicInches) => Multiply(61023.7),
            (CubicMetres, OilBarrels) => Multiply(6.28981),
            (CubicFeet, Millilitres) => Multiply(28316.8),
            (CubicFeet, Litres) => Multiply(28.3168),
            (CubicFeet, Kilolitres) => Divide(35.3147),
            (CubicFeet, Teaspoons) => Multiply(4783.74),
            (CubicFeet, Tablespoons) => Multiply(1594.58),
            (CubicFeet, Quarts) => Multiply(24.9153),
            (CubicFeet, Pints) => Multiply(49.8307),
            (CubicFeet, Gallons) => Multiply(6.22884),
            (CubicFeet, FluidOunces) => Multiply(996.614),
            (CubicFeet, CubicMetres) => Divide(35.3147),
            (CubicFeet, CubicInches) => Multiply(1728.0),
            (CubicFeet, OilBarrels) => Divide(5.61458),
            (CubicInches, Millilitres) => Multiply(16.3871),
            (CubicInches, Litres) => Divide(61.0237),
            (CubicInches, Kilolitres) => Divide(61023.7),
            (CubicInches, Teaspoons) => Multiply(2.76837),
            (CubicInches, Tablespoons) => Divide(1.08367),
            (CubicInches, Quarts) => Divide(69.3549),
            (CubicInches, Pints) => Divide(34.6774),
            (CubicInches, Gallons) => Divide(277.419),
            (CubicInches, FluidOunces) => Divide(1.73387),
            (CubicInches, CubicMetres) => Divide(61023.7),
            (CubicInches, CubicFeet) => Divide(1728.0),
            (CubicInches, OilBarrels) => Divide(9702.0),
            (OilBarrels, Millilitres) => Multiply(158987.0),
            (OilBarrels, Litres) => Multiply(158.987),
            (OilBarrels, Kilolitres) => Divide(6.28981),
            (OilBarrels, Teaspoons) => Multiply(26858.7),
            (OilBarrels, Tablespoons) => Multiply(8952.91),
            (OilBarrels, Quarts) => Multiply(139.889),
            (OilBarrels, Pints) => Multiply(279.779),
            (OilBarrels, Gallons) => Multiply(34.9723),
            (OilBarrels, FluidOunces) => Multiply(5595.57),
            (OilBarrels, CubicMetres) => Divide(6.28981),
            (OilBarrels, CubicFeet) => Multiply(5.61458),
            (OilBarrels, CubicInches) => Multiply(9702.0),
            _ => return None,
        };
        Some(rule)
    }
}

/// 체적을 다른 단위로 변환한다.
pub fn convert_volume(
    value: f64,
    from: VolumeUnit,
    to: VolumeUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
