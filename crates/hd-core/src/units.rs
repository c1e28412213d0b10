// hd-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    /// Molar mass of water [g/mol].
    pub const WATER_MOLAR_MASS: f64 = 18.015_28;

    /// Standard atmosphere [MPa].
    pub const ATMOSPHERE_MPA: f64 = 0.101_325;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_round_trip() {
        assert!((to_mpa(mpa(6.65)) - 6.65).abs() < 1e-12);
        assert!((to_k(k(282.2)) - 282.2).abs() < 1e-12);
    }

    #[test]
    fn megapascal_is_si_scaled() {
        assert!((mpa(1.0).value - 1.0e6).abs() < 1e-6);
    }
}
