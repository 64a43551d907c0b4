//! Stüve diagram geometry: potential temperature, the pressure axis, dry
//! adiabat gridlines and wind barbs.

pub mod thermo;
pub mod wind;
