pub mod assign;
pub mod degrade;
pub mod gamma;
pub mod gamut;
pub mod hue;
pub mod oklab;
pub mod service;
