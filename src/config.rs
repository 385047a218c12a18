// Tunables for the particle field. The defaults are what the landing page ships with.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Each velocity component is drawn from [-max_speed, max_speed).
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    pub palette: Vec<Color>,
    /// Pairs strictly closer than this are connected.
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub link_color: Color,
    pub link_width: f64,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 50;
    pub const MAX_SPEED: f64 = 0.25;
    pub const LINK_DISTANCE: f64 = 150.0;
    pub const LINK_MAX_ALPHA: f64 = 0.1;
    pub const LINK_WIDTH: f64 = 0.5;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            max_speed: FieldConfig::MAX_SPEED,
            radius_min: 1.0,
            radius_max: 6.0,
            opacity_min: 0.1,
            opacity_max: 0.6,
            palette: vec![Color::INDIGO, Color::ORANGE, Color::SAGE],
            link_distance: FieldConfig::LINK_DISTANCE,
            link_max_alpha: FieldConfig::LINK_MAX_ALPHA,
            link_color: Color::SAGE,
            link_width: FieldConfig::LINK_WIDTH,
        }
    }
}
