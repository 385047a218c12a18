// The particle field animator: owns the surface and the particle set for one
// mount, and moves between Stopped and Running. Scheduling lives elsewhere;
// this only knows what one frame does.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::random::RandomSource;
use crate::surface::DrawSurface;
use log::{debug, trace, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Stopped,
    Running,
}

pub struct Animator<S: DrawSurface> {
    config: FieldConfig,
    state: AnimatorState,
    surface: Option<S>,
    field: Option<ParticleField>,
    frames: u64,
}

impl<S: DrawSurface> Animator<S> {
    pub fn new(config: FieldConfig) -> Self {
        Animator {
            config,
            state: AnimatorState::Stopped,
            surface: None,
            field: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Frames drawn since the last start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    // Without a surface there is nothing to draw on, so the animator quietly
    // stays stopped. Starting twice keeps the running field.
    pub fn start<R: RandomSource + ?Sized>(
        &mut self,
        surface: Option<S>,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> AnimatorState {
        if self.is_running() {
            warn!("particle animator already running, ignoring start");
            return self.state;
        }
        let mut surface = match surface {
            Some(surface) => surface,
            None => {
                debug!("no drawing surface, particle animator stays stopped");
                return self.state;
            }
        };

        surface.set_size(width, height);
        self.field = Some(ParticleField::new(
            self.config.clone(),
            width as f64,
            height as f64,
            rng,
        ));
        self.surface = Some(surface);
        self.frames = 0;
        self.state = AnimatorState::Running;
        debug!(
            "particle animator started with {} particles on {}x{}",
            self.config.particle_count, width, height
        );
        self.state
    }

    /// Draws one frame. Returns whether the animator is still running, which
    /// is what a frame loop should check before scheduling the next one.
    pub fn tick(&mut self) -> bool {
        if let (AnimatorState::Running, Some(surface), Some(field)) =
            (self.state, self.surface.as_mut(), self.field.as_mut())
        {
            field.frame(surface);
            self.frames += 1;
            trace!("particle frame {}", self.frames);
        }
        self.is_running()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(width, height);
        }
        if let Some(field) = self.field.as_mut() {
            field.resize(width as f64, height as f64);
            debug!("particle field resized to {}x{}", width, height);
        }
    }

    // Drops the particle set and hands the surface back to the caller.
    pub fn stop(&mut self) -> Option<S> {
        if self.is_running() {
            debug!("particle animator stopped after {} frames", self.frames);
        }
        self.state = AnimatorState::Stopped;
        self.field = None;
        self.surface.take()
    }
}
