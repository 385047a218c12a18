// JavaScript-facing handle for the landing page background. Wires a canvas,
// the animator, the resize listener and the frame loop together, and takes
// them apart again on stop.

use crate::animator::Animator;
use crate::config::FieldConfig;
use crate::error::MountError;
use crate::frame_loop::FrameLoop;
use crate::random::RandSource;
use crate::renderer::CanvasRenderer;
use crate::utils::{viewport_size, Timer};
use log::{debug, log_enabled, warn, Level};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

#[wasm_bindgen]
pub struct ParticleBackground {
    animator: Rc<RefCell<Animator<CanvasRenderer>>>,
    window: Option<Window>,
    frame_loop: Option<FrameLoop>,
    resize_listener: Option<Closure<dyn FnMut()>>,
    // Set when the canvas was created by mount_overlay and should go away on stop.
    owned_canvas: Option<HtmlCanvasElement>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Starts the background on an existing `<canvas id=canvas_id>`. If the
    /// canvas or its 2D context is missing the returned handle is simply not
    /// running.
    pub fn mount(canvas_id: &str) -> ParticleBackground {
        let mut background = ParticleBackground::stopped();
        let result = background.try_mount(|document| {
            find_canvas(document, canvas_id).map(|canvas| (canvas, false))
        });
        background.finish_mount(result);
        background
    }

    /// Creates a full-viewport canvas as the first child of `<body>` and
    /// starts the background on it.
    pub fn mount_overlay() -> ParticleBackground {
        let mut background = ParticleBackground::stopped();
        let result = background.try_mount(|document| {
            create_overlay_canvas(document).map(|canvas| (canvas, true))
        });
        background.finish_mount(result);
        background
    }

    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.animator
            .borrow()
            .field()
            .map_or(0, |field| field.particles().len())
    }

    /// Stops scheduling frames, detaches the resize listener and drops the
    /// particles. Calling it again does nothing.
    pub fn stop(&mut self) {
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if let Some(listener) = self.resize_listener.take() {
            if let Some(window) = self.window.as_ref() {
                let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
                if let Err(err) = window.remove_event_listener_with_callback("resize", callback) {
                    warn!("failed to detach resize listener: {:?}", err);
                }
            }
        }
        self.animator.borrow_mut().stop();
        if let Some(canvas) = self.owned_canvas.take() {
            canvas.remove();
        }
    }
}

impl ParticleBackground {
    fn stopped() -> Self {
        ParticleBackground {
            animator: Rc::new(RefCell::new(Animator::new(FieldConfig::default()))),
            window: None,
            frame_loop: None,
            resize_listener: None,
            owned_canvas: None,
        }
    }

    fn finish_mount(&mut self, result: Result<(), MountError>) {
        match result {
            Ok(()) => debug!("particle background mounted"),
            Err(err) => {
                warn!("particle background not started: {}", err);
                self.stop();
            }
        }
    }

    fn try_mount<F>(&mut self, locate_canvas: F) -> Result<(), MountError>
    where
        F: FnOnce(&Document) -> Result<(HtmlCanvasElement, bool), MountError>,
    {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        self.window = Some(window.clone());

        let (canvas, owned) = locate_canvas(&document)?;
        if owned {
            self.owned_canvas = Some(canvas.clone());
        }
        let (width, height) = viewport_size(&window)?;
        let renderer = CanvasRenderer::new(canvas)?;
        renderer.apply_overlay_style()?;

        let started = self
            .animator
            .borrow_mut()
            .start(Some(renderer), width, height, &mut RandSource::thread());
        debug!("particle animator {:?} at {}x{}", started, width, height);

        let animator = self.animator.clone();
        let resize_window = window.clone();
        let listener = Closure::wrap(Box::new(move || match viewport_size(&resize_window) {
            Ok((width, height)) => animator.borrow_mut().resize(width, height),
            Err(err) => warn!("could not read viewport size: {}", err),
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
        self.resize_listener = Some(listener);

        let animator = self.animator.clone();
        let frame_loop = FrameLoop::start(&window, move || {
            let _timer = if log_enabled!(Level::Trace) {
                Some(Timer::new("ParticleBackground::frame"))
            } else {
                None
            };
            animator.borrow_mut().tick()
        })?;
        self.frame_loop = Some(frame_loop);

        Ok(())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(id.to_owned()))
}

fn create_overlay_canvas(document: &Document) -> Result<HtmlCanvasElement, MountError> {
    let body = document.body().ok_or(MountError::NoBody)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas("canvas".to_owned()))?;
    body.insert_before(&canvas, body.first_child().as_ref())?;
    Ok(canvas)
}
