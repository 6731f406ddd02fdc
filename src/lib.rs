use wasm_bindgen::prelude::*;

pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod growth;
pub mod math;
pub mod mesh;
pub mod render;
pub mod stats;

pub use animation::{AnimationDriver, Behavior, BehaviorParams, BehaviorSet, FrameAnimator, FrameReport};
pub use clock::{Clock, InstantClock, ManualClock};
pub use config::SceneConfig;
pub use error::TreeError;
pub use growth::{BranchNode, BranchTree, NodeId, TreeBuilder};
pub use math::{Mat4, Transform, Vec3};
pub use mesh::{GeometryCatalog, GeometryHandle, MeshParams};
pub use render::{BatchedBackend, Camera, InstanceBuffer, JsBatchedRenderer, Renderer, Viewport};

use stats::{FrameStats, StatsOverlay};

/// Install panic hook and console logger
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Info).ok();
}

/// Branch tree application exposed to JavaScript
#[wasm_bindgen]
pub struct FractalTreeApp {
    driver: AnimationDriver<JsBatchedRenderer, ManualClock>,
    camera: Camera,
    viewport: Viewport,
    stats: FrameStats,
    overlay: Option<StatsOverlay>,
}

#[wasm_bindgen]
impl FractalTreeApp {
    /// Build the tree and register it with `backend`.
    ///
    /// `config_yaml` may be omitted to use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        backend: BatchedBackend,
        width: u32,
        height: u32,
        config_yaml: Option<String>,
    ) -> Result<FractalTreeApp, JsValue> {
        let config = match config_yaml {
            Some(yaml) => SceneConfig::from_yaml(&yaml)?,
            None => SceneConfig::default(),
        };

        let catalog = GeometryCatalog::new(config.mesh);
        let renderer = JsBatchedRenderer::new(backend, &catalog);
        let mut driver = AnimationDriver::new(renderer, ManualClock::default(), config.behaviors);
        driver.build(config.max_depth, &catalog)?;

        let viewport = Viewport::new(width, height);
        let camera = Camera::new(config.camera, &viewport);
        driver.renderer().resize(&viewport);
        driver.renderer().update_camera(&camera);

        Ok(Self {
            driver,
            camera,
            viewport,
            stats: FrameStats::new(config.stats_window_seconds),
            overlay: None,
        })
    }

    /// Animate and draw one frame; `timestamp_ms` is the `requestAnimationFrame` time.
    /// The first frame is animation time zero.
    #[wasm_bindgen]
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        self.driver.clock_mut().sync_millis(timestamp_ms);
        self.driver.tick()?;

        if self.stats.record(timestamp_ms / 1000.0) {
            if let Some(overlay) = &self.overlay {
                overlay.show(&self.stats);
            }
        }
        Ok(())
    }

    /// Track a resized canvas; the tree itself is unaffected
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        self.camera.update_aspect(&self.viewport);
        let renderer = self.driver.renderer();
        renderer.resize(&self.viewport);
        renderer.update_camera(&self.camera);
    }

    /// Show the frame rate in the element with `element_id`
    #[wasm_bindgen]
    pub fn attach_stats(&mut self, element_id: &str) -> Result<(), JsValue> {
        let overlay = StatsOverlay::attach(element_id)?;
        overlay.show(&self.stats);
        self.overlay = Some(overlay);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn node_count(&self) -> usize {
        self.driver.tree().map_or(0, |tree| tree.node_count())
    }

    #[wasm_bindgen]
    pub fn max_depth(&self) -> u32 {
        self.driver.tree().map_or(0, |tree| tree.max_depth())
    }

    #[wasm_bindgen]
    pub fn fps(&self) -> f32 {
        self.stats.fps()
    }

    #[wasm_bindgen]
    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }
}
