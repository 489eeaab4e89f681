use crate::constants::{PARTICLE_CANVAS_ID, PARTICLE_CANVAS_STYLE};
use crate::dom;
use crate::frame;
use glam::Vec2;
use martone_core::config::FxConfig;
use martone_core::particles::{is_mobile, ParticleField, ParticleSurface};
use martone_core::tasks::StopHandle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas backed surface.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], alpha)
}

impl ParticleSurface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&rgba(rgb, alpha));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, rgb: [u8; 3], alpha: f32, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&rgba(rgb, alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}

fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(PARTICLE_CANVAS_ID);
    for (prop, value) in PARTICLE_CANVAS_STYLE {
        dom::set_style(&canvas, prop, value);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas).map_err(dom::js_err)?;
    Ok(canvas)
}

/// Spawn the particle background unless disabled or on a mobile form factor.
/// Returns the frame loop's stop handle when the field was started; the
/// field itself is destroyed on `pagehide`.
pub fn init(document: &web::Document, cfg: &FxConfig) -> anyhow::Result<Option<StopHandle>> {
    if !cfg.particles_enabled {
        log::info!("[particles] disabled by page config");
        return Ok(None);
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let (viewport_width, _) = dom::viewport_size();
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    if is_mobile(viewport_width, &user_agent, cfg.mobile_max_width) {
        log::info!("[particles] skipped on mobile");
        return Ok(None);
    }

    let canvas = create_canvas(document)?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        cfg.particles,
        StdRng::from_entropy(),
    )));
    field.borrow_mut().start(w, h);

    {
        let field = field.clone();
        let canvas = canvas.clone();
        dom::add_listener::<web::Event>(&window, "resize", move |_| {
            let (w, h) = dom::sync_canvas_to_viewport(&canvas);
            field.borrow_mut().resize(w, h);
        });
    }

    {
        let field = field.clone();
        dom::add_listener::<web::Event>(&window, "pagehide", move |_| field.borrow_mut().stop());
    }

    let stop = StopHandle::new();

    let mut surface = CanvasSurface { ctx };
    frame::start_loop(stop.clone(), move |_now| {
        field.borrow_mut().frame(&mut surface);
        true
    });
    Ok(Some(stop))
}
