use crate::constants::PARTICLE_CANVAS_ID;
use crate::dom::{self, js_err};
use crate::frame;
use fx_core::constants::{CONNECTION_LINE_WIDTH, PARTICLE_RGB};
use fx_core::{FxParams, ParticleField};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn rgba(alpha: f32) -> String {
    let [r, g, b] = PARTICLE_RGB;
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Match the canvas backing store to its parent's layout size.
fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    if let Some(parent) = canvas
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
    {
        canvas.set_width(parent.offset_width().max(0) as u32);
        canvas.set_height(parent.offset_height().max(0) as u32);
    }
    (canvas.width() as f32, canvas.height() as f32)
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

    for p in field.particles() {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.set_fill_style_str(&rgba(p.opacity));
        ctx.fill();
    }

    ctx.set_line_width(CONNECTION_LINE_WIDTH);
    for c in field.connections() {
        ctx.begin_path();
        ctx.move_to(c.from.x as f64, c.from.y as f64);
        ctx.line_to(c.to.x as f64, c.to.y as f64);
        ctx.set_stroke_style_str(&rgba(c.opacity));
        ctx.stroke();
    }
}

pub fn wire(
    window: &web::Window,
    document: &web::Document,
    params: &FxParams,
) -> anyhow::Result<()> {
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, PARTICLE_CANVAS_ID) else {
        log::debug!("[particles] no #{}; disabled", PARTICLE_CANVAS_ID);
        return Ok(());
    };
    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = sync_canvas_to_parent(&canvas);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    let field = Rc::new(RefCell::new(ParticleField::from_params(params, w, h, &mut rng)));
    log::info!(
        "[particles] {} particles on {:.0}x{:.0}",
        field.borrow().particles().len(),
        w,
        h
    );

    {
        let field = field.clone();
        let canvas = canvas.clone();
        dom::listen(window, "resize", move |_: web::Event| {
            let (w, h) = sync_canvas_to_parent(&canvas);
            field.borrow_mut().resize(w, h);
        })?;
    }
    {
        let field = field.clone();
        let canvas_for_move = canvas.clone();
        dom::listen(&canvas, "mousemove", move |ev: web::MouseEvent| {
            let rect = canvas_for_move.get_bounding_client_rect();
            let pointer = Vec2::new(
                (ev.client_x() as f64 - rect.left()) as f32,
                (ev.client_y() as f64 - rect.top()) as f32,
            );
            field.borrow_mut().set_pointer(Some(pointer));
        })?;
    }
    {
        let field = field.clone();
        dom::listen(&canvas, "mouseleave", move |_: web::Event| {
            field.borrow_mut().set_pointer(None);
        })?;
    }

    frame::start_loop(move |_| {
        let mut f = field.borrow_mut();
        f.tick();
        draw(&ctx, &f);
        true
    });
    Ok(())
}
