//! Canvas 2D renderer (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Renderer, Scene};

/// Sprite images
struct Sprites {
    player: HtmlImageElement,
    rock: HtmlImageElement,
    star: HtmlImageElement,
}

/// Draws scenes onto a `<canvas>` with sprite images
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

fn load_image(src: &str) -> Option<HtmlImageElement> {
    let img = HtmlImageElement::new().ok()?;
    img.set_src(src);
    Some(img)
}

impl CanvasRenderer {
    /// Create a renderer for the given canvas. Returns `None` if the 2D context or
    /// image elements cannot be created.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let sprites = Sprites {
            player: load_image("assets/astronaut.svg")?,
            rock: load_image("assets/rock.svg")?,
            star: load_image("assets/star.svg")?,
        };

        Some(Self { ctx, sprites })
    }

    fn stroke_circle(&self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, scene: &Scene<'_>) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            scene.playfield.width as f64,
            scene.playfield.height as f64,
        );

        let p = scene.player;
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.sprites.player,
            p.pos.x as f64,
            p.pos.y as f64,
            p.size.x as f64,
            p.size.y as f64,
        );

        for rock in scene.rocks {
            let center = rock.center();
            ctx.save();
            let _ = ctx.translate(center.x as f64, center.y as f64);
            let _ = ctx.rotate(rock.rotation as f64);
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.sprites.rock,
                -(rock.size.x as f64) / 2.0,
                -(rock.size.y as f64) / 2.0,
                rock.size.x as f64,
                rock.size.y as f64,
            );
            ctx.restore();
        }

        for star in scene.stars {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.sprites.star,
                star.pos.x as f64,
                star.pos.y as f64,
                star.size.x as f64,
                star.size.y as f64,
            );
        }

        if scene.debug {
            for (circle, is_pickup) in scene.hitboxes() {
                let color = if is_pickup {
                    "rgba(0, 255, 0, 0.5)"
                } else {
                    "rgba(255, 0, 0, 0.5)"
                };
                self.stroke_circle(circle.center.x, circle.center.y, circle.radius, color);
            }
        }
    }
}
