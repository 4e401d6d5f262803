use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use spinpick_shared::constants::{EMPTY_WHEEL_MESSAGE, POINTER_ANGLE, TAU};

const LABEL_MAX_WIDTH: f64 = 180.0;
const LABEL_LINE_HEIGHT: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub labels: Vec<String>,
    pub angle: f64,
    pub is_spinning: bool,
}

/// Stable hue per label: 31-based string hash, mod 360.
pub fn hash_to_hue(label: &str) -> u32 {
    let mut h: u32 = 0;
    for unit in label.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(unit as u32);
    }
    h % 360
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.labels.clone(), props.angle, props.is_spinning),
            move |(labels, angle, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, labels, *angle, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="520"
                height="520"
                class="w-full max-w-[520px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(canvas: &HtmlCanvasElement, labels: &[String], angle: f64, is_spinning: bool) {
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::warn!("Canvas 2d context unavailable");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) - 24.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Background disc
    context.begin_path();
    let _ = context.arc(center_x, center_y, radius + 2.0, 0.0, TAU);
    context.set_fill_style_str("rgba(255, 255, 255, 0.06)");
    context.fill();

    if labels.is_empty() {
        context.set_fill_style_str("rgba(255, 255, 255, 0.7)");
        context.set_font("20px ui-sans-serif, system-ui");
        context.set_text_align("center");
        let _ = context.fill_text(EMPTY_WHEEL_MESSAGE, center_x, center_y);
        return;
    }

    let segment = TAU / labels.len() as f64;

    for (i, label) in labels.iter().enumerate() {
        let start = angle + i as f64 * segment;
        let end = start + segment;

        context.begin_path();
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.set_fill_style_str(&format!("hsla({}, 70%, 55%, 0.40)", hash_to_hue(label)));
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.16)");
        context.set_line_width(2.0);
        context.stroke();

        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(start + segment / 2.0);
        context.set_text_align("right");
        context.set_fill_style_str("rgba(255, 255, 255, 0.92)");
        context.set_font("bold 18px ui-sans-serif, system-ui");
        draw_wrapped_label(&context, label, radius - 16.0, 0.0);
        context.restore();
    }

    // Center cap
    context.begin_path();
    let _ = context.arc(center_x, center_y, 34.0, 0.0, TAU);
    context.set_fill_style_str("rgba(0, 0, 0, 0.20)");
    context.fill();
    context.set_stroke_style_str("rgba(255, 255, 255, 0.18)");
    context.stroke();

    draw_pointer(&context, center_x, center_y, radius, is_spinning);
}

/// Greedy word wrap, centred vertically on `y`.
fn draw_wrapped_label(context: &CanvasRenderingContext2d, text: &str, x: f64, y: f64) {
    let fits = |line: &str| {
        context
            .measure_text(line)
            .map(|m| m.width() <= LABEL_MAX_WIDTH)
            .unwrap_or(true)
    };

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split(' ') {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if !fits(&candidate) && !line.is_empty() {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    let start_y = y - (lines.len().saturating_sub(1)) as f64 * (LABEL_LINE_HEIGHT / 2.0);
    for (idx, line) in lines.iter().enumerate() {
        let _ = context.fill_text(line, x, start_y + idx as f64 * LABEL_LINE_HEIGHT);
    }
}

fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64, is_spinning: bool) {
    // Tip sits on the rim at the pointer angle (top of the wheel)
    let tip_x = center_x + radius * POINTER_ANGLE.cos();
    let tip_y = center_y + radius * POINTER_ANGLE.sin() + 6.0;
    let half_width = 12.0;
    let height = 22.0;

    context.begin_path();
    context.move_to(tip_x, tip_y);
    context.line_to(tip_x - half_width, tip_y - height);
    context.line_to(tip_x + half_width, tip_y - height);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.begin_path();
    let _ = context.arc(tip_x, tip_y - height, 3.0, 0.0, 2.0 * PI);
    context.set_fill_style_str("#e69500");
    context.fill();
}
