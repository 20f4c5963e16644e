use std::collections::VecDeque;

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Points};
use nalgebra::Vector3;

use orbit_sim::config::presets;
use orbit_sim::physics::gravity::{AU, GM_SUN};
use orbit_sim::presentation::ellipse::{unit_circle, DEFAULT_VERTEX_COUNT};
use orbit_sim::presentation::{BodyId, TransformSink, ZoomCamera};
use orbit_sim::sim::{OrbitIntegrator, SimulationClock};

const BODY: BodyId = BodyId(0);
const ORBIT_LINES: BodyId = BodyId(1);
const TRAIL_LEN: usize = 4000;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = presets::earth();
    let body = match cfg.to_elements().and_then(|el| OrbitIntegrator::new(BODY, &el, GM_SUN)) {
        Ok(b) => b.with_orbit_lines(ORBIT_LINES),
        Err(e) => {
            log::error!("cannot start {}: {}", cfg.name, e);
            std::process::exit(1);
        }
    };

    let camera = ZoomCamera::new(body.state().position + Vector3::new(0.0, 0.0, 3.0));
    let app = OrbitViz {
        name: cfg.name,
        body,
        clock: SimulationClock::new(1e6),
        sink: TransformSink::new(),
        camera,
        trail: VecDeque::with_capacity(TRAIL_LEN),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Orbit Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    name: String,
    body: OrbitIntegrator,
    clock: SimulationClock,
    sink: TransformSink,
    camera: ZoomCamera,
    trail: VecDeque<[f64; 2]>,
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (dt, scroll) = ctx.input(|i| (i.stable_dt as f64, i.raw_scroll_delta.y as f64));

        let before = self.body.state().position;
        self.body.advance(dt, &self.clock, &mut self.sink);
        let pos = self.body.state().position;

        // Camera rides along with the body; only the scroll wheel changes its distance
        self.camera.translate(&(pos - before));
        self.camera.apply_zoom(&pos, scroll);

        if self.trail.len() == TRAIL_LEN {
            self.trail.pop_front();
        }
        self.trail.push_back([pos.x, pos.y]);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let el = self.body.elements();
            ui.heading(format!("Body: {}", self.name));
            ui.label(format!(
                "a: {:.4} AU  |  e: {:.5}  |  i: {:.2}°  |  Ω: {:.2}°  |  ω: {:.2}°  |  v: {:.2} km/s",
                el.semimajor_axis,
                el.eccentricity,
                el.inclination.to_degrees(),
                el.ascending_node.to_degrees(),
                el.argument_of_perihelion.to_degrees(),
                self.body.state().speed() * AU,
            ));

            let mut scale = self.clock.time_scale();
            ui.add(
                egui::Slider::new(&mut scale, 0.0..=1e7)
                    .logarithmic(true)
                    .text("time scale"),
            );
            self.clock.set_time_scale(scale);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let half_width = self.camera.distance_to(&pos).max(1e-3);

            let outline: Vec<[f64; 2]> = match self.sink.get(ORBIT_LINES) {
                Some(t) => unit_circle(DEFAULT_VERTEX_COUNT)
                    .iter()
                    .map(|p| {
                        let w = t.apply(p);
                        [w.x, w.y]
                    })
                    .collect(),
                None => Vec::new(),
            };
            let trail: PlotPoints = self.trail.iter().copied().collect();

            Plot::new("orbit")
                .data_aspect(1.0)
                .x_axis_label("x (AU)")
                .y_axis_label("y (AU)")
                .auto_bounds([false, false])
                .allow_scroll(false)
                .allow_zoom(false)
                .allow_drag(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [pos.x - half_width, pos.y - half_width],
                        [pos.x + half_width, pos.y + half_width],
                    ));
                    plot_ui.line(Line::new("Orbit", PlotPoints::new(outline)));
                    plot_ui.line(Line::new("Trail", trail));
                    plot_ui.points(Points::new("Sun", PlotPoints::new(vec![[0.0, 0.0]])).radius(6.0));
                    plot_ui.points(Points::new(self.name.clone(), PlotPoints::new(vec![[pos.x, pos.y]])).radius(4.0));
                });
        });

        ctx.request_repaint();
    }
}
