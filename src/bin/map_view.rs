extern crate sarsim;

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sarsim::*;

const MAP_SIZE: f32 = 400.;

fn flip(y: f32) -> f32 {
    MAP_SIZE - y
}

fn draw_basemap(gc: &mut CanvasGraphicsContext) {
    gc.new_path();
    gc.rect(0., 0., MAP_SIZE, MAP_SIZE);
    gc.fill_color(Color::Rgba(0.78, 0.87, 0.94, 1.0));
    gc.fill();
}

fn draw_region(gc: &mut CanvasGraphicsContext, rect: &Rect, prob: f64, max_prob: f64) {
    let weight = if max_prob > 0. { (prob / max_prob) as f32 } else { 0. };

    gc.new_path();
    gc.rect(
        rect.left as f32,
        flip(rect.top as f32),
        rect.right as f32,
        flip(rect.bottom as f32),
    );
    gc.fill_color(Color::Rgba(1. - weight, 1., 1. - weight, 0.5));
    gc.fill();
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.stroke();
}

fn draw_cross(gc: &mut CanvasGraphicsContext, pos: (u32, u32), color: Color) {
    let (x, y) = (pos.0 as f32, flip(pos.1 as f32));

    gc.new_path();
    gc.move_to(x - 5., y);
    gc.line_to(x + 5., y);
    gc.move_to(x, y - 5.);
    gc.line_to(x, y + 5.);
    gc.line_width(2.0);
    gc.stroke_color(color);
    gc.stroke();
}

fn draw_found(gc: &mut CanvasGraphicsContext, pos: (u32, u32)) {
    gc.new_path();
    gc.circle(pos.0 as f32, flip(pos.1 as f32), 4.);
    gc.fill_color(Color::Rgba(0.1, 0.1, 0.9, 1.0));
    gc.fill();
}

fn print_menu() {
    eprintln!("keys: 1-3 search one area twice, 4-6 search two areas once,");
    eprintln!("      7 start over, 0 or Esc quit");
}

struct App {
    config: SimConfig,
    sim: Simulation,
    rng: StdRng,
    canvas: Canvas,
    results: Vec<u32>,
    found: Option<(u32, u32)>,
}

impl App {
    fn new(canvas: Canvas) -> Result<Self> {
        let config = SimConfig::default();
        let mut rng = StdRng::from_entropy();
        let sim = Simulation::new(config.clone(), &mut rng)?;

        Ok(App {
            config,
            sim,
            rng,
            canvas,
            results: Vec::new(),
            found: None,
        })
    }

    fn redraw(&mut self) {
        let probs = *self.sim.probs();
        let max_prob = probs.iter().copied().fold(f64::MIN, f64::max);
        let rects = self.config.region_rects;
        let last_known = self.config.last_known;
        let found = self.found;

        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(MAP_SIZE);
            gc.center_region(0.0, 0.0, MAP_SIZE, MAP_SIZE);

            draw_basemap(gc);

            for (i, rect) in rects.iter().enumerate() {
                draw_region(gc, rect, probs[i], max_prob);
            }

            draw_cross(gc, last_known, Color::Rgba(0.9, 0.1, 0.1, 1.0));

            if let Some(pos) = found {
                draw_found(gc, pos);
            }
        });
    }

    fn handle_choice(&mut self, code: u8) {
        let action = match Action::from_code(code) {
            Ok(action) => action,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };

        match action {
            Action::Quit => std::process::exit(0),
            Action::Restart => {
                self.sim.reset_episode(&mut self.rng);
                self.found = None;
                eprintln!("started over, P = {:?}", self.sim.probs());
            }
            _ => {
                let round = self.sim.round();
                match self.sim.execute_round(action, &mut self.rng) {
                    RoundOutcome::Found { rounds, position } => {
                        eprintln!("found the target at {position:?} after {rounds} round(s)");
                        self.results.push(rounds);
                        self.found = Some(position);
                        self.sim.reset_episode(&mut self.rng);
                    }
                    RoundOutcome::NotFound => {
                        self.found = None;
                        eprintln!(
                            "search {round}: not found, E = {:?}, P = {:?}",
                            self.sim.effectiveness(),
                            self.sim.probs()
                        );
                    }
                }
            }
        }

        self.redraw();
    }
}

fn main() {
    env_logger::init();

    with_2d_graphics(|| {
        executor::block_on(async {
            let (canvas, mut events) = create_canvas_window_with_events("Search and Rescue");

            let mut app = match App::new(canvas) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };

            print_menu();
            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(key)) => {
                        let code = match key {
                            Key::Key0 => Some(0),
                            Key::Key1 => Some(1),
                            Key::Key2 => Some(2),
                            Key::Key3 => Some(3),
                            Key::Key4 => Some(4),
                            Key::Key5 => Some(5),
                            Key::Key6 => Some(6),
                            Key::Key7 => Some(7),
                            _ => None,
                        };

                        if let Some(code) = code {
                            app.handle_choice(code);
                        }
                    }
                    _ => {}
                }
            }
        });
    });
}
