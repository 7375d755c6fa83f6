use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use oscillator_sim::physics::exact;
use oscillator_sim::sim::SchemeComparison;
use oscillator_sim::{presets, Scenario, Trajectory};

fn main() -> eframe::Result {
    env_logger::init();

    let runs = presets::all()
        .into_iter()
        .filter_map(|scenario| match scenario.compare() {
            Ok(cmp) => {
                let exact = exact_overlay(&scenario);
                Some(Run { scenario, cmp, exact })
            }
            Err(e) => {
                log::error!("{}: {}", scenario.name, e);
                None
            }
        })
        .collect();

    let app = OscillatorViz { runs, selected: 0 };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Harmonic Oscillator: Euler vs Euler-Cromer",
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
}

/// Exact curve on its own fine grid, independent of the integration step.
fn exact_overlay(scenario: &Scenario) -> Option<Trajectory> {
    if !scenario.has_exact_solution() {
        return None;
    }
    let c = &scenario.config;
    exact::sample(scenario.oscillator.omega, c.x0, c.v0, c.t_max, 2000).ok()
}

struct Run {
    scenario: Scenario,
    cmp: SchemeComparison,
    exact: Option<Trajectory>,
}

struct OscillatorViz {
    runs: Vec<Run>,
    selected: usize,
}

const MAX_PLOT_POINTS: usize = 2000;

fn plot_stride(traj: &Trajectory) -> usize {
    (traj.len() / MAX_PLOT_POINTS).max(1)
}

fn position_points(traj: &Trajectory) -> PlotPoints {
    let points: Vec<[f64; 2]> = traj
        .iter()
        .step_by(plot_stride(traj))
        .map(|s| [s.time, s.pos])
        .collect();
    PlotPoints::from(points)
}

fn phase_points(traj: &Trajectory) -> PlotPoints {
    let points: Vec<[f64; 2]> = traj
        .phase_points()
        .step_by(plot_stride(traj))
        .map(|(x, v)| [x, v])
        .collect();
    PlotPoints::from(points)
}

impl eframe::App for OscillatorViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (i, run) in self.runs.iter().enumerate() {
                    ui.selectable_value(&mut self.selected, i, run.scenario.name.as_str());
                }
            });
        });

        let Some(run) = self.runs.get(self.selected) else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Position (m)");
                    Plot::new("position")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Time (s)")
                        .legend(Legend::default())
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Euler", position_points(&run.cmp.euler)));
                            plot_ui.line(Line::new(
                                "Euler-Cromer",
                                position_points(&run.cmp.euler_cromer),
                            ));
                            if let Some(exact) = &run.exact {
                                plot_ui.line(Line::new("Exact", position_points(exact)));
                            }
                        });
                });

                ui.vertical(|ui| {
                    ui.label("Phase diagram");
                    Plot::new("phase")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("x (m)")
                        .y_axis_label("v (m/s)")
                        .legend(Legend::default())
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Euler", phase_points(&run.cmp.euler)));
                            plot_ui.line(Line::new(
                                "Euler-Cromer",
                                phase_points(&run.cmp.euler_cromer),
                            ));
                            if let Some(exact) = &run.exact {
                                plot_ui.line(Line::new("Exact", phase_points(exact)));
                            }
                        });
                });
            });
        });
    }
}
