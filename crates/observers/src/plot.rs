//! Plotting observer for visualizing Euler trajectories.
//!
//! Pass `&mut PlotObserver` to [`euler::solve`] to record every state
//! component against time, or call [`PlotObserver::record`] from a closure to
//! add traces of your own (an exact solution, a phase portrait, ...).

use eframe::egui;
use egui_plot::{Legend, Line, Plot};
use ivp_core::Observer;
use ivp_solvers::transient::euler;

/// Converts a solver event into one plot sample.
///
/// `x` is the horizontal coordinate and `traces` holds one optional value per
/// trace; `None` leaves that trace without a point for the event.
pub trait Plottable<const N: usize> {
    fn x(&self) -> f64;

    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for euler::Event<'_, f64> {
    fn x(&self) -> f64 {
        self.time
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(*self.state)]
    }
}

impl<const N: usize> Plottable<N> for euler::Event<'_, [f64; N]> {
    fn x(&self) -> f64 {
        self.time
    }

    fn traces(&self) -> [Option<f64>; N] {
        self.state.map(Some)
    }
}

/// One named series of `[x, y]` points.
struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
}

/// Collects `N` traces during a run and shows them in an egui window.
///
/// ```ignore
/// let mut obs = PlotObserver::new(["position", "velocity"]).title("Oscillator").x_label("t");
/// euler::solve(&problem, [1.0, 0.0], [0.0, 10.0], &Config::with_step_size(0.01), &mut obs)?;
/// obs.show()?;
/// ```
pub struct PlotObserver<const N: usize> {
    traces: [Trace; N],
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with one empty trace per name.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            traces: names.map(|name| Trace {
                name: name.to_owned(),
                points: Vec::new(),
            }),
            title: String::new(),
            x_label: None,
            y_label: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Labels the horizontal axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Labels the vertical axis.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Appends `(x, y)` to every trace whose slot in `values` is `Some(y)`.
    pub fn record(&mut self, x: f64, values: [Option<f64>; N]) {
        for (trace, y) in self.traces.iter_mut().zip(values) {
            if let Some(y) = y {
                trace.points.push([x, y]);
            }
        }
    }

    /// Opens a window with the recorded traces and blocks until it closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let Self {
            traces,
            title,
            x_label,
            y_label,
        } = self;
        let app = TrajectoryApp {
            traces: traces.into(),
            x_label,
            y_label,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

/// Records each event; never steers the run.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.x(), event.traces());
        None
    }
}

struct TrajectoryApp {
    traces: Vec<Trace>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory");
            if self.traces.len() > 1 {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    plot_ui.line(Line::new(trace.points.clone()).name(&trace.name));
                }
            });
        });
    }
}
