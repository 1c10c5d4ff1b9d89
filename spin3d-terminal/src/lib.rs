/// Terminal front end for the rotating figures
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{info, warn};
use rand::rngs::ThreadRng;
use spin3d_core::{Figure, Spin, Viewport};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod renderer;

pub use config::{AppConfig, Component, Components};
pub use renderer::Canvas;

/// Share of the terminal the figure may span.
const FILL_RATIO: f64 = 0.9;
/// Terminal cells are about twice as tall as they are wide.
const CELL_ASPECT: f64 = 0.5;

/// Main application struct for terminal rendering
pub struct TerminalApp {
    figure: Figure,
    spin: Spin<ThreadRng>,
    components: Components,
    canvas: Canvas,
    viewport: Viewport,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let figure = Figure::new(config.shape, config.scale);
        let spin = Spin::new(config.spin, rand::rng()).map_err(io::Error::other)?;
        let viewport = fit_viewport(&figure, width as usize, height as usize);

        info!(
            "starting {} (scale {}) on a {}x{} terminal",
            config.shape, config.scale, width, height
        );

        Ok(Self {
            figure,
            spin,
            components: config.components,
            canvas: Canvas::new(width as usize, height as usize),
            viewport,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_secs(1) / self.spin.config().fps.max(1);

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.render()?;
            self.spin.tick(&mut self.figure);

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        info!("stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(code),
            Event::Resize(width, height) => {
                self.canvas.resize(width as usize, height as usize);
                self.viewport = fit_viewport(&self.figure, width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char(key) => {
                if let Some(component) = Component::from_key(key) {
                    self.components.toggle(component);
                    info!(
                        "{} {}",
                        component.name(),
                        if self.components.enabled(component) { "on" } else { "off" }
                    );
                }
            }
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        if let Err(err) = self
            .canvas
            .render_figure(&self.figure, &self.components, &self.viewport)
        {
            warn!("frame skipped: {}", err);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(self.status_line()),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }

    fn status_line(&self) -> String {
        let toggles: Vec<String> = Component::ALL
            .iter()
            .map(|&c| {
                let mark = if self.components.enabled(c) { '+' } else { '-' };
                format!("{}{}({})", mark, c.name(), c.key())
            })
            .collect();
        format!(
            "{} | FPS: {:.1} | {} | Q=Quit",
            self.figure.shape(),
            self.fps,
            toggles.join(" ")
        )
    }
}

/// Viewport that centres the figure on a `width` x `height` cell terminal.
pub fn fit_viewport(figure: &Figure, width: usize, height: usize) -> Viewport {
    let radius = figure
        .iter()
        .map(|v| v.magnitude())
        .fold(0.0_f64, f64::max);
    let span = (width as f64).min(height as f64 / CELL_ASPECT) / 2.0 * FILL_RATIO;
    let scale = if radius > 0.0 { span / radius } else { 1.0 };
    Viewport::new(width as f64, height as f64).with_scale(scale, scale * CELL_ASPECT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spin3d_core::Shape;

    #[test]
    fn test_fit_viewport() {
        let figure = Figure::new(Shape::Cube, 100.0);
        let viewport = fit_viewport(&figure, 120, 40);
        assert_eq!((viewport.center_x, viewport.center_y), (60.0, 20.0));
        assert!((viewport.scale_y - viewport.scale_x * CELL_ASPECT).abs() < 1e-12);

        // the figure stays on screen whatever its orientation
        for vertex in &figure {
            let (x, y) = viewport.project(vertex);
            assert!((0.0..=120.0).contains(&x));
            assert!((0.0..=40.0).contains(&y));
        }
    }

    #[test]
    fn test_fit_viewport_collapsed_figure() {
        let figure = Figure::new(Shape::Tetrahedron, 0.0);
        let viewport = fit_viewport(&figure, 80, 24);
        assert_eq!(viewport.scale_x, 1.0);
    }
}
